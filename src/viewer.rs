use egui::{Color32, RichText};
use rfd::FileDialog;

use egui_carousel::config::constants::{APP_NAME, APP_VERSION};
use egui_carousel::i18n::en::*;
use egui_carousel::{
    AnimationKind, Carousel, CarouselOptions, IconNavButton, SlideContent, TextNavButton,
};

struct DemoSlide {
    title: String,
    color: Color32,
}

impl SlideContent for DemoSlide {
    fn ui(&mut self, ui: &mut egui::Ui) {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), 360.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 8.0, self.color);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &self.title,
            egui::FontId::proportional(48.0),
            Color32::WHITE,
        );
    }
}

pub struct DemoApp {
    carousel: Carousel,
    slides: Vec<DemoSlide>,
    plain_buttons: bool,
    fullscreen: bool,
    show_about: bool,
}

impl DemoApp {
    pub fn new(options: CarouselOptions) -> Self {
        let colors = [
            Color32::from_rgb(0x3b, 0x5b, 0x8c),
            Color32::from_rgb(0x8c, 0x3b, 0x5b),
            Color32::from_rgb(0x5b, 0x8c, 0x3b),
            Color32::from_rgb(0x8c, 0x6b, 0x3b),
        ];
        let slides = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| DemoSlide {
                title: format!("{} {}", TEXT_SLIDE, i + 1),
                color,
            })
            .collect();

        let carousel = Carousel::new("demo")
            .with_options(options)
            .on_change(|now, prev| log::info!("slide {prev} -> {now}"));

        Self {
            carousel,
            slides,
            plain_buttons: false,
            fullscreen: false,
            show_about: false,
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (next, prev, escape, f11) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F11),
            )
        });

        if next {
            self.carousel.next();
        }
        if prev {
            self.carousel.prev();
        }
        if escape && self.fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
            self.fullscreen = false;
        }
        if f11 {
            self.fullscreen = !self.fullscreen;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
        }
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.show_file_controls(ui);
                ui.separator();
                self.show_option_controls(ui);
                ui.separator();
                if ui.button(BTN_ABOUT).clicked() {
                    self.show_about = true;
                }
                ui.separator();
                ui.label(format!(
                    "{} / {}",
                    self.carousel.active() + 1,
                    self.slides.len()
                ));
            });
        });
    }

    fn show_file_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button(format!("📂 {}", BTN_OPEN_OPTIONS)).clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter(TEXT_OPTIONS_FILTER, &["toml"])
                .pick_file()
            {
                match CarouselOptions::load(&path) {
                    Ok(options) => {
                        log::info!("Loaded carousel options from {}", path.display());
                        self.carousel.set_options(options);
                    }
                    Err(e) => log::error!("Failed to load carousel options: {e}"),
                }
            }
        }

        if ui.button(format!("💾 {}", BTN_SAVE_OPTIONS)).clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter(TEXT_OPTIONS_FILTER, &["toml"])
                .save_file()
            {
                match self.carousel.options().save(&path) {
                    Ok(()) => log::info!("Saved carousel options to {}", path.display()),
                    Err(e) => log::error!("Failed to save carousel options: {e}"),
                }
            }
        }
    }

    fn show_option_controls(&mut self, ui: &mut egui::Ui) {
        let options = self.carousel.options_mut();

        ui.label(BTN_ANIMATION);
        ui.selectable_value(&mut options.animation, AnimationKind::Fade, "fade");
        ui.selectable_value(&mut options.animation, AnimationKind::Slide, "slide");
        ui.checkbox(&mut options.auto_play, BTN_AUTOPLAY);
        ui.checkbox(&mut options.cycle_navigation, BTN_CYCLE);

        if ui.checkbox(&mut self.plain_buttons, BTN_PLAIN_BUTTONS).changed() {
            if self.plain_buttons {
                self.carousel.set_nav_button(Box::new(TextNavButton));
            } else {
                self.carousel.set_nav_button(Box::new(IconNavButton));
            }
        }
    }

    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        egui::Window::new(BTN_ABOUT)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(APP_NAME).heading());
                    ui.label(format!("v{}", APP_VERSION));
                    ui.label(TEXT_ARROWS);
                    if ui.button(BTN_CLOSE).clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        if !self.fullscreen {
            self.show_toolbar(ctx);
        }

        self.show_about_dialog(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.carousel.show(ui, self.slides.as_mut_slice());
        });
    }
}
