use std::hash::Hash;
use std::time::Duration;

use egui::{Id, Sense};

use crate::config::constants::NAV_BUTTON_MARGIN;
use crate::config::CarouselOptions;
use crate::core::autoplay::Autoplay;
use crate::core::height_probe::{HeightProbe, Measurement};
use crate::core::navigation_manager::{
    Direction, NavigationEvent, NavigationManager, NavigationState,
};
use crate::core::swipe::SwipeGesture;
use crate::ui::indicators::Indicators;
use crate::ui::motion::Motion;
use crate::ui::nav_button::{
    wrapper_rect, ButtonVisibility, IconNavButton, NavButtonParams, NavButtonRenderer,
};
use crate::ui::slide_item::{SlideContent, SlideItem};

pub struct CarouselResponse {
    /// Hover response of the slide area.
    pub response: egui::Response,
    /// Last transition accepted this frame.
    pub event: Option<NavigationEvent>,
    pub state: NavigationState,
    pub paused: bool,
    /// Row of indicator markers, when shown.
    pub indicators: Option<egui::Rect>,
}

/// Cycles through its slides one at a time.
///
/// Keep the value alive across frames and call [`Carousel::show`] every frame.
/// All navigation (buttons, swipes, indicators, autoplay, the `index` option and
/// the programmatic methods) goes through one transition function.
pub struct Carousel {
    id: Id,
    options: CarouselOptions,
    navigation: NavigationManager,
    autoplay: Autoplay,
    height_probe: HeightProbe,
    measured_height: f32,
    motions: Vec<Motion>,
    gesture: SwipeGesture,
    nav_button: Box<dyn NavButtonRenderer>,
}

impl Carousel {
    pub fn new(id_salt: impl Hash) -> Self {
        let options = CarouselOptions::default();
        Self {
            id: Id::new(id_salt),
            height_probe: HeightProbe::new(options.height_retry_limit),
            options,
            navigation: NavigationManager::new(),
            autoplay: Autoplay::new(),
            measured_height: 0.0,
            motions: Vec::new(),
            gesture: SwipeGesture::default(),
            nav_button: Box::new(IconNavButton),
        }
    }

    pub fn with_options(mut self, options: CarouselOptions) -> Self {
        self.set_options(options);
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.navigation.callbacks_mut().on_change = Some(Box::new(callback));
        self
    }

    pub fn on_next(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.navigation.callbacks_mut().on_next = Some(Box::new(callback));
        self
    }

    pub fn on_prev(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.navigation.callbacks_mut().on_prev = Some(Box::new(callback));
        self
    }

    /// Replaces the built-in round nav buttons.
    pub fn nav_button(mut self, renderer: impl NavButtonRenderer + 'static) -> Self {
        self.nav_button = Box::new(renderer);
        self
    }

    pub fn set_nav_button(&mut self, renderer: Box<dyn NavButtonRenderer>) {
        self.nav_button = renderer;
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        if options.height_retry_limit != self.options.height_retry_limit {
            self.height_probe = HeightProbe::new(options.height_retry_limit);
        }
        self.navigation
            .set_policy(options.strict_indexing, options.cycle_navigation);
        self.options = options;
    }

    pub fn options_mut(&mut self) -> &mut CarouselOptions {
        &mut self.options
    }

    pub fn state(&self) -> NavigationState {
        self.navigation.state()
    }

    pub fn active(&self) -> usize {
        self.navigation.active()
    }

    /// Height reported by the active slide, `0.0` until it has been laid out.
    pub fn measured_height(&self) -> f32 {
        self.measured_height
    }

    pub fn is_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    /// Uses the slide count from the last frame.
    pub fn next(&mut self) -> NavigationEvent {
        self.navigation.next()
    }

    pub fn prev(&mut self) -> NavigationEvent {
        self.navigation.previous()
    }

    pub fn go_to(&mut self, index: usize) -> NavigationEvent {
        self.navigation.go_to(index, None, true)
    }

    pub fn show<S: SlideContent>(&mut self, ui: &mut egui::Ui, slides: &mut [S]) -> CarouselResponse {
        let ctx = ui.ctx().clone();
        let now = ui.input(|i| i.time);
        let mut event = None;

        self.navigation.set_len(slides.len());
        self.navigation
            .set_policy(self.options.strict_indexing, self.options.cycle_navigation);
        if let Some(synced) = self
            .navigation
            .sync_index(self.options.index, self.options.change_on_first_render)
        {
            event = Some(synced);
        }
        self.autoplay
            .configure(self.options.auto_play, self.options.interval(), now);
        self.motions.resize_with(slides.len(), Motion::default);

        let height = self.options.height.unwrap_or(self.measured_height);
        let (container, response) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());

        // Slides, the active one last so it paints on top.
        let state = self.navigation.state();
        let last_index = self.navigation.last_index();
        let transition = self.options.transition();
        let mut swipe = None;
        let mut measured = None;

        let order = (0..slides.len())
            .filter(|&i| i != state.active)
            .chain((state.active < slides.len()).then_some(state.active));
        for index in order {
            let item = SlideItem {
                index,
                last_index,
                state: &state,
                animation: self.options.animation,
                transition,
                swipe: self.options.swipe,
                height: self.options.height,
            };
            let output = item.show(
                ui,
                self.id.with(("slide", index)),
                container,
                &mut self.motions[index],
                &mut self.gesture,
                &mut slides[index],
            );
            swipe = swipe.or(output.swipe);
            measured = measured.or(output.measured_height);
        }

        if self.options.height.is_none() {
            if let Some(measured) = measured {
                match self.height_probe.observe(state.active, measured, now) {
                    Measurement::Settled(h) => {
                        if h != self.measured_height {
                            self.measured_height = h;
                            ctx.request_repaint();
                        }
                    }
                    Measurement::Retry { at } => {
                        ctx.request_repaint_after(Duration::from_secs_f64((at - now).max(0.0)));
                    }
                    Measurement::Waiting | Measurement::GaveUp => {}
                }
            }
        }

        let mut focused = false;

        for direction in [Direction::Next, Direction::Prev] {
            let can_move = match direction {
                Direction::Next => self.navigation.can_go_next(),
                Direction::Prev => self.navigation.can_go_previous(),
            };
            let visibility = ButtonVisibility::resolve(
                can_move,
                self.options.nav_buttons_always_visible,
                self.options.nav_buttons_always_invisible,
            );
            if visibility == ButtonVisibility::Hidden {
                continue;
            }

            let wrapper_style = &self.options.nav_buttons_wrapper;
            let wrapper = wrapper_rect(
                container,
                direction,
                self.options.full_height_hover,
                self.options.nav_buttons.margin.unwrap_or(NAV_BUTTON_MARGIN),
            );
            let hovered = ui.rect_contains_pointer(wrapper);
            if hovered {
                if let Some([r, g, b]) = wrapper_style.background {
                    ui.painter()
                        .rect_filled(wrapper, 0.0, egui::Color32::from_rgb(r, g, b));
                }
            }

            let icon = match direction {
                Direction::Next => &self.options.next_icon,
                Direction::Prev => &self.options.prev_icon,
            };
            let params = NavButtonParams {
                id: self.id.with(("nav_button", direction.is_next())),
                direction,
                is_next: direction.is_next(),
                is_prev: !direction.is_next(),
                style: &self.options.nav_buttons,
                opacity: visibility.opacity(hovered),
                icon,
            };
            let button = self.nav_button.show(ui, wrapper, params);
            focused |= button.has_focus();
            if button.clicked() {
                event = Some(self.navigation.advance(direction.is_next()));
            }
        }

        let mut area = container;
        let mut indicators_rect = None;
        if self.options.indicators {
            let indicators = Indicators {
                len: slides.len(),
                active: self.navigation.active(),
                options: &self.options,
            }
            .show(ui, self.id.with("indicators"));
            area = area.union(indicators.rect);
            indicators_rect = Some(indicators.rect);
            focused |= indicators.has_focus;
            if let Some(index) = indicators.clicked {
                event = Some(self.navigation.go_to(index, None, true));
            }
        }

        if let Some(direction) = swipe {
            event = Some(self.navigation.advance(direction.is_next()));
        }

        let paused = self.options.stop_auto_play_on_hover
            && (ui.rect_contains_pointer(area) || focused);
        self.autoplay.set_paused(paused);
        if self.autoplay.poll(now) {
            event = Some(self.navigation.next());
        }
        if let Some(wait) = self.autoplay.until_next(now) {
            ctx.request_repaint_after(wait);
        }

        if event.is_some() {
            ctx.request_repaint();
        }

        CarouselResponse {
            response,
            event,
            state: self.navigation.state(),
            paused,
            indicators: indicators_rect,
        }
    }
}
