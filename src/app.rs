use std::path::PathBuf;

use egui_carousel::config::constants::APP_NAME;
use egui_carousel::CarouselOptions;

use crate::viewer::DemoApp;

pub fn run() {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // An optional TOML preset as the first argument.
    let carousel_options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match CarouselOptions::load(&path) {
            Ok(opts) => {
                log::info!("Loaded carousel options from {}", path.display());
                opts
            }
            Err(e) => {
                log::error!("Failed to load carousel options: {e}");
                CarouselOptions::default()
            }
        },
        None => CarouselOptions::default(),
    };

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(carousel_options)))),
    );

    if let Err(e) = result {
        log::error!("Failed to start {APP_NAME}: {e}");
        std::process::exit(1);
    }
}
