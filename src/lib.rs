//! Slideshow widget for egui: one slide at a time, with fade or slide
//! transitions, autoplay, swipe, nav buttons and position indicators.
//!
//! ```no_run
//! use egui_carousel::Carousel;
//!
//! let mut carousel = Carousel::new("gallery").on_change(|now, prev| {
//!     log::info!("slide {prev} -> {now}");
//! });
//!
//! # let ctx = egui::Context::default();
//! # let _ = ctx.run(Default::default(), |ctx| {
//! egui::CentralPanel::default().show(ctx, |ui| {
//!     let mut slides = [
//!         |ui: &mut egui::Ui| { ui.heading("One"); },
//!         |ui: &mut egui::Ui| { ui.heading("Two"); },
//!     ];
//!     carousel.show(ui, &mut slides[..]);
//! });
//! # });
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod ui;

pub use crate::config::{CarouselOptions, ElementStyle};
pub use crate::core::animation::{AnimationKind, AnimationState};
pub use crate::core::navigation_manager::{Direction, NavigationEvent, NavigationState};
pub use crate::error::CarouselError;
pub use crate::ui::carousel::{Carousel, CarouselResponse};
pub use crate::ui::nav_button::{IconNavButton, NavButtonParams, NavButtonRenderer, TextNavButton};
pub use crate::ui::slide_item::SlideContent;
