pub mod animation;
pub mod autoplay;
pub mod height_probe;
pub mod navigation_manager;
pub mod swipe;
