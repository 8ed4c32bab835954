pub mod carousel;
pub mod indicators;
pub mod motion;
pub mod nav_button;
pub mod slide_item;
