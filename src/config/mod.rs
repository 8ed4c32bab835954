pub mod constants;
pub mod options;

pub use options::{CarouselOptions, ElementStyle};
