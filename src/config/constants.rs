pub const APP_NAME: &str = "Carousel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_INTERVAL_MS: u64 = 4000;
pub const DEFAULT_HEIGHT_RETRY_LIMIT: u32 = 50;

pub const DEFAULT_NEXT_ICON: &str = "❯";
pub const DEFAULT_PREV_ICON: &str = "❮";
pub const DEFAULT_INDICATOR_ICON: &str = "●";

pub const NAV_BUTTON_SIZE: f32 = 40.0;
pub const NAV_BUTTON_MARGIN: f32 = 10.0;
/// Hover band used when the hover target is not full height.
pub const NAV_WRAPPER_HEIGHT: f32 = 100.0;
pub const NAV_WRAPPER_OFFSET: f32 = 70.0;
pub const NAV_HOVER_OPACITY: f32 = 0.6;

pub const INDICATOR_SIZE: f32 = 15.0;
pub const INDICATOR_SPACING: f32 = 4.0;
pub const INDICATOR_MARGIN_TOP: f32 = 10.0;

pub const NAV_BUTTON_COLOR: [u8; 3] = [0x49, 0x49, 0x49];
pub const NAV_ICON_COLOR: [u8; 3] = [0xff, 0xff, 0xff];
pub const INDICATOR_COLOR: [u8; 3] = [0xaf, 0xaf, 0xaf];
pub const INDICATOR_HOVER_COLOR: [u8; 3] = [0x1f, 0x1f, 0x1f];
pub const ACTIVE_INDICATOR_COLOR: [u8; 3] = [0x49, 0x49, 0x49];
