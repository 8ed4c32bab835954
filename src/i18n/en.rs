pub const LABEL_NEXT: &str = "Next";
pub const LABEL_PREV: &str = "Previous";
pub const LABEL_INDICATOR: &str = "carousel indicator";

pub const BTN_OPEN_OPTIONS: &str = "Open options";
pub const BTN_SAVE_OPTIONS: &str = "Save options";
pub const BTN_ANIMATION: &str = "Animation";
pub const BTN_AUTOPLAY: &str = "Autoplay";
pub const BTN_CYCLE: &str = "Cycle";
pub const BTN_PLAIN_BUTTONS: &str = "Plain buttons";
pub const BTN_ABOUT: &str = "About";
pub const BTN_CLOSE: &str = "Close";

pub const TEXT_SLIDE: &str = "Slide";
pub const TEXT_ARROWS: &str = "← / → or Space to navigate, drag to swipe";
pub const TEXT_OPTIONS_FILTER: &str = "Carousel options";
