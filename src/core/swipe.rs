use crate::core::navigation_manager::Direction;

/// Accumulates the horizontal offset of one drag gesture.
///
/// The slide itself never follows the pointer (no elastic overshoot, no
/// resting displacement); only the net offset at release matters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeGesture {
    offset_x: f32,
    dragging: bool,
}

impl SwipeGesture {
    pub fn begin(&mut self) {
        self.offset_x = 0.0;
        self.dragging = true;
    }

    pub fn update(&mut self, delta_x: f32) {
        if self.dragging {
            self.offset_x += delta_x;
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Ends the gesture and maps it to a navigation intent.
    pub fn end(&mut self) -> Option<Direction> {
        let offset = self.offset_x;
        *self = Self::default();
        resolve_swipe(offset)
    }
}

/// Rightward drag goes back, leftward drag goes forward.
pub fn resolve_swipe(offset_x: f32) -> Option<Direction> {
    if offset_x > 0.0 {
        Some(Direction::Prev)
    } else if offset_x < 0.0 {
        Some(Direction::Next)
    } else {
        None
    }
}
