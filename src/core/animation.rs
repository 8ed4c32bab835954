//! Named animation states and the parameters each one resolves to.
//!
//! Selection is a pure function of a slide's index and the shared
//! [`NavigationState`]; binding the result to actual motion lives in
//! [`crate::ui::motion`].

use serde::{Deserialize, Serialize};

use crate::core::navigation_manager::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    Fade,
    Slide,
}

impl AnimationKind {
    pub fn default_duration_ms(self) -> u64 {
        match self {
            AnimationKind::Fade => 500,
            AnimationKind::Slide => 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Center,
    LeftwardExit,
    RightwardExit,
    LeftOut,
    RightOut,
}

impl AnimationState {
    /// Off-screen and not mid-transition.
    pub fn is_hidden(self) -> bool {
        matches!(self, AnimationState::LeftOut | AnimationState::RightOut)
    }

    /// Resolves the target parameters for `kind`.
    pub fn variant(self, kind: AnimationKind) -> Variant {
        let slide = kind == AnimationKind::Slide;
        let fade = kind == AnimationKind::Fade;

        let (x, opacity) = match self {
            AnimationState::Center => return Variant::CENTER,
            AnimationState::LeftwardExit | AnimationState::LeftOut => {
                (slide.then_some(-1.0), fade.then_some(0.0))
            }
            AnimationState::RightwardExit | AnimationState::RightOut => {
                (slide.then_some(1.0), fade.then_some(0.0))
            }
        };

        Variant {
            x,
            opacity,
            z_index: 0,
            hidden: self.is_hidden(),
        }
    }
}

/// Target parameters for one named state.
///
/// `x` is a fraction of the container width. `None` leaves that axis where it
/// last was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub x: Option<f32>,
    pub opacity: Option<f32>,
    pub z_index: u8,
    pub hidden: bool,
}

impl Variant {
    pub const CENTER: Variant = Variant {
        x: Some(0.0),
        opacity: Some(1.0),
        z_index: 1,
        hidden: false,
    };
}

/// Tween timing, applied independently to each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub x_secs: f32,
    pub opacity_secs: f32,
}

impl Transition {
    pub fn from_millis(duration_ms: u64) -> Self {
        let secs = duration_ms as f32 / 1000.0;
        Self {
            x_secs: secs,
            opacity_secs: secs,
        }
    }

    pub const INSTANT: Transition = Transition {
        x_secs: 0.0,
        opacity_secs: 0.0,
    };
}

/// Picks the state for the slide at `index`.
///
/// A jump between the two ends of the sequence is treated as one wrap step;
/// any other jump follows `state.direction`.
pub fn select_state(index: usize, state: &NavigationState, last_index: usize) -> AnimationState {
    let NavigationState {
        active,
        prev_active,
        ..
    } = *state;

    let wraps_from_left = active == last_index && index == 0;
    let wraps_from_right = active == 0 && index == last_index;

    if index == active {
        AnimationState::Center
    } else if index == prev_active {
        if wraps_from_left {
            AnimationState::RightwardExit
        } else if wraps_from_right {
            AnimationState::LeftwardExit
        } else if state.is_next() {
            AnimationState::LeftwardExit
        } else {
            AnimationState::RightwardExit
        }
    } else if wraps_from_left {
        AnimationState::RightOut
    } else if wraps_from_right {
        AnimationState::LeftOut
    } else if index < active {
        AnimationState::LeftOut
    } else {
        AnimationState::RightOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation_manager::Direction;

    fn state(active: usize, prev_active: usize, direction: Direction) -> NavigationState {
        NavigationState {
            active,
            prev_active,
            direction,
        }
    }

    #[test]
    fn forward_wrap_from_last() {
        let s = state(0, 2, Direction::Next);
        assert_eq!(select_state(0, &s, 2), AnimationState::Center);
        assert_eq!(select_state(2, &s, 2), AnimationState::LeftwardExit);
        assert_eq!(select_state(1, &s, 2), AnimationState::RightOut);
    }

    #[test]
    fn wrap_overrides_direction_flag() {
        // Indicator jump 0 -> last reads as "next" but exits like a backward wrap.
        let s = state(2, 0, Direction::Next);
        assert_eq!(select_state(0, &s, 2), AnimationState::RightwardExit);

        let s = state(0, 2, Direction::Prev);
        assert_eq!(select_state(2, &s, 2), AnimationState::LeftwardExit);
    }

    #[test]
    fn plain_steps_follow_direction() {
        let s = state(2, 1, Direction::Next);
        assert_eq!(select_state(1, &s, 4), AnimationState::LeftwardExit);
        assert_eq!(select_state(0, &s, 4), AnimationState::LeftOut);
        assert_eq!(select_state(3, &s, 4), AnimationState::RightOut);

        let s = state(1, 2, Direction::Prev);
        assert_eq!(select_state(2, &s, 4), AnimationState::RightwardExit);
    }

    #[test]
    fn long_jump_uses_linear_direction() {
        let s = state(3, 1, Direction::Next);
        assert_eq!(select_state(1, &s, 4), AnimationState::LeftwardExit);
        assert_eq!(select_state(4, &s, 4), AnimationState::RightOut);
        assert_eq!(select_state(0, &s, 4), AnimationState::LeftOut);
    }

    #[test]
    fn single_child_is_always_center() {
        let s = state(0, 0, Direction::Next);
        assert_eq!(select_state(0, &s, 0), AnimationState::Center);
    }

    #[test]
    fn slide_variants_move_without_fading() {
        let v = AnimationState::LeftwardExit.variant(AnimationKind::Slide);
        assert_eq!(v.x, Some(-1.0));
        assert_eq!(v.opacity, None);
        assert!(!v.hidden);

        let v = AnimationState::RightOut.variant(AnimationKind::Slide);
        assert_eq!(v.x, Some(1.0));
        assert!(v.hidden);
    }

    #[test]
    fn fade_variants_fade_in_place() {
        let v = AnimationState::RightwardExit.variant(AnimationKind::Fade);
        assert_eq!(v.x, None);
        assert_eq!(v.opacity, Some(0.0));
        assert_eq!(v.z_index, 0);

        assert_eq!(AnimationState::Center.variant(AnimationKind::Fade), Variant::CENTER);
    }

    #[test]
    fn durations() {
        assert_eq!(AnimationKind::Fade.default_duration_ms(), 500);
        assert_eq!(AnimationKind::Slide.default_duration_ms(), 200);
        let t = Transition::from_millis(250);
        assert!((t.x_secs - 0.25).abs() < f32::EPSILON);
        assert!((t.opacity_secs - 0.25).abs() < f32::EPSILON);
    }
}
