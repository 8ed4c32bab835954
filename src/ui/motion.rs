//! Binds named animation states to egui's animation manager.

use egui::{Context, Id};

use crate::core::animation::{Transition, Variant};

/// Interpolated values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Fraction of the container width.
    pub x: f32,
    pub opacity: f32,
}

/// Per-slide targets; an axis a variant leaves unset keeps its last target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    x: f32,
    opacity: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self { x: 0.0, opacity: 1.0 }
    }
}

impl Motion {
    /// Moves the targets to `variant` and samples the tween.
    ///
    /// Hidden variants snap, since nothing is on screen to animate.
    pub fn animate(&mut self, ctx: &Context, id: Id, variant: &Variant, transition: Transition) -> Pose {
        if let Some(x) = variant.x {
            self.x = x;
        }
        if let Some(opacity) = variant.opacity {
            self.opacity = opacity;
        }

        let transition = if variant.hidden {
            Transition::INSTANT
        } else {
            transition
        };

        Pose {
            x: ctx.animate_value_with_time(id.with("x"), self.x, transition.x_secs),
            opacity: ctx.animate_value_with_time(
                id.with("opacity"),
                self.opacity,
                transition.opacity_secs,
            ),
        }
    }
}
