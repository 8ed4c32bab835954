use egui::{Align, Id, Layout, Rect, Sense, UiBuilder};

use crate::core::animation::{select_state, AnimationKind, AnimationState, Transition};
use crate::core::navigation_manager::{Direction, NavigationState};
use crate::core::swipe::SwipeGesture;
use crate::ui::motion::Motion;

/// One child of the carousel.
pub trait SlideContent {
    fn ui(&mut self, ui: &mut egui::Ui);
}

impl<F: FnMut(&mut egui::Ui)> SlideContent for F {
    fn ui(&mut self, ui: &mut egui::Ui) {
        self(ui)
    }
}

/// Wraps a single child: animates it relative to the active index, reports
/// its height while active and turns drags into navigation intents.
#[derive(Debug, Clone, Copy)]
pub struct SlideItem<'a> {
    pub index: usize,
    pub last_index: usize,
    pub state: &'a NavigationState,
    pub animation: AnimationKind,
    pub transition: Transition,
    pub swipe: bool,
    /// Explicit slide height; the content decides when unset.
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideOutput {
    pub animation_state: AnimationState,
    /// Only the active slide measures itself.
    pub measured_height: Option<f32>,
    pub swipe: Option<Direction>,
}

impl SlideItem<'_> {
    pub fn animation_state(&self) -> AnimationState {
        select_state(self.index, self.state, self.last_index)
    }

    pub fn show(
        self,
        ui: &mut egui::Ui,
        id: Id,
        container: Rect,
        motion: &mut Motion,
        gesture: &mut SwipeGesture,
        content: &mut dyn SlideContent,
    ) -> SlideOutput {
        let animation_state = self.animation_state();
        let variant = animation_state.variant(self.animation);
        let pose = motion.animate(ui.ctx(), id, &variant, self.transition);

        let mut output = SlideOutput {
            animation_state,
            measured_height: None,
            swipe: None,
        };

        if variant.hidden {
            return output;
        }

        let is_active = self.index == self.state.active;

        let mut rect = container.translate(egui::vec2(pose.x * container.width(), 0.0));
        if let Some(height) = self.height {
            rect.set_height(height);
        }

        let mut child = ui.new_child(
            UiBuilder::new()
                .id_salt(id.with("content"))
                .max_rect(rect)
                .layout(Layout::top_down(Align::Center)),
        );
        child.set_clip_rect(container.intersect(ui.clip_rect()));
        child.multiply_opacity(pose.opacity);
        content.ui(&mut child);

        if is_active {
            output.measured_height = Some(child.min_rect().height());
        }

        // Registered after the content so it sits above selectable text for drags.
        if is_active && self.swipe {
            let response = ui.interact(container, id.with("swipe"), Sense::drag());
            if response.drag_started() {
                gesture.begin();
            }
            if response.dragged() {
                gesture.update(response.drag_delta().x);
            }
            if response.drag_stopped() {
                output.swipe = gesture.end();
            }
        }

        output
    }
}
