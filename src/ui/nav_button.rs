use egui::{Id, Rect, RichText, Sense, WidgetInfo, WidgetType};

use crate::config::constants::*;
use crate::config::ElementStyle;
use crate::core::navigation_manager::Direction;
use crate::i18n::en::{LABEL_NEXT, LABEL_PREV};

/// How a nav button should be shown this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisibility {
    Hidden,
    /// Transparent until its hover wrapper is hovered.
    OnHover,
    Always,
}

impl ButtonVisibility {
    /// `always_invisible` beats `always_visible`, which beats the boundary rule.
    pub fn resolve(can_move: bool, always_visible: bool, always_invisible: bool) -> Self {
        if always_invisible {
            ButtonVisibility::Hidden
        } else if always_visible {
            ButtonVisibility::Always
        } else if can_move {
            ButtonVisibility::OnHover
        } else {
            ButtonVisibility::Hidden
        }
    }

    pub fn opacity(self, wrapper_hovered: bool) -> f32 {
        match self {
            ButtonVisibility::Hidden => 0.0,
            ButtonVisibility::Always => 1.0,
            ButtonVisibility::OnHover if wrapper_hovered => NAV_HOVER_OPACITY,
            ButtonVisibility::OnHover => 0.0,
        }
    }
}

/// Everything a renderer needs to draw one nav button.
#[derive(Debug, Clone, Copy)]
pub struct NavButtonParams<'a> {
    pub id: Id,
    pub direction: Direction,
    pub is_next: bool,
    pub is_prev: bool,
    pub style: &'a ElementStyle,
    pub opacity: f32,
    pub icon: &'a str,
}

/// Strategy for drawing a nav button. `clicked()` on the returned response
/// is the click handler.
pub trait NavButtonRenderer {
    fn show(&self, ui: &mut egui::Ui, rect: Rect, params: NavButtonParams<'_>) -> egui::Response;
}

/// Accessible label of a nav button: the style override, else "Next"/"Previous".
pub fn button_label(style: &ElementStyle, is_next: bool) -> String {
    match &style.label {
        Some(label) => label.clone(),
        None if is_next => LABEL_NEXT.to_owned(),
        None => LABEL_PREV.to_owned(),
    }
}

/// Round filled button with a glyph, used when no renderer is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconNavButton;

impl NavButtonRenderer for IconNavButton {
    fn show(&self, ui: &mut egui::Ui, rect: Rect, params: NavButtonParams<'_>) -> egui::Response {
        let size = params.style.size.unwrap_or(NAV_BUTTON_SIZE);
        let button_rect = Rect::from_center_size(rect.center(), egui::vec2(size, size));
        let response = ui.interact(button_rect, params.id, Sense::click());

        let label = button_label(params.style, params.is_next);
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, label.clone()));

        if params.opacity > 0.0 {
            let mut opacity = params.opacity;
            if response.hovered() && opacity >= 1.0 {
                opacity = NAV_HOVER_OPACITY;
            }
            let fill = params.style.background_or(NAV_BUTTON_COLOR).gamma_multiply(opacity);
            let color = params.style.color_or(NAV_ICON_COLOR).gamma_multiply(opacity);

            let painter = ui.painter_at(rect);
            painter.circle_filled(button_rect.center(), size / 2.0, fill);
            painter.text(
                button_rect.center(),
                egui::Align2::CENTER_CENTER,
                params.icon,
                egui::FontId::proportional(size * 0.5),
                color,
            );
        }

        response
    }
}

/// Hover target for the button on one side of `container`.
pub fn wrapper_rect(container: Rect, direction: Direction, full_height: bool, margin: f32) -> Rect {
    let width = NAV_BUTTON_SIZE + 2.0 * margin;
    let (top, bottom) = if full_height {
        (container.top(), container.bottom())
    } else {
        let top = container.center().y - NAV_WRAPPER_OFFSET;
        (top, top + NAV_WRAPPER_HEIGHT)
    };

    let (left, right) = match direction {
        Direction::Next => (container.right() - width, container.right()),
        Direction::Prev => (container.left(), container.left() + width),
    };

    Rect::from_min_max(egui::pos2(left, top), egui::pos2(right, bottom))
}

/// Frameless glyph-only button.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNavButton;

impl NavButtonRenderer for TextNavButton {
    fn show(&self, ui: &mut egui::Ui, rect: Rect, params: NavButtonParams<'_>) -> egui::Response {
        let color = params.style.color_or(NAV_BUTTON_COLOR).gamma_multiply(params.opacity);
        let text = RichText::new(params.icon)
            .size(params.style.size.unwrap_or(NAV_BUTTON_SIZE) * 0.6)
            .color(color);
        let response = ui.interact(rect, params.id, Sense::click());
        let label = button_label(params.style, params.is_next);
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, label.clone()));
        ui.put(rect, egui::Label::new(text).selectable(false));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invisible_override_wins() {
        assert_eq!(ButtonVisibility::resolve(true, true, true), ButtonVisibility::Hidden);
    }

    #[test]
    fn visible_override_beats_boundary() {
        assert_eq!(ButtonVisibility::resolve(false, true, false), ButtonVisibility::Always);
    }

    #[test]
    fn boundary_hides_otherwise() {
        assert_eq!(ButtonVisibility::resolve(false, false, false), ButtonVisibility::Hidden);
        assert_eq!(ButtonVisibility::resolve(true, false, false), ButtonVisibility::OnHover);
    }

    #[test]
    fn hover_reveals() {
        assert_eq!(ButtonVisibility::OnHover.opacity(false), 0.0);
        assert_eq!(ButtonVisibility::OnHover.opacity(true), NAV_HOVER_OPACITY);
        assert_eq!(ButtonVisibility::Always.opacity(false), 1.0);
    }

    #[test]
    fn labels_default_per_direction() {
        let plain = ElementStyle::default();
        assert_eq!(button_label(&plain, true), LABEL_NEXT);
        assert_eq!(button_label(&plain, false), LABEL_PREV);

        let custom = ElementStyle {
            label: Some("forward".to_owned()),
            ..Default::default()
        };
        assert_eq!(button_label(&custom, false), "forward");
    }

    #[test]
    fn wrappers_hug_their_side() {
        let container = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 300.0));

        let next = wrapper_rect(container, Direction::Next, true, NAV_BUTTON_MARGIN);
        assert_eq!(next.right(), 400.0);
        assert_eq!(next.height(), 300.0);

        let prev = wrapper_rect(container, Direction::Prev, false, NAV_BUTTON_MARGIN);
        assert_eq!(prev.left(), 0.0);
        assert_eq!(prev.height(), NAV_WRAPPER_HEIGHT);
        assert_eq!(prev.top(), 150.0 - NAV_WRAPPER_OFFSET);
    }
}
