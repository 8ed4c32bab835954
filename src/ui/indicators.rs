use egui::{Align2, FontId, Id, Rect, Sense, WidgetInfo, WidgetType};

use crate::config::constants::*;
use crate::config::CarouselOptions;
use crate::i18n::en::LABEL_INDICATOR;

/// Accessible label of marker `index`, always suffixed with its 1-based position.
pub fn indicator_label(base: Option<&str>, index: usize) -> String {
    format!("{} {}", base.unwrap_or(LABEL_INDICATOR), index + 1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorsOutput {
    pub rect: Rect,
    pub clicked: Option<usize>,
    pub has_focus: bool,
}

/// One clickable marker per child, the active one highlighted.
#[derive(Debug, Clone, Copy)]
pub struct Indicators<'a> {
    pub len: usize,
    pub active: usize,
    pub options: &'a CarouselOptions,
}

impl Indicators<'_> {
    pub fn show(self, ui: &mut egui::Ui, id: Id) -> IndicatorsOutput {
        let options = self.options;

        let container = &options.indicator_container;
        let margin_top = container.margin.unwrap_or(INDICATOR_MARGIN_TOP);
        let base_size = options.indicator_button.size.unwrap_or(INDICATOR_SIZE);
        let slot = base_size + INDICATOR_SPACING;

        let (row, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), margin_top + slot),
            Sense::hover(),
        );
        let mut output = IndicatorsOutput {
            rect: row,
            clicked: None,
            has_focus: false,
        };
        if let Some([r, g, b]) = container.background {
            ui.painter().rect_filled(row, 0.0, egui::Color32::from_rgb(r, g, b));
        }

        let total_width = slot * self.len as f32;
        let mut x = row.center().x - total_width / 2.0;
        let y = row.top() + margin_top;

        for i in 0..self.len {
            let is_active = i == self.active;
            let style = options.indicator_style(is_active);
            let size = style.size.unwrap_or(INDICATOR_SIZE);

            let rect = Rect::from_min_size(egui::pos2(x, y), egui::vec2(slot, slot));
            x += slot;

            let response = ui.interact(rect, id.with(i), Sense::click());
            let label = indicator_label(style.label.as_deref(), i);
            response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, label.clone()));

            let color = if response.hovered() || response.is_pointer_button_down_on() {
                style.color_or(INDICATOR_HOVER_COLOR)
            } else if is_active {
                style.color_or(ACTIVE_INDICATOR_COLOR)
            } else {
                style.color_or(INDICATOR_COLOR)
            };

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                &options.indicator_icon,
                FontId::proportional(size),
                color,
            );

            if response.clicked() {
                output.clicked = Some(i);
            }
            output.has_focus |= response.has_focus();
        }

        output
    }
}
