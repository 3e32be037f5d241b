//! Row layout and rendering inside the overlay.

use egui::{Button, RichText, Sense, Stroke, Ui};

use crate::theme::RowStyle;
use crate::types::ActionDescriptor;

/// Placement of one action in the menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSlot<'a> {
    pub index: usize,
    pub action: &'a ActionDescriptor,
    /// A divider follows this row. False only for the last row.
    pub divider_below: bool,
}

/// Rows in display order (input order, top to bottom).
pub fn row_slots(actions: &[ActionDescriptor]) -> impl Iterator<Item = RowSlot<'_>> {
    let len = actions.len();
    actions.iter().enumerate().map(move |(index, action)| RowSlot {
        index,
        action,
        divider_below: index + 1 < len,
    })
}

/// Render all rows. Returns the name of the row clicked this frame.
pub fn show_rows<'a>(
    ui: &mut Ui,
    actions: &'a [ActionDescriptor],
    base: &RowStyle,
) -> Option<&'a str> {
    let mut clicked = None;
    for slot in row_slots(actions) {
        let style = slot.action.overrides.apply_to(base);
        ui.push_id(&slot.action.name, |ui| {
            ui.add_space(style.margin_y);
            if row_button(ui, slot.action, &style).clicked() {
                clicked = Some(slot.action.name.as_str());
            }
            ui.add_space(style.margin_y);
            if slot.divider_below {
                divider(ui, style.divider);
            }
        });
    }
    log::trace!("rendered {} action rows", actions.len());
    clicked
}

fn row_button(ui: &mut Ui, action: &ActionDescriptor, style: &RowStyle) -> egui::Response {
    let mut text = RichText::new(action.label()).size(style.text_size);
    if let Some(color) = style.text_color {
        text = text.color(color);
    }
    let mut button = Button::new(text)
        .corner_radius(style.corner_radius)
        .min_size(egui::vec2(ui.available_width(), style.min_height));
    button = match style.fill {
        Some(fill) => button.fill(fill),
        None => button.frame(false),
    };
    ui.add(button)
}

fn divider(ui: &mut Ui, stroke: Stroke) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), stroke.width), Sense::hover());
    ui.painter().hline(rect.x_range(), rect.center().y, stroke);
}
