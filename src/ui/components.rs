//! Reusable UI components
//!
//! Standalone widgets for the form panel (labeled input and combo rows)
//! and the results panel (stat cards, tip rows, status dots).

use crate::theme;
use eframe::egui;

/// Width of the label column in form rows
const LABEL_COL_WIDTH: f32 = 112.0;

fn paint_row_label(ui: &mut egui::Ui, label: &str) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(LABEL_COL_WIDTH, theme::FIELD_ROW_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter().text(
        rect.left_center(),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(12.5),
        theme::TEXT_MUTED,
    );
}

/// Labeled single-line text input with an optional unit suffix.
/// Returns the inner TextEdit response.
pub fn numeric_field_row(
    ui: &mut egui::Ui,
    label: &str,
    unit: &str,
    value: &mut String,
) -> egui::Response {
    ui.horizontal(|ui| {
        paint_row_label(ui, label);
        theme::input_frame()
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                let unit_width = if unit.is_empty() { 0.0 } else { 34.0 };
                let edit_width = (ui.available_width() - unit_width).max(40.0);
                let response = ui.add(
                    egui::TextEdit::singleline(value)
                        .frame(false)
                        .desired_width(edit_width)
                        .font(egui::FontId::proportional(theme::FONT_LABEL)),
                );
                if !unit.is_empty() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(unit)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                    });
                }
                response
            })
            .inner
    })
    .inner
}

/// Labeled dropdown over a fixed option list. Returns true if the
/// selection changed.
pub fn combo_field_row(
    ui: &mut egui::Ui,
    label: &str,
    options: &[&str],
    value: &mut String,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        paint_row_label(ui, label);
        egui::ComboBox::from_id_salt(label)
            .selected_text(egui::RichText::new(value.as_str()).size(theme::FONT_LABEL))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for &option in options {
                    if ui
                        .selectable_value(value, option.to_string(), option)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// Headline number card used for the prediction results
pub fn stat_card(ui: &mut egui::Ui, icon: &str, title: &str, value: &str, unit: &str) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).size(14.0).color(theme::ACCENT));
            ui.label(
                egui::RichText::new(title)
                    .size(theme::FONT_CAPTION)
                    .color(theme::TEXT_DIM)
                    .strong(),
            );
        });
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_STAT)
                    .color(theme::TEXT_PRIMARY)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(unit)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            );
        });
    });
}

/// Single yield optimization tip with a leading bulb
pub fn tip_row(ui: &mut egui::Ui, tip: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(egui_phosphor::regular::LIGHTBULB)
                .size(13.0)
                .color(theme::STATUS_WARNING),
        );
        ui.label(
            egui::RichText::new(tip)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_SECONDARY),
        );
    });
}

/// Small colored circle for the server status strip
pub fn status_dot(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 3.5, color);
}
