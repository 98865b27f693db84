use egui::{Margin, RichText, Stroke};

use crate::models::countdown::TimeParts;
use crate::ui_egui::theme::BirthdayTheme;

const BOX_ROUNDING: f32 = 16.0;
const BOX_MIN_WIDTH: f32 = 96.0;
const VALUE_SIZE: f32 = 40.0;

/// Three zero-padded boxes: hours, minutes, seconds.
pub fn render_countdown(ui: &mut egui::Ui, theme: &BirthdayTheme, parts: &TimeParts) {
    let [hours, minutes, seconds] = parts.padded();
    ui.columns(3, |columns| {
        render_time_box(&mut columns[0], theme, "Hours", &hours);
        render_time_box(&mut columns[1], theme, "Minutes", &minutes);
        render_time_box(&mut columns[2], theme, "Seconds", &seconds);
    });
}

fn render_time_box(ui: &mut egui::Ui, theme: &BirthdayTheme, label: &str, value: &str) {
    ui.vertical_centered(|ui| {
        egui::Frame::none()
            .fill(theme.box_background)
            .stroke(Stroke::new(1.0, theme.box_border))
            .rounding(BOX_ROUNDING)
            .inner_margin(Margin::symmetric(24.0, 20.0))
            .show(ui, |ui| {
                ui.set_min_width(BOX_MIN_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(value)
                            .size(VALUE_SIZE)
                            .strong()
                            .monospace()
                            .color(theme.text_primary),
                    );
                });
            });
        ui.add_space(6.0);
        ui.label(
            RichText::new(label.to_uppercase())
                .size(12.0)
                .color(theme.text_secondary),
        );
    });
}
