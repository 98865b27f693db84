//! Widgets for the birthday card: header, countdown boxes, wish card and the
//! confetti button.

mod countdown_view;
mod header;
mod wish_card;

pub use countdown_view::render_countdown;
pub use header::{render_header, subtitle_text};
pub use wish_card::{render_wish_card, WishCardText};

use egui::{RichText, Vec2};

use crate::ui_egui::theme::BirthdayTheme;

pub const CONFETTI_BUTTON_LABEL: &str = "🎊 Make It Rain Confetti!";

/// Returns true when the button was clicked this frame.
pub fn render_confetti_button(ui: &mut egui::Ui, theme: &BirthdayTheme) -> bool {
    let label = RichText::new(CONFETTI_BUTTON_LABEL)
        .size(18.0)
        .strong()
        .color(theme.on_accent);
    let button = egui::Button::new(label)
        .fill(theme.accent)
        .rounding(12.0)
        .min_size(Vec2::new(260.0, 48.0));

    ui.add(button)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}
