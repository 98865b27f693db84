use egui::{Margin, RichText, Stroke};

use crate::models::settings::BirthdaySettings;
use crate::ui_egui::theme::BirthdayTheme;

/// Text blocks of the wish card, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishCardText {
    pub heading: String,
    pub greeting: String,
    pub message: String,
    pub sign_off: Option<String>,
    pub closing: String,
}

impl WishCardText {
    pub fn from_settings(settings: &BirthdaySettings) -> Self {
        let name = settings.display_name();
        let sender = settings.sender_name.trim();
        Self {
            heading: format!("💌 A Birthday Wish for {} 💌", name),
            greeting: format!("Dear {},", name),
            message: settings.wish_message.trim().to_string(),
            sign_off: (!sender.is_empty()).then(|| format!("From {}", sender)),
            closing: "Happy Birthday! 🎂🎉".to_string(),
        }
    }
}

/// The card shown once the countdown has ended. `reveal` runs from 0 to 1
/// as the card fades and grows in.
pub fn render_wish_card(ui: &mut egui::Ui, theme: &BirthdayTheme, text: &WishCardText, reveal: f32) {
    let reveal = reveal.clamp(0.0, 1.0);
    let scale = 0.8 + 0.2 * reveal;

    ui.scope(|ui| {
        ui.set_opacity(reveal);
        egui::Frame::none()
            .fill(theme.wish_background)
            .stroke(Stroke::new(1.0, theme.wish_border))
            .rounding(24.0)
            .inner_margin(Margin::same(28.0 * scale))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&text.heading)
                            .size(22.0 * scale)
                            .strong()
                            .color(theme.accent_strong),
                    );
                    ui.add_space(14.0);
                    ui.label(RichText::new(&text.greeting).size(17.0 * scale));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&text.message)
                            .size(17.0 * scale)
                            .color(theme.text_secondary),
                    );
                    if let Some(sign_off) = &text.sign_off {
                        ui.add_space(4.0);
                        ui.label(RichText::new(sign_off).size(17.0 * scale).italics());
                    }
                    ui.add_space(14.0);
                    ui.label(
                        RichText::new(&text.closing)
                            .size(20.0 * scale)
                            .strong()
                            .color(theme.accent),
                    );
                });
            });
    });
}
