use egui::text::LayoutJob;
use egui::{Align2, FontId, RichText, Sense, TextFormat, Vec2};

use crate::ui_egui::theme::BirthdayTheme;

const BADGE_SIZE: f32 = 104.0;
const TITLE_SIZE: f32 = 34.0;

pub fn subtitle_text(name: &str, ended: bool) -> String {
    if ended {
        format!("It's officially {}'s birthday! 🎉", name)
    } else {
        format!("Counting down to midnight for {}'s birthday!", name)
    }
}

/// Party badge, "Happy Birthday, {name}!" and the state-dependent subtitle.
pub fn render_header(ui: &mut egui::Ui, theme: &BirthdayTheme, name: &str, ended: bool) {
    ui.vertical_centered(|ui| {
        render_badge(ui, theme);
        ui.add_space(16.0);

        let mut title = LayoutJob::default();
        title.append(
            "Happy Birthday, ",
            0.0,
            TextFormat {
                font_id: FontId::proportional(TITLE_SIZE),
                color: theme.text_primary,
                ..Default::default()
            },
        );
        title.append(
            name,
            0.0,
            TextFormat {
                font_id: FontId::proportional(TITLE_SIZE),
                color: theme.accent,
                ..Default::default()
            },
        );
        title.append(
            "!",
            0.0,
            TextFormat {
                font_id: FontId::proportional(TITLE_SIZE),
                color: theme.text_primary,
                ..Default::default()
            },
        );
        ui.label(title);

        ui.add_space(6.0);
        ui.label(
            RichText::new(subtitle_text(name, ended))
                .size(16.0)
                .color(theme.text_secondary),
        );
    });
}

fn render_badge(ui: &mut egui::Ui, theme: &BirthdayTheme) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(BADGE_SIZE), Sense::hover());
    let painter = ui.painter_at(rect.expand(12.0));
    let center = rect.center();

    painter.circle_filled(center, BADGE_SIZE * 0.5, theme.badge_background);
    painter.text(
        center,
        Align2::CENTER_CENTER,
        "🎉",
        FontId::proportional(44.0),
        theme.text_primary,
    );
    painter.text(
        rect.right_bottom(),
        Align2::CENTER_CENTER,
        "🎂",
        FontId::proportional(28.0),
        theme.text_primary,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_switches_on_ended() {
        assert_eq!(
            subtitle_text("Gigi", false),
            "Counting down to midnight for Gigi's birthday!"
        );
        assert_eq!(subtitle_text("Gigi", true), "It's officially Gigi's birthday! 🎉");
    }
}
