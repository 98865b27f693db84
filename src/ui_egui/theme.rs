//! Colour themes for the birthday window.
//!
//! The light theme is a pastel pink card; the dark
//! theme keeps the same accents on a plum background.

use egui::Color32;

use crate::models::settings::ThemePreference;

#[derive(Debug, Clone, PartialEq)]
pub struct BirthdayTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background
    pub app_background: Color32,

    /// Main card fill and border
    pub card_background: Color32,
    pub card_border: Color32,

    /// Hours/minutes/seconds boxes
    pub box_background: Color32,
    pub box_border: Color32,

    /// Wish card fill and border
    pub wish_background: Color32,
    pub wish_border: Color32,

    /// Party badge behind the 🎉
    pub badge_background: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,

    /// Name highlight, wish headings and the confetti button
    pub accent: Color32,
    pub accent_strong: Color32,
    pub on_accent: Color32,
}

impl BirthdayTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(252, 231, 243),
            card_background: Color32::from_rgba_unmultiplied(255, 255, 255, 200),
            card_border: Color32::from_rgb(251, 207, 232),
            box_background: Color32::from_rgb(255, 255, 255),
            box_border: Color32::from_rgb(254, 205, 211),
            wish_background: Color32::from_rgb(255, 228, 240),
            wish_border: Color32::from_rgb(249, 168, 212),
            badge_background: Color32::from_rgb(240, 171, 252),
            text_primary: Color32::from_rgb(30, 41, 59),
            text_secondary: Color32::from_rgb(71, 85, 105),
            accent: Color32::from_rgb(219, 39, 119),
            accent_strong: Color32::from_rgb(190, 24, 93),
            on_accent: Color32::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(38, 20, 40),
            card_background: Color32::from_rgb(56, 30, 58),
            card_border: Color32::from_rgb(112, 46, 96),
            box_background: Color32::from_rgb(72, 38, 74),
            box_border: Color32::from_rgb(131, 56, 110),
            wish_background: Color32::from_rgb(80, 36, 72),
            wish_border: Color32::from_rgb(157, 23, 77),
            badge_background: Color32::from_rgb(134, 25, 143),
            text_primary: Color32::from_rgb(250, 232, 255),
            text_secondary: Color32::from_rgb(203, 178, 210),
            accent: Color32::from_rgb(244, 114, 182),
            accent_strong: Color32::from_rgb(236, 72, 153),
            on_accent: Color32::from_rgb(38, 20, 40),
        }
    }

    /// Resolve a theme preference; `System` asks the OS.
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.inactive.bg_fill = self.accent;
        visuals.widgets.inactive.weak_bg_fill = self.accent;
        visuals.widgets.hovered.bg_fill = self.accent_strong;
        visuals.widgets.hovered.weak_bg_fill = self.accent_strong;
        visuals.widgets.active.bg_fill = self.accent_strong;
        visuals.widgets.active.weak_bg_fill = self.accent_strong;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
