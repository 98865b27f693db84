mod celebration;
mod lifecycle;
mod panel;

use crate::models::settings::BirthdaySettings;
use crate::services::clock::Clock;
use crate::services::countdown::{CountdownSession, TickTimer};
use crate::services::notification::NotificationService;
use crate::ui_egui::confetti::ConfettiLayer;
use crate::ui_egui::theme::BirthdayTheme;
use crate::ui_egui::views::WishCardText;

const MIN_ROOT_WIDTH: f32 = 420.0;
const MIN_ROOT_HEIGHT: f32 = 480.0;

pub struct BirthdayApp {
    /// Names, wish text and display preferences
    settings: BirthdaySettings,
    /// Target, clock and burst scheduling
    session: CountdownSession<Box<dyn Clock>>,
    /// 1-second countdown refresh; cancelled on exit
    tick_timer: TickTimer,
    /// Particle layer that receives every confetti effect call
    confetti: ConfettiLayer,
    notifications: NotificationService,
    active_theme: BirthdayTheme,
    wish_text: WishCardText,
    /// Set after the first frame so the card fades in
    intro_started: bool,
}

impl eframe::App for BirthdayApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl BirthdayApp {
    /// Window options sized from the settings.
    pub fn native_options(settings: &BirthdaySettings) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(format!("Happy Birthday, {}!", settings.display_name()))
                .with_inner_size([
                    settings.window_width.max(MIN_ROOT_WIDTH),
                    settings.window_height.max(MIN_ROOT_HEIGHT),
                ])
                .with_min_inner_size([MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]),
            ..Default::default()
        }
    }
}
