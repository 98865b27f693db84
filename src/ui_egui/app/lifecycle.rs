use std::time::Instant;

use super::BirthdayApp;
use crate::models::settings::BirthdaySettings;
use crate::services::clock::Clock;
use crate::services::countdown::{CountdownSession, CountdownZone, TickTimer};
use crate::services::notification::NotificationService;
use crate::ui_egui::confetti::ConfettiLayer;
use crate::ui_egui::theme::BirthdayTheme;
use crate::ui_egui::views::WishCardText;

impl BirthdayApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: BirthdaySettings,
        clock: Box<dyn Clock>,
    ) -> Self {
        let zone = resolve_zone(&settings);
        let session = CountdownSession::new(clock, zone);

        let active_theme = BirthdayTheme::from_preference(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Counting down for {} in {}, theme={:?}, notifications={}",
            settings.display_name(),
            zone.label(),
            settings.theme,
            settings.desktop_notification
        );

        Self {
            notifications: NotificationService::new(settings.desktop_notification),
            wish_text: WishCardText::from_settings(&settings),
            settings,
            session,
            tick_timer: TickTimer::start(Instant::now()),
            confetti: ConfettiLayer::from_entropy(),
            active_theme,
            intro_started: false,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Origins are fractions of the window, so the layer needs the current
        // size before the opening salvo is spawned.
        self.confetti.set_viewport(ctx.screen_rect());
        self.session.mount(&mut self.confetti);

        let now = Instant::now();
        if self.tick_timer.poll(now) {
            self.handle_tick();
        }

        self.session.pump(&mut self.confetti);
        let dt = ctx.input(|input| input.unstable_dt);
        self.confetti.advance(dt);

        let snapshot = self.session.snapshot();
        self.render_main_panel(ctx, &snapshot);
        self.paint_confetti(ctx);

        self.schedule_repaint(ctx, now);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.tick_timer.cancel();
        log::info!(
            "Birthday countdown closed in state {:?}",
            self.session.state()
        );
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.session.is_bursting() || self.confetti.is_animating() {
            ctx.request_repaint();
        } else if let Some(wait) = self.tick_timer.until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

fn resolve_zone(settings: &BirthdaySettings) -> CountdownZone {
    match CountdownZone::from_setting(&settings.time_zone) {
        Ok(zone) => zone,
        Err(e) => {
            log::warn!("{}; falling back to {}", e, CountdownZone::default().label());
            CountdownZone::default()
        }
    }
}
