use super::BirthdayApp;
use crate::services::countdown::CelebrationEvent;

impl BirthdayApp {
    /// One 1-second tick: refresh the countdown and react to the single
    /// celebration transition.
    pub(super) fn handle_tick(&mut self) {
        if let Some(event) = self.session.tick() {
            self.celebrate(event);
        }
    }

    /// The session has already started the burst; this covers the
    /// notification side.
    fn celebrate(&self, event: CelebrationEvent) {
        let zone = self.session.engine().zone();
        log::info!(
            "It's {}'s birthday! Target {} observed at {}",
            self.settings.display_name(),
            zone.format_instant(event.target),
            zone.format_instant(event.observed_at)
        );

        if let Err(e) = self
            .notifications
            .show_celebration(self.settings.display_name())
        {
            log::warn!("Failed to show birthday notification: {}", e);
        }
    }

    pub(super) fn handle_confetti_button(&mut self) {
        log::debug!("Confetti button pressed in state {:?}", self.session.state());
        self.session.burst();
    }
}
