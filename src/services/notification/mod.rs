use anyhow::Result;
use notify_rust::{Notification, Timeout};

const CELEBRATION_TIMEOUT_MS: u32 = 10_000;

/// Service for displaying the birthday system notification
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Announce that the countdown has reached midnight
    pub fn show_celebration(&self, celebrant_name: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let (summary, body) = celebration_text(celebrant_name);
        Notification::new()
            .summary(&summary)
            .body(&body)
            .timeout(Timeout::Milliseconds(CELEBRATION_TIMEOUT_MS))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(false)
    }
}

fn celebration_text(celebrant_name: &str) -> (String, String) {
    (
        format!("Happy Birthday, {}! 🎂", celebrant_name),
        format!("It's officially {}'s birthday! 🎉", celebrant_name),
    )
}
