use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Fixed-period tick source driven by the host's frame loop.
///
/// The first tick is due at the start instant. A tick is only reported once
/// per period; if the host stalls for several periods the missed ticks
/// collapse into one. After [`TickTimer::cancel`] no tick is ever due again.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    pub fn start(now: Instant) -> Self {
        Self::with_interval(now, TICK_INTERVAL)
    }

    pub fn with_interval(now: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next_due: Some(now),
        }
    }

    /// Returns true when a tick is due, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = Some(next);
        true
    }

    /// Time left until the next tick, `None` once cancelled.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }
}
