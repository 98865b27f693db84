use chrono::{DateTime, Utc};

use super::target::{compute_target, CountdownZone};
use super::trigger::{CelebrationTrigger, Transition};
use crate::models::countdown::{CelebrationState, CountdownSnapshot};
use crate::services::clock::Clock;

/// Signed milliseconds from `current` to `target`. Negative once the target
/// has passed.
pub fn remaining_ms(target: DateTime<Utc>, current: DateTime<Utc>) -> i64 {
    target.signed_duration_since(current).num_milliseconds()
}

/// Emitted on the single tick where the celebration fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationEvent {
    pub target: DateTime<Utc>,
    pub observed_at: DateTime<Utc>,
}

/// Tracks the fixed target, the latest clock reading and the celebration
/// guard for one countdown window.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    zone: CountdownZone,
    target: DateTime<Utc>,
    current: DateTime<Utc>,
    trigger: CelebrationTrigger,
}

impl CountdownEngine {
    /// Compute the target from `now` and start waiting.
    pub fn new(now: DateTime<Utc>, zone: CountdownZone) -> Self {
        let target = compute_target(now, &zone);
        log::info!(
            "Countdown target set to {} ({})",
            zone.format_instant(target),
            zone.label()
        );
        Self::with_target(zone, target, now)
    }

    pub fn from_clock(clock: &dyn Clock, zone: CountdownZone) -> Self {
        Self::new(clock.now(), zone)
    }

    /// Start with an explicit target instead of the next midnight.
    pub fn with_target(zone: CountdownZone, target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            zone,
            target,
            current: now,
            trigger: CelebrationTrigger::new(),
        }
    }

    /// Record a new clock reading. Returns the celebration event on the one
    /// tick where the target is first seen as reached.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<CelebrationEvent> {
        if now < self.current {
            log::warn!(
                "Clock moved backwards by {}ms",
                self.current.signed_duration_since(now).num_milliseconds()
            );
        }
        self.current = now;

        match self.trigger.observe(self.remaining_ms()) {
            Transition::Fired => {
                log::info!(
                    "Countdown reached {} at {}",
                    self.zone.format_instant(self.target),
                    self.zone.format_instant(now)
                );
                Some(CelebrationEvent {
                    target: self.target,
                    observed_at: now,
                })
            }
            Transition::Unchanged => None,
        }
    }

    pub fn remaining_ms(&self) -> i64 {
        remaining_ms(self.target, self.current)
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot::from_remaining(self.remaining_ms())
    }

    pub fn state(&self) -> CelebrationState {
        self.trigger.state()
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn current(&self) -> DateTime<Utc> {
        self.current
    }

    pub fn zone(&self) -> &CountdownZone {
        &self.zone
    }
}
