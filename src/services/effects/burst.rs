use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::params::{random_burst_origin, ConfettiParams, EffectsSink};

pub const BURST_WINDOW_MS: i64 = 3_000;
/// Nominal 60 Hz frame interval, in microseconds.
pub const FRAME_INTERVAL_US: i64 = 1_000_000 / 60;

/// Spreads the effect calls of one burst across a fixed window of clock
/// progress.
///
/// Frame `k` is due once `k * interval` has elapsed, for
/// `k = 0..=window / interval`, so the first frame is due immediately and the
/// last one at (or just before) the end of the window. A clock reading
/// earlier than the previous one adds no progress and becomes the new
/// reference point, so a rollback delays a burst by at most the gap between
/// polls instead of until the wall clock catches up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurstSchedule {
    last_seen: DateTime<Utc>,
    elapsed_us: i64,
    window_us: i64,
    interval_us: i64,
    emitted: u32,
}

impl BurstSchedule {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self::with_timing(started_at, BURST_WINDOW_MS * 1_000, FRAME_INTERVAL_US)
    }

    pub fn with_timing(started_at: DateTime<Utc>, window_us: i64, interval_us: i64) -> Self {
        Self {
            last_seen: started_at,
            elapsed_us: 0,
            window_us: window_us.max(0),
            interval_us: interval_us.max(1),
            emitted: 0,
        }
    }

    /// Frames in the whole window, saturating at `u32::MAX`.
    pub fn total_frames(&self) -> u32 {
        self.frames_within(self.window_us)
    }

    pub fn emitted(&self) -> u32 {
        self.emitted
    }

    /// Number of frames that became due since the previous call.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> u32 {
        let step_us = now
            .signed_duration_since(self.last_seen)
            .num_microseconds()
            .unwrap_or(i64::MAX);
        if step_us < 0 {
            log::debug!("Clock moved back {}us during a burst", -step_us);
        }
        self.last_seen = now;
        self.elapsed_us = self
            .elapsed_us
            .saturating_add(step_us.max(0))
            .min(self.window_us);

        let due = self.frames_within(self.elapsed_us);
        let fresh = due.saturating_sub(self.emitted);
        self.emitted = self.emitted.max(due);
        fresh
    }

    pub fn is_finished(&self) -> bool {
        self.emitted >= self.total_frames()
    }

    fn frames_within(&self, elapsed_us: i64) -> u32 {
        u32::try_from(elapsed_us / self.interval_us)
            .ok()
            .and_then(|frames| frames.checked_add(1))
            .unwrap_or(u32::MAX)
    }
}

/// Runs any number of overlapping bursts and feeds their frames to a sink.
#[derive(Debug)]
pub struct BurstScheduler<R: Rng = StdRng> {
    active: Vec<BurstSchedule>,
    rng: R,
}

impl BurstScheduler<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> BurstScheduler<R> {
    pub fn new(rng: R) -> Self {
        Self {
            active: Vec::new(),
            rng,
        }
    }

    /// Begin a new burst. Bursts cannot be cancelled; they end on their own
    /// once their window has elapsed.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.active.push(BurstSchedule::new(now));
        log::debug!("Confetti burst started ({} active)", self.active.len());
    }

    pub fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Emit every frame that is due at `now`. Returns the number of effect
    /// calls made.
    pub fn pump(&mut self, now: DateTime<Utc>, sink: &mut dyn EffectsSink) -> u32 {
        let mut fired = 0;
        for schedule in self.active.iter_mut() {
            for _ in 0..schedule.take_due(now) {
                let origin = random_burst_origin(&mut self.rng);
                sink.fire(&ConfettiParams::burst_frame(origin));
                fired += 1;
            }
        }

        let before = self.active.len();
        self.active.retain(|schedule| !schedule.is_finished());
        if self.active.len() < before {
            log::debug!(
                "{} confetti burst(s) finished, {} still active",
                before - self.active.len(),
                self.active.len()
            );
        }

        fired
    }
}
