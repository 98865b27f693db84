// Countdown model
// Value types shared by the time engine and the views

use std::fmt;

use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Whole hours, minutes and seconds of a duration.
///
/// Hours are not wrapped at 24, so a countdown started more than a day out
/// shows e.g. `26:00:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeParts {
    pub const ZERO: TimeParts = TimeParts {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a millisecond duration, flooring to whole seconds.
    /// Negative input is treated as zero.
    pub fn from_millis(ms: i64) -> Self {
        let total_seconds = ms.div_euclid(1000).max(0);
        Self {
            hours: (total_seconds / SECONDS_PER_HOUR) as u64,
            minutes: ((total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total_seconds % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR as u64
            + u64::from(self.minutes) * SECONDS_PER_MINUTE as u64
            + u64::from(self.seconds)
    }

    /// The three display strings (hours, minutes, seconds), zero-padded to
    /// two digits.
    pub fn padded(&self) -> [String; 3] {
        [
            pad_two(self.hours),
            pad_two(u64::from(self.minutes)),
            pad_two(u64::from(self.seconds)),
        ]
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, m, s] = self.padded();
        write!(f, "{}:{}:{}", h, m, s)
    }
}

/// Pad a value to at least two digits.
pub fn pad_two(value: u64) -> String {
    format!("{:02}", value)
}

/// Celebration trigger state. `Celebrated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelebrationState {
    /// The target has not been observed as reached yet
    Waiting,
    /// The one-shot celebration has fired
    Celebrated,
}

impl Default for CelebrationState {
    fn default() -> Self {
        Self::Waiting
    }
}

impl CelebrationState {
    pub fn is_celebrated(&self) -> bool {
        matches!(self, CelebrationState::Celebrated)
    }
}

/// Everything the views need to draw one frame of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownSnapshot {
    /// Time until the target, or time since it once `ended` is set
    pub parts: TimeParts,
    /// True when the target has been reached or passed
    pub ended: bool,
    /// Signed milliseconds from current to target
    pub remaining_ms: i64,
}

impl CountdownSnapshot {
    pub fn from_remaining(remaining_ms: i64) -> Self {
        Self {
            parts: TimeParts::from_millis(remaining_ms.saturating_abs()),
            ended: remaining_ms <= 0,
            remaining_ms,
        }
    }
}
