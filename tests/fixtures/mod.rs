// Test fixtures - reusable test data
// Provides consistent instants, zones and a recording effects sink

#![allow(dead_code)]

use birthday_countdown::services::countdown::CountdownZone;
use birthday_countdown::services::effects::{ConfettiParams, EffectsSink};
use chrono::{DateTime, Utc};

/// Sample instants for testing
pub mod dates {
    use super::*;

    pub fn parse(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    /// Midnight starting Jan 2, 2024 in UTC+3
    pub fn birthday_midnight() -> DateTime<Utc> {
        parse("2024-01-02T00:00:00+03:00")
    }

    /// Two seconds before the birthday midnight
    pub fn two_seconds_before() -> DateTime<Utc> {
        parse("2024-01-01T23:59:58+03:00")
    }

    /// Morning of the day before the birthday
    pub fn morning_before() -> DateTime<Utc> {
        parse("2024-01-01T09:15:00+03:00")
    }
}

pub fn riyadh() -> CountdownZone {
    CountdownZone::fixed_hours(3).unwrap()
}

/// Sink that keeps every effect call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<ConfettiParams>,
}

impl RecordingSink {
    pub fn count_where(&self, predicate: impl Fn(&ConfettiParams) -> bool) -> usize {
        self.calls.iter().filter(|params| predicate(params)).count()
    }
}

impl EffectsSink for RecordingSink {
    fn fire(&mut self, params: &ConfettiParams) {
        self.calls.push(*params);
    }
}
