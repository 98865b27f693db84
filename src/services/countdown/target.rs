use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::models::settings::{
    SettingsError, TimeZoneSetting, DEFAULT_UTC_OFFSET_HOURS, MAX_UTC_OFFSET_HOURS,
    MIN_UTC_OFFSET_HOURS,
};

const SECONDS_PER_HOUR: i32 = 3600;
/// Step used to walk forward out of a DST gap at midnight.
const GAP_STEP_MINUTES: i64 = 15;
const GAP_MAX_STEPS: usize = 4 * 24;

/// The zone in which "midnight" is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownZone {
    Fixed(FixedOffset),
    Named(Tz),
}

impl Default for CountdownZone {
    fn default() -> Self {
        Self::fixed_hours(DEFAULT_UTC_OFFSET_HOURS).unwrap_or(Self::Fixed(Utc.fix()))
    }
}

impl CountdownZone {
    pub fn from_setting(setting: &TimeZoneSetting) -> Result<Self, SettingsError> {
        match setting {
            TimeZoneSetting::Offset { utc_offset_hours } => {
                let hours = *utc_offset_hours;
                if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&hours) {
                    return Err(SettingsError::OffsetOutOfRange(hours));
                }
                FixedOffset::east_opt(hours * SECONDS_PER_HOUR)
                    .map(Self::Fixed)
                    .ok_or(SettingsError::OffsetOutOfRange(hours))
            }
            TimeZoneSetting::Named { name } => name
                .parse::<Tz>()
                .map(Self::Named)
                .map_err(|_| SettingsError::UnknownTimeZone(name.clone())),
        }
    }

    pub fn fixed_hours(hours: i32) -> Result<Self, SettingsError> {
        Self::from_setting(&TimeZoneSetting::Offset {
            utc_offset_hours: hours,
        })
    }

    /// Human readable zone label, e.g. `UTC+03:00` or `Asia/Riyadh`.
    pub fn label(&self) -> String {
        match self {
            CountdownZone::Fixed(offset) => format!("UTC{}", offset),
            CountdownZone::Named(tz) => tz.name().to_string(),
        }
    }

    /// The first midnight in this zone strictly after the zone-local date of
    /// `now`. At exactly 00:00:00 local the result is the following midnight.
    pub fn next_midnight_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            CountdownZone::Fixed(offset) => next_midnight_in(now, offset),
            CountdownZone::Named(tz) => next_midnight_in(now, tz),
        }
    }

    /// Render a UTC instant in this zone, for logs and tooltips.
    pub fn format_instant(&self, instant: DateTime<Utc>) -> String {
        match self {
            CountdownZone::Fixed(offset) => instant.with_timezone(offset).to_rfc3339(),
            CountdownZone::Named(tz) => instant.with_timezone(tz).to_rfc3339(),
        }
    }
}

/// Compute the countdown target for a clock reading.
pub fn compute_target(now: DateTime<Utc>, zone: &CountdownZone) -> DateTime<Utc> {
    zone.next_midnight_after(now)
}

fn next_midnight_in<Z: TimeZone>(now: DateTime<Utc>, zone: &Z) -> DateTime<Utc> {
    let local_date = now.with_timezone(zone).date_naive();
    let next_day = local_date.succ_opt().unwrap_or(local_date);
    let mut candidate = next_day.and_time(NaiveTime::MIN);

    for _ in 0..GAP_MAX_STEPS {
        if let Some(resolved) = zone.from_local_datetime(&candidate).earliest() {
            return resolved.with_timezone(&Utc);
        }
        // Local midnight does not exist (DST gap); walk forward to the first
        // valid wall-clock time.
        candidate += Duration::minutes(GAP_STEP_MINUTES);
    }

    log::warn!(
        "Could not resolve local midnight {} in zone; treating it as UTC",
        candidate
    );
    Utc.from_utc_datetime(&candidate)
}
