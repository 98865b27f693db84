// Property-based tests for the countdown arithmetic
// Random durations, clock readings and rollback sequences

use birthday_countdown::models::countdown::{CountdownSnapshot, TimeParts};
use birthday_countdown::services::countdown::{compute_target, CountdownEngine, CountdownZone};
use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use proptest::prelude::*;

fn instant(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

proptest! {
    /// Property: reconstituting h/m/s never exceeds the floored seconds, and
    /// matches exactly on whole seconds
    #[test]
    fn prop_decomposition_reconstitutes(ms in 0i64..10_000_000_000) {
        let parts = TimeParts::from_millis(ms);
        let floored = (ms / 1000) as u64;

        prop_assert!(parts.total_seconds() <= floored);
        prop_assert!(parts.minutes < 60);
        prop_assert!(parts.seconds < 60);
        if ms % 1000 == 0 {
            prop_assert_eq!(parts.total_seconds(), floored);
        }
    }

    /// Property: before and after the target the display is symmetric; only
    /// the ended flag differs
    #[test]
    fn prop_before_and_after_are_symmetric(ms in 1i64..1_000_000_000) {
        let before = CountdownSnapshot::from_remaining(ms);
        let after = CountdownSnapshot::from_remaining(-ms);

        prop_assert!(!before.ended);
        prop_assert!(after.ended);
        prop_assert_eq!(before.parts, after.parts);
    }

    /// Property: the target is a zone-local midnight strictly in the future,
    /// at most one day away
    #[test]
    fn prop_target_is_next_zone_midnight(
        seconds in 946_684_800i64..4_102_444_800,
        offset in -12i32..=14,
    ) {
        let zone = CountdownZone::fixed_hours(offset).unwrap();
        let now = instant(seconds);
        let target = compute_target(now, &zone);

        prop_assert!(target > now);
        prop_assert!(target - now <= Duration::days(1));

        let CountdownZone::Fixed(fixed) = zone else { unreachable!() };
        let local = target.with_timezone(&fixed);
        prop_assert_eq!((local.hour(), local.minute(), local.second()), (0, 0, 0));
    }

    /// Property: every reading on the same zone-day yields the same target
    #[test]
    fn prop_target_idempotent_within_day(
        seconds in 946_684_800i64..4_102_444_800,
        later in 0i64..86_400,
    ) {
        let zone = CountdownZone::fixed_hours(3).unwrap();
        let now = instant(seconds);
        let target = compute_target(now, &zone);
        let later_now = now + Duration::seconds(later);

        if later_now < target {
            prop_assert_eq!(compute_target(later_now, &zone), target);
        }
    }

    /// Property: whatever the clock does, the celebration fires at most once
    /// and only on a non-positive remaining time
    #[test]
    fn prop_celebration_fires_at_most_once(
        steps in prop::collection::vec(-5_000i64..5_000, 1..200),
    ) {
        let zone = CountdownZone::fixed_hours(3).unwrap();
        let target = instant(1_704_142_800);
        let mut now = target - Duration::seconds(10);
        let mut engine = CountdownEngine::with_target(zone, target, now);

        let mut fired = 0;
        for step in steps {
            now += Duration::milliseconds(step);
            if engine.tick(now).is_some() {
                fired += 1;
                prop_assert!(engine.remaining_ms() <= 0);
            }
        }
        prop_assert!(fired <= 1);
    }
}
