// Unit tests for TimeParts decomposition and display
// Parameterized over the boundaries the countdown boxes care about

use birthday_countdown::models::countdown::{CountdownSnapshot, TimeParts};
use test_case::test_case;

#[test_case(0, "00:00:00"; "zero")]
#[test_case(999, "00:00:00"; "partial second floors down")]
#[test_case(1_000, "00:00:01"; "one second")]
#[test_case(59_999, "00:00:59"; "just under a minute")]
#[test_case(60_000, "00:01:00"; "one minute")]
#[test_case(3_599_000, "00:59:59"; "just under an hour")]
#[test_case(3_600_000, "01:00:00"; "one hour")]
#[test_case(86_399_000, "23:59:59"; "just under a day")]
#[test_case(86_400_000, "24:00:00"; "a full day keeps counting hours")]
#[test_case(360_000_000, "100:00:00"; "three digit hours are not truncated")]
fn test_display(ms: i64, expected: &str) {
    assert_eq!(TimeParts::from_millis(ms).to_string(), expected);
}

#[test_case(2_000, false, "00:00:02"; "two seconds to go")]
#[test_case(0, true, "00:00:00"; "exactly at target")]
#[test_case(-5_000, true, "00:00:05"; "five seconds past")]
#[test_case(-3_661_500, true, "01:01:01"; "an hour past floors partial second")]
fn test_snapshot(remaining_ms: i64, ended: bool, display: &str) {
    let snapshot = CountdownSnapshot::from_remaining(remaining_ms);
    assert_eq!(snapshot.ended, ended);
    assert_eq!(snapshot.parts.to_string(), display);
}
