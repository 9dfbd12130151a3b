//! Tests for expanding synthesized rules back into start times.

use chrono::{NaiveDate, NaiveDateTime};
use recurrence_engine::{expand_rule, synthesize, Reduction, Timestamp, SECONDS_PER_DAY};

const DAY: i64 = SECONDS_PER_DAY;

/// Helper: a validated reduction for hand-picked offsets.
fn reduction(interval_secs: i64, offsets: &[i64]) -> Reduction {
    Reduction::new(interval_secs, offsets.to_vec()).unwrap()
}

fn wall(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[test]
fn weekly_rule_with_exception_reproduces_observed_dates() {
    let start = Timestamp::floating(wall(2024, 1, 8, 9));
    let synthesis = synthesize(&start, &reduction(7 * DAY, &[7 * DAY, 14 * DAY, 28 * DAY]));

    let expanded = expand_rule(&start, &synthesis.rule, &synthesis.exceptions).unwrap();
    assert_eq!(
        expanded,
        vec![
            wall(2024, 1, 8, 9),
            wall(2024, 1, 15, 9),
            wall(2024, 1, 22, 9),
            wall(2024, 2, 5, 9),
        ]
    );
}

#[test]
fn daily_interval_three() {
    let start = Timestamp::utc(wall(2024, 2, 27, 18));
    let synthesis = synthesize(&start, &reduction(3 * DAY, &[3 * DAY, 6 * DAY]));

    let expanded = expand_rule(&start, &synthesis.rule, &synthesis.exceptions).unwrap();
    // Crosses the leap day.
    assert_eq!(
        expanded,
        vec![
            wall(2024, 2, 27, 18),
            wall(2024, 3, 1, 18),
            wall(2024, 3, 4, 18),
        ]
    );
}

#[test]
fn zoned_rule_expands_on_wall_clock() {
    let start = Timestamp::zoned(wall(2024, 3, 25, 10), "Europe/Berlin");
    let synthesis = synthesize(&start, &reduction(7 * DAY, &[7 * DAY, 14 * DAY]));

    let expanded = expand_rule(&start, &synthesis.rule, &synthesis.exceptions).unwrap();
    assert!(expanded.iter().all(|dt| dt.format("%H:%M").to_string() == "10:00"));
    assert_eq!(expanded.len(), 3);
}

#[test]
fn all_day_rule_expands_at_midnight() {
    let start = Timestamp::date(NaiveDate::from_ymd_opt(2024, 12, 23).unwrap());
    let synthesis = synthesize(&start, &reduction(7 * DAY, &[14 * DAY]));

    let expanded = expand_rule(&start, &synthesis.rule, &synthesis.exceptions).unwrap();
    assert_eq!(expanded, vec![wall(2024, 12, 23, 0), wall(2025, 1, 6, 0)]);
}
