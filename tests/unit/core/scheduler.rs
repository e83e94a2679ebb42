//! Unit tests for the cron scheduler

use chrono::{TimeZone, Timelike, Utc};
use stockpulse::core::scheduler::RunScheduler;

#[test]
fn test_invalid_expression_is_rejected() {
    assert!(RunScheduler::new("every day at noon").is_err());
}

#[test]
fn test_next_run_is_after_now() {
    let scheduler = RunScheduler::new("0 30 21 * * *").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 10, 22, 0, 0).unwrap();

    let next = scheduler.next_run_after(now).unwrap();
    assert!(next > now);
    assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 11, 21, 30, 0).unwrap());
}

#[test]
fn test_weekday_schedule_skips_weekend() {
    let scheduler = RunScheduler::new("0 0 22 * * Mon-Fri").unwrap();
    // Friday 2024-05-10 23:00 UTC: next run is Monday.
    let now = Utc.with_ymd_and_hms(2024, 5, 10, 23, 0, 0).unwrap();

    let next = scheduler.next_run_after(now).unwrap();
    assert_eq!(next, Utc.with_ymd_and_hms(2024, 5, 13, 22, 0, 0).unwrap());
    assert_eq!(next.hour(), 22);
    assert_eq!(scheduler.expression(), "0 0 22 * * Mon-Fri");
}
