use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::activity::{ActivitySource, WeeklyActivitySeries};
use crate::risk::{RiskAssessment, RiskEngine};

pub(super) fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn last_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

pub(super) fn series(counts: &[u32]) -> WeeklyActivitySeries {
    WeeklyActivitySeries::from_daily_counts(last_day(), counts, ActivitySource::Device, stamp())
        .expect("fixture dates in range")
}

pub(super) fn assess(counts: &[u32]) -> RiskAssessment {
    RiskEngine::default()
        .assess_at(&series(counts), stamp())
        .expect("default configuration assesses")
}

pub(super) fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) const STEADY_WEEK: [u32; 7] = [5000, 5200, 4800, 5100, 4900, 5000, 5050];
pub(super) const IDLE_WEEK: [u32; 7] = [0; 7];
pub(super) const DECLINING_WEEK: [u32; 7] = [6000, 5500, 5000, 4500, 4000, 3500, 3000];
/// Mostly idle with one very active day: maximal variability and low-day share.
pub(super) const ERRATIC_WEEK: [u32; 5] = [0, 0, 0, 0, 9000];
