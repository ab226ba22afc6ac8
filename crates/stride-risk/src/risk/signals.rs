use super::config::AgeBasedStandards;
use super::thresholds::{average, consistency, trend, variability};
use crate::activity::WeeklyActivitySeries;
use serde::{Deserialize, Serialize};

/// The four 0–100 sub-signals extracted from one activity window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskSignals {
    pub average_level: f64,
    pub variability: f64,
    pub trend: f64,
    pub consistency: f64,
}

impl RiskSignals {
    pub fn extract(series: &WeeklyActivitySeries, standards: &AgeBasedStandards) -> Self {
        Self {
            average_level: average_level_risk(series.average_steps(), standards),
            variability: variability_risk(series),
            trend: trend_risk(series),
            consistency: consistency_risk(series, standards),
        }
    }
}

pub fn average_level_risk(average_steps: f64, standards: &AgeBasedStandards) -> f64 {
    let target = standards.target_steps as f64;
    if average_steps >= target {
        average::AT_TARGET_RISK
    } else if average_steps >= target * average::NEAR_TARGET_FRACTION {
        average::NEAR_TARGET_RISK
    } else if average_steps >= standards.minimum_steps as f64 {
        average::ABOVE_MINIMUM_RISK
    } else {
        average::BELOW_MINIMUM_RISK
    }
}

/// Coefficient-of-variation bucket; scale invariant by construction.
pub fn variability_risk(series: &WeeklyActivitySeries) -> f64 {
    if series.len() < variability::MIN_POINTS {
        return 0.0;
    }

    let Some(cv) = coefficient_of_variation(series) else {
        return variability::MAX_RISK;
    };

    variability::CV_BUCKETS
        .iter()
        .find(|(above, _)| cv > *above)
        .map(|(_, risk)| *risk)
        .unwrap_or(0.0)
}

/// Percent CV using the population standard deviation.
///
/// `None` means the spread is non-zero around a non-positive mean, which is
/// treated as maximal variability. Zero spread is always a CV of zero.
pub(crate) fn coefficient_of_variation(series: &WeeklyActivitySeries) -> Option<f64> {
    let n = series.len() as f64;
    if n == 0.0 {
        return Some(0.0);
    }
    let mean = series.step_values().sum::<f64>() / n;
    let variance = series
        .step_values()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return Some(0.0);
    }
    if mean <= 0.0 {
        return None;
    }
    Some(100.0 * std_dev / mean)
}

pub fn trend_risk(series: &WeeklyActivitySeries) -> f64 {
    if series.len() < trend::WINDOW {
        return 0.0;
    }

    let tail: Vec<f64> = series
        .step_values()
        .skip(series.len() - trend::WINDOW)
        .collect();
    let slope = ols_slope(&tail);

    if let Some((_, risk)) = trend::DECLINE_BUCKETS
        .iter()
        .find(|(below, _)| slope < *below)
    {
        *risk
    } else if slope > trend::IMPROVING_SLOPE {
        trend::IMPROVING_RISK
    } else {
        trend::FLAT_RISK
    }
}

/// Least-squares slope of `values` against indices `0..n`.
pub(crate) fn ols_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 2 {
        return 0.0;
    }
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (idx, y)| {
            let dx = idx as f64 - mean_x;
            (num + dx * (y - mean_y), den + dx * dx)
        });

    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

pub fn consistency_risk(series: &WeeklyActivitySeries, standards: &AgeBasedStandards) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let low_days = series
        .points()
        .iter()
        .filter(|point| point.value < standards.minimum_steps)
        .count();
    let fraction = low_days as f64 / series.len() as f64;

    consistency::LOW_DAY_BUCKETS
        .iter()
        .find(|(above, _)| fraction > *above)
        .map(|(_, risk)| *risk)
        .unwrap_or(0.0)
}
