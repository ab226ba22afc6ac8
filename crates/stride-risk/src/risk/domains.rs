//! Per-domain classification over the shared signals.
//!
//! The mental-health rule is a heuristic proxy built only from movement
//! (trend and average level). It is not a validated clinical or psychological
//! measure and has no mood or self-report input.

use super::domain::RiskLevel;
use super::signals::RiskSignals;
use super::thresholds::{fall, frailty, mental_health};

pub fn frailty_risk(average_steps: f64, composite: f64) -> RiskLevel {
    if average_steps < frailty::HIGH_BELOW_AVERAGE_STEPS
        || composite > frailty::HIGH_ABOVE_COMPOSITE
    {
        RiskLevel::High
    } else if average_steps < frailty::MEDIUM_BELOW_AVERAGE_STEPS
        || composite > frailty::MEDIUM_ABOVE_COMPOSITE
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn fall_risk(signals: &RiskSignals) -> RiskLevel {
    let combined = (signals.variability + signals.consistency) / 2.0;
    level_above(combined, fall::HIGH_ABOVE, fall::MEDIUM_ABOVE)
}

pub fn mental_health_risk(signals: &RiskSignals) -> RiskLevel {
    let combined = (signals.trend + signals.average_level) / 2.0;
    level_above(combined, mental_health::HIGH_ABOVE, mental_health::MEDIUM_ABOVE)
}

fn level_above(value: f64, high: f64, medium: f64) -> RiskLevel {
    if value > high {
        RiskLevel::High
    } else if value > medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
