use super::config::RiskThresholds;
use super::domain::RiskLevel;
use super::thresholds::overall;

/// Points-based rollup of composite risk with the frailty and fall levels.
///
/// Mental-health risk does not contribute. With the default thresholds the
/// maximum reachable value is `(100 + 90 + 75) / 3 ≈ 88.3`, below the default
/// `high` cut point of 100.
pub fn combined_score(composite: f64, frailty: RiskLevel, fall: RiskLevel) -> f64 {
    (composite
        + f64::from(frailty.points()) * overall::FRAILTY_MULTIPLIER
        + f64::from(fall.points()) * overall::FALL_MULTIPLIER)
        / overall::DIVISOR
}

pub fn overall_level(combined: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if combined >= thresholds.high {
        RiskLevel::High
    } else if combined >= thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximum_combined_score_stays_below_default_high() {
        let max = combined_score(100.0, RiskLevel::High, RiskLevel::High);
        assert!((max - 265.0 / 3.0).abs() < 1e-9);
        // Known gap: `high` is unreachable with the shipped thresholds.
        assert_eq!(overall_level(max, &RiskThresholds::default()), RiskLevel::Medium);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let thresholds = RiskThresholds::default();
        assert_eq!(overall_level(59.99, &thresholds), RiskLevel::Low);
        assert_eq!(overall_level(60.0, &thresholds), RiskLevel::Medium);
        assert_eq!(overall_level(100.0, &thresholds), RiskLevel::High);
    }

    #[test]
    fn lowered_high_threshold_makes_high_reachable() {
        let thresholds = RiskThresholds {
            low: 25.0,
            medium: 60.0,
            high: 80.0,
        };
        let max = combined_score(100.0, RiskLevel::High, RiskLevel::High);
        assert_eq!(overall_level(max, &thresholds), RiskLevel::High);
    }
}
