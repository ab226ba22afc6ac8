use super::common::*;
use crate::activity::WeeklyActivitySeries;
use crate::risk::{
    compute_risk_score, AgeBasedStandards, RiskConfig, RiskConfigError, RiskEngine, RiskLevel,
    RiskScore, RiskThresholds, RiskWeights,
};

#[test]
fn engine_rejects_invalid_configuration_at_construction() {
    let config = RiskConfig {
        weights: RiskWeights {
            average_steps: -1.0,
            ..RiskWeights::default()
        },
        ..RiskConfig::default()
    };

    match RiskEngine::new(config) {
        Err(RiskConfigError::InvalidWeight { name, value }) => {
            assert_eq!(name, "average_steps");
            assert_eq!(value, -1.0);
        }
        other => panic!("expected invalid weight, got {other:?}"),
    }
}

#[test]
fn malformed_override_falls_back_to_all_medium() {
    let weights = RiskWeights {
        step_variability: -0.3,
        ..RiskWeights::default()
    };

    let score =
        RiskEngine::default().score_with(&series(&IDLE_WEEK), Some(&weights), None, stamp());

    assert_eq!(score, RiskScore::fail_safe(stamp()));
    assert_eq!(score.overall, RiskLevel::Medium);
    assert_eq!(score.fall_risk, RiskLevel::Medium);
    assert_eq!(score.frailty_risk, RiskLevel::Medium);
    assert_eq!(score.mental_health_risk, RiskLevel::Medium);
}

#[test]
fn unordered_thresholds_fall_back_instead_of_erroring() {
    let standards = AgeBasedStandards {
        risk_thresholds: RiskThresholds {
            low: 60.0,
            medium: 25.0,
            high: 100.0,
        },
        ..AgeBasedStandards::default()
    };

    let score = compute_risk_score(&series(&STEADY_WEEK), None, Some(&standards));

    assert!(score.same_levels(&RiskScore::fail_safe(score.last_updated)));
}

#[test]
fn non_finite_average_falls_back() {
    let broken = series(&STEADY_WEEK).with_average_steps(f64::NAN);

    assert!(matches!(
        RiskEngine::default().assess_at(&broken, stamp()),
        Err(RiskConfigError::NonFiniteScore)
    ));
    assert_eq!(
        RiskEngine::default().score_at(&broken, stamp()),
        RiskScore::fail_safe(stamp())
    );
}

#[test]
fn per_call_overrides_leave_engine_configuration_untouched() {
    let engine = RiskEngine::default();
    let heavy_trend = RiskWeights {
        step_variability: 0.0,
        average_steps: 0.0,
        trend_direction: 1.0,
        consistency: 0.0,
    };

    let overridden = engine.score_with(&series(&DECLINING_WEEK), Some(&heavy_trend), None, stamp());
    let baseline = engine.score_at(&series(&DECLINING_WEEK), stamp());

    assert_eq!(engine.config(), &RiskConfig::default());
    // composite 60 pushes frailty to medium only under the override
    assert_eq!(overridden.frailty_risk, RiskLevel::Medium);
    assert_eq!(baseline.frailty_risk, RiskLevel::Low);
}

#[test]
fn custom_thresholds_make_overall_high_reachable() {
    let standards = AgeBasedStandards {
        risk_thresholds: RiskThresholds {
            low: 25.0,
            medium: 40.0,
            high: 60.0,
        },
        ..AgeBasedStandards::default()
    };
    let engine = RiskEngine::new(RiskConfig::new(RiskWeights::default(), standards))
        .expect("custom config valid");

    let assessment = engine
        .assess_at(&series(&ERRATIC_WEEK), stamp())
        .expect("assessment runs");

    approx(assessment.combined_score, 184.0 / 3.0);
    assert_eq!(assessment.score.overall, RiskLevel::High);
}

#[test]
fn score_matches_assessment_and_carries_timestamp() {
    let engine = RiskEngine::default();
    let assessment = engine
        .assess_at(&series(&DECLINING_WEEK), stamp())
        .expect("assessment runs");

    assert_eq!(engine.score_at(&series(&DECLINING_WEEK), stamp()), assessment.score);
    assert_eq!(assessment.score.last_updated, stamp());
}

#[test]
fn compute_on_empty_series_never_reports_low_frailty() {
    let score = compute_risk_score(&WeeklyActivitySeries::empty(stamp()), None, None);
    assert_eq!(score.frailty_risk, RiskLevel::High);
}
