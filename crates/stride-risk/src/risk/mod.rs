//! Step-count risk scoring: signals, composite score, domain levels, overall
//! level and the text shown to users.
//!
//! Data flows one way: series → [`RiskSignals`] → composite step risk →
//! domain levels → overall level → [`RiskReport`]. Every stage is a pure
//! function of its inputs; [`RiskEngine`] only fixes the configuration.

pub mod combiner;
pub mod config;
pub mod domain;
pub mod domains;
pub mod overall;
pub mod recommendations;
pub mod signals;
pub mod thresholds;

#[cfg(test)]
mod tests;

pub use config::{AgeBasedStandards, RiskConfig, RiskConfigError, RiskThresholds, RiskWeights};
pub use domain::{DomainKey, RiskLevel, RiskScore};
pub use recommendations::{improvement_suggestions, risk_description, DomainSummary, RiskReport};
pub use signals::RiskSignals;

use crate::activity::WeeklyActivitySeries;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Audit trail of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub signals: RiskSignals,
    pub average_steps: f64,
    pub composite_step_risk: f64,
    pub combined_score: f64,
    pub score: RiskScore,
}

/// Stateless scorer bound to one validated configuration snapshot.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Result<Self, RiskConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Runs the full pipeline, timestamping the result with `now`.
    pub fn assess_at(
        &self,
        series: &WeeklyActivitySeries,
        now: DateTime<Utc>,
    ) -> Result<RiskAssessment, RiskConfigError> {
        assess_with(series, &self.config, now)
    }

    pub fn assess(&self, series: &WeeklyActivitySeries) -> Result<RiskAssessment, RiskConfigError> {
        self.assess_at(series, Utc::now())
    }

    /// Never fails: falls back to an all-medium score if assessment cannot complete.
    pub fn score_at(&self, series: &WeeklyActivitySeries, now: DateTime<Utc>) -> RiskScore {
        score_or_fail_safe(series, &self.config, now)
    }

    pub fn score(&self, series: &WeeklyActivitySeries) -> RiskScore {
        self.score_at(series, Utc::now())
    }

    /// Scores with per-call overrides layered over the engine configuration.
    ///
    /// Overrides apply to this call only; the engine's own snapshot is untouched.
    pub fn score_with(
        &self,
        series: &WeeklyActivitySeries,
        weights: Option<&RiskWeights>,
        standards: Option<&AgeBasedStandards>,
        now: DateTime<Utc>,
    ) -> RiskScore {
        let config = self.overridden(weights, standards);
        score_or_fail_safe(series, &config, now)
    }

    pub fn overridden(
        &self,
        weights: Option<&RiskWeights>,
        standards: Option<&AgeBasedStandards>,
    ) -> RiskConfig {
        RiskConfig {
            weights: weights.copied().unwrap_or(self.config.weights),
            standards: standards.copied().unwrap_or(self.config.standards),
        }
    }
}

/// Library entry point: scores `series` with optional overrides of the defaults.
pub fn compute_risk_score(
    series: &WeeklyActivitySeries,
    weights: Option<&RiskWeights>,
    standards: Option<&AgeBasedStandards>,
) -> RiskScore {
    RiskEngine::default().score_with(series, weights, standards, Utc::now())
}

pub fn assess_with(
    series: &WeeklyActivitySeries,
    config: &RiskConfig,
    now: DateTime<Utc>,
) -> Result<RiskAssessment, RiskConfigError> {
    config.validate()?;
    if !series.average_steps().is_finite() {
        return Err(RiskConfigError::NonFiniteScore);
    }

    let standards = &config.standards;
    let signals = RiskSignals::extract(series, standards);
    let composite = combiner::composite_step_risk(series, &signals, &config.weights);

    let frailty_risk = domains::frailty_risk(series.average_steps(), composite);
    let fall_risk = domains::fall_risk(&signals);
    let mental_health_risk = domains::mental_health_risk(&signals);

    let combined = overall::combined_score(composite, frailty_risk, fall_risk);
    if !combined.is_finite() {
        return Err(RiskConfigError::NonFiniteScore);
    }
    let overall = overall::overall_level(combined, &standards.risk_thresholds);

    debug!(
        points = series.len(),
        average_steps = series.average_steps(),
        average_level = signals.average_level,
        variability = signals.variability,
        trend = signals.trend,
        consistency = signals.consistency,
        composite,
        combined,
        overall = overall.label(),
        "risk assessment computed"
    );

    Ok(RiskAssessment {
        signals,
        average_steps: series.average_steps(),
        composite_step_risk: composite,
        combined_score: combined,
        score: RiskScore {
            overall,
            fall_risk,
            frailty_risk,
            mental_health_risk,
            last_updated: now,
        },
    })
}

fn score_or_fail_safe(
    series: &WeeklyActivitySeries,
    config: &RiskConfig,
    now: DateTime<Utc>,
) -> RiskScore {
    match assess_with(series, config, now) {
        Ok(assessment) => assessment.score,
        Err(err) => {
            warn!(
                error = %err,
                points = series.len(),
                "risk assessment failed; returning fail-safe score"
            );
            RiskScore::fail_safe(now)
        }
    }
}
