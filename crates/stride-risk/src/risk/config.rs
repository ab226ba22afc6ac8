use serde::{Deserialize, Serialize};

/// Linear-combination coefficients for the four activity signals.
///
/// Weights are raw multipliers and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub step_variability: f64,
    pub average_steps: f64,
    pub trend_direction: f64,
    pub consistency: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            step_variability: 0.3,
            average_steps: 0.4,
            trend_direction: 0.2,
            consistency: 0.1,
        }
    }
}

impl RiskWeights {
    pub fn validate(&self) -> Result<(), RiskConfigError> {
        for (name, value) in [
            ("step_variability", self.step_variability),
            ("average_steps", self.average_steps),
            ("trend_direction", self.trend_direction),
            ("consistency", self.consistency),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RiskConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Overall-level cut points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 25.0,
            medium: 60.0,
            high: 100.0,
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), RiskConfigError> {
        for (name, value) in [
            ("low", self.low),
            ("medium", self.medium),
            ("high", self.high),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RiskConfigError::InvalidThreshold { name, value });
            }
        }

        if !(self.low < self.medium && self.medium < self.high) {
            return Err(RiskConfigError::UnorderedThresholds {
                low: self.low,
                medium: self.medium,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// Step targets for the monitored population. Defaults are tuned for older adults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBasedStandards {
    pub target_steps: u32,
    pub minimum_steps: u32,
    pub risk_thresholds: RiskThresholds,
}

impl Default for AgeBasedStandards {
    fn default() -> Self {
        Self {
            target_steps: 4000,
            minimum_steps: 1500,
            risk_thresholds: RiskThresholds::default(),
        }
    }
}

impl AgeBasedStandards {
    pub fn validate(&self) -> Result<(), RiskConfigError> {
        if self.target_steps == 0 {
            return Err(RiskConfigError::ZeroTargetSteps);
        }
        self.risk_thresholds.validate()
    }
}

/// Immutable configuration snapshot owned by a [`RiskEngine`](super::RiskEngine).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskConfig {
    #[serde(default)]
    pub weights: RiskWeights,
    #[serde(default)]
    pub standards: AgeBasedStandards,
}

impl RiskConfig {
    pub fn new(weights: RiskWeights, standards: AgeBasedStandards) -> Self {
        Self { weights, standards }
    }

    pub fn validate(&self) -> Result<(), RiskConfigError> {
        self.weights.validate()?;
        self.standards.validate()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskConfigError {
    #[error("weight `{name}` must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("threshold `{name}` must be a finite, non-negative number (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("thresholds must satisfy low < medium < high (got {low}/{medium}/{high})")]
    UnorderedThresholds { low: f64, medium: f64, high: f64 },
    #[error("target_steps must be greater than zero")]
    ZeroTargetSteps,
    #[error("risk inputs produced a non-finite score")]
    NonFiniteScore,
}
