//! Deterministic risk scoring over a rolling window of daily step counts.
//!
//! The [`risk`] module is the pure core; [`activity`] holds the data model and
//! the CSV ingestion seam, while [`config`], [`telemetry`] and [`error`] carry
//! the service plumbing shared with the API binary.

pub mod activity;
pub mod config;
pub mod error;
pub mod risk;
pub mod telemetry;

pub use activity::{
    ActivityDataProvider, ActivitySource, CsvActivityImporter, DailyActivityPoint,
    WeeklyActivitySeries,
};
pub use risk::{
    compute_risk_score, improvement_suggestions, risk_description, AgeBasedStandards, DomainKey,
    RiskAssessment, RiskConfig, RiskConfigError, RiskEngine, RiskLevel, RiskReport, RiskScore,
    RiskWeights,
};
