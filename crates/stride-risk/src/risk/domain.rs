use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Points used by the overall aggregation.
    pub const fn points(self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    pub const fn is_elevated(self) -> bool {
        !matches!(self, RiskLevel::Low)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "moderate" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub const fn ordered() -> [RiskLevel; 3] {
        [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keys for the description catalogue: the three domains plus the overall rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKey {
    Fall,
    Frailty,
    MentalHealth,
    Overall,
}

impl DomainKey {
    pub const fn label(self) -> &'static str {
        match self {
            DomainKey::Fall => "fall",
            DomainKey::Frailty => "frailty",
            DomainKey::MentalHealth => "mental_health",
            DomainKey::Overall => "overall",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fall" => Some(Self::Fall),
            "frailty" => Some(Self::Frailty),
            "mental_health" | "mental" => Some(Self::MentalHealth),
            "overall" => Some(Self::Overall),
            _ => None,
        }
    }

    pub const fn ordered() -> [DomainKey; 4] {
        [
            DomainKey::Overall,
            DomainKey::Fall,
            DomainKey::Frailty,
            DomainKey::MentalHealth,
        ]
    }
}

/// Result of one risk computation. Recomputed on every call; carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    pub overall: RiskLevel,
    pub fall_risk: RiskLevel,
    pub frailty_risk: RiskLevel,
    pub mental_health_risk: RiskLevel,
    pub last_updated: DateTime<Utc>,
}

impl RiskScore {
    /// Conservative answer used when a computation cannot complete.
    pub fn fail_safe(last_updated: DateTime<Utc>) -> Self {
        Self {
            overall: RiskLevel::Medium,
            fall_risk: RiskLevel::Medium,
            frailty_risk: RiskLevel::Medium,
            mental_health_risk: RiskLevel::Medium,
            last_updated,
        }
    }

    pub fn level_for(&self, domain: DomainKey) -> RiskLevel {
        match domain {
            DomainKey::Fall => self.fall_risk,
            DomainKey::Frailty => self.frailty_risk,
            DomainKey::MentalHealth => self.mental_health_risk,
            DomainKey::Overall => self.overall,
        }
    }

    /// Compares every level, ignoring `last_updated`.
    pub fn same_levels(&self, other: &RiskScore) -> bool {
        self.overall == other.overall
            && self.fall_risk == other.fall_risk
            && self.frailty_risk == other.frailty_risk
            && self.mental_health_risk == other.mental_health_risk
    }
}
