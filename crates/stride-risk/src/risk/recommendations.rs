use super::domain::{DomainKey, RiskLevel, RiskScore};
use serde::{Deserialize, Serialize};

/// Fixed copy for every `(level, domain)` pair.
pub fn risk_description(level: RiskLevel, domain: DomainKey) -> &'static str {
    match (domain, level) {
        (DomainKey::Fall, RiskLevel::Low) => {
            "Your walking pattern is steady and regular; fall risk looks low."
        }
        (DomainKey::Fall, RiskLevel::Medium) => {
            "Some irregular days suggest a moderate fall risk. Balance work and a safe home help."
        }
        (DomainKey::Fall, RiskLevel::High) => {
            "Large swings and frequent low-activity days point to a high fall risk."
        }
        (DomainKey::Frailty, RiskLevel::Low) => {
            "Daily activity is at a healthy level for maintaining strength."
        }
        (DomainKey::Frailty, RiskLevel::Medium) => {
            "Activity is below the recommended level; strength may start to decline."
        }
        (DomainKey::Frailty, RiskLevel::High) => {
            "Activity is well below the minimum and strongly associated with frailty."
        }
        (DomainKey::MentalHealth, RiskLevel::Low) => {
            "Movement patterns are stable, with no sign of withdrawal from daily routines."
        }
        (DomainKey::MentalHealth, RiskLevel::Medium) => {
            "Reduced or declining movement can accompany low mood; keep an eye on wellbeing."
        }
        (DomainKey::MentalHealth, RiskLevel::High) => {
            "A sharp drop in movement may reflect low mood or isolation; consider reaching out."
        }
        (DomainKey::Overall, RiskLevel::Low) => {
            "Overall health risk is low. Keep up your current routine."
        }
        (DomainKey::Overall, RiskLevel::Medium) => {
            "Overall health risk is moderate. Small, regular increases in activity will help."
        }
        (DomainKey::Overall, RiskLevel::High) => {
            "Overall health risk is high. Please review these results with a professional."
        }
    }
}

const CONSULT_PROFESSIONAL: &str =
    "Talk with a doctor or physiotherapist about recent changes in your activity";
const HOME_SAFETY: &str =
    "Remove trip hazards at home, add night lights and consider a walking aid";
const STRENGTH_AND_BALANCE: &str =
    "Add light strength and balance exercises such as chair stands two to three times a week";
const GRADUAL_INCREASE: &str = "Increase daily steps gradually, by around 500 steps a week";
const SOCIAL_WALKS: &str = "Plan walks or activities with friends, family or a community group";
const OUTDOOR_TIME: &str = "Spend some time outdoors in daylight each day";
const TRACK_STEPS: &str = "Keep tracking your daily steps to follow your progress";
const BALANCED_DIET: &str = "Maintain a balanced diet with enough protein and fluids";

/// Suggestions in fixed priority order: safety, frailty, mental health, then baseline.
pub fn improvement_suggestions(score: &RiskScore) -> Vec<String> {
    let mut suggestions = Vec::new();

    if score.overall == RiskLevel::High || score.fall_risk == RiskLevel::High {
        suggestions.push(CONSULT_PROFESSIONAL);
        suggestions.push(HOME_SAFETY);
    }

    if score.frailty_risk.is_elevated() {
        suggestions.push(STRENGTH_AND_BALANCE);
        suggestions.push(GRADUAL_INCREASE);
    }

    if score.mental_health_risk.is_elevated() {
        suggestions.push(SOCIAL_WALKS);
        suggestions.push(OUTDOOR_TIME);
    }

    suggestions.push(TRACK_STEPS);
    suggestions.push(BALANCED_DIET);

    suggestions.into_iter().map(str::to_string).collect()
}

/// One domain line of a [`RiskReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSummary {
    pub domain: DomainKey,
    pub level: RiskLevel,
    pub description: String,
}

/// Display bundle: score, per-domain descriptions and ordered suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    pub score: RiskScore,
    pub domains: Vec<DomainSummary>,
    pub suggestions: Vec<String>,
}

impl RiskReport {
    pub fn from_score(score: RiskScore) -> Self {
        let domains = DomainKey::ordered()
            .into_iter()
            .map(|domain| {
                let level = score.level_for(domain);
                DomainSummary {
                    domain,
                    level,
                    description: risk_description(level, domain).to_string(),
                }
            })
            .collect();
        let suggestions = improvement_suggestions(&score);

        Self {
            score,
            domains,
            suggestions,
        }
    }
}
