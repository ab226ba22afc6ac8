use super::config::RiskWeights;
use super::signals::RiskSignals;
use super::thresholds::composite;
use crate::activity::WeeklyActivitySeries;

/// Weighted sum of the four signals, clamped to `[0, 100]`.
pub fn combine_signals(signals: &RiskSignals, weights: &RiskWeights) -> f64 {
    let raw = signals.average_level * weights.average_steps
        + signals.variability * weights.step_variability
        + signals.trend * weights.trend_direction
        + signals.consistency * weights.consistency;
    raw.clamp(composite::MIN, composite::MAX)
}

/// Composite step risk for a series.
///
/// An empty window is pinned to the maximum rather than derived from the
/// signals, which would all read as "no risk" for lack of data.
pub fn composite_step_risk(
    series: &WeeklyActivitySeries,
    signals: &RiskSignals,
    weights: &RiskWeights,
) -> f64 {
    if series.is_empty() {
        return composite::EMPTY_SERIES;
    }
    combine_signals(signals, weights)
}
