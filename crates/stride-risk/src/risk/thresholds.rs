//! Numeric breakpoints used across the engine, grouped by the component that reads them.
//!
//! Changing any value here changes scored levels; update the scenario tests with it.

/// Average-level signal: fraction of the target that still counts as "near target".
pub mod average {
    pub const NEAR_TARGET_FRACTION: f64 = 0.8;

    pub const AT_TARGET_RISK: f64 = 0.0;
    pub const NEAR_TARGET_RISK: f64 = 20.0;
    pub const ABOVE_MINIMUM_RISK: f64 = 50.0;
    pub const BELOW_MINIMUM_RISK: f64 = 80.0;
}

/// Variability signal: coefficient of variation (percent) buckets.
pub mod variability {
    pub const MIN_POINTS: usize = 2;

    /// `(cv strictly above, risk)` checked top-down.
    pub const CV_BUCKETS: [(f64, f64); 4] =
        [(80.0, 70.0), (60.0, 50.0), (40.0, 30.0), (25.0, 15.0)];
    pub const MAX_RISK: f64 = 70.0;
}

/// Trend signal: OLS slope (steps/day) over the trailing window.
pub mod trend {
    pub const WINDOW: usize = 3;

    /// `(slope strictly below, risk)` checked top-down.
    pub const DECLINE_BUCKETS: [(f64, f64); 3] = [(-200.0, 60.0), (-100.0, 40.0), (-50.0, 20.0)];
    pub const IMPROVING_SLOPE: f64 = 100.0;
    pub const IMPROVING_RISK: f64 = 0.0;
    pub const FLAT_RISK: f64 = 10.0;
}

/// Consistency signal: share of days under the minimum.
pub mod consistency {
    /// `(fraction strictly above, risk)` checked top-down.
    pub const LOW_DAY_BUCKETS: [(f64, f64); 3] = [(0.6, 80.0), (0.4, 50.0), (0.2, 25.0)];
}

/// Composite score bounds and the no-data override.
pub mod composite {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;
    pub const EMPTY_SERIES: f64 = 100.0;
}

pub mod frailty {
    pub const HIGH_BELOW_AVERAGE_STEPS: f64 = 1500.0;
    pub const HIGH_ABOVE_COMPOSITE: f64 = 70.0;
    pub const MEDIUM_BELOW_AVERAGE_STEPS: f64 = 2500.0;
    pub const MEDIUM_ABOVE_COMPOSITE: f64 = 40.0;
}

pub mod fall {
    pub const HIGH_ABOVE: f64 = 60.0;
    pub const MEDIUM_ABOVE: f64 = 30.0;
}

pub mod mental_health {
    pub const HIGH_ABOVE: f64 = 50.0;
    pub const MEDIUM_ABOVE: f64 = 25.0;
}

/// Multipliers applied to domain points in the overall rollup.
pub mod overall {
    pub const FRAILTY_MULTIPLIER: f64 = 30.0;
    pub const FALL_MULTIPLIER: f64 = 25.0;
    pub const DIVISOR: f64 = 3.0;
}
