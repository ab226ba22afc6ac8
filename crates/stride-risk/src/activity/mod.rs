//! Daily activity data and the ingestion seam feeding the risk engine.

pub mod domain;
pub mod importer;

pub use domain::{ActivitySource, DailyActivityPoint, WeeklyActivitySeries};
pub use importer::{
    sanitize_points, trailing_window, ActivityImportError, CsvActivityImporter, DEFAULT_WINDOW_DAYS,
};

/// Supplies the activity window a risk assessment runs over.
///
/// Implementations own sanitation: non-negative counts, one point per date,
/// chronological order. The engine performs none of that itself.
pub trait ActivityDataProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    fn weekly_series(&self) -> Result<WeeklyActivitySeries, Self::Error>;
}
