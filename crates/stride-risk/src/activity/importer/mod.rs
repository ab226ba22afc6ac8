mod parser;

use crate::activity::domain::{ActivitySource, DailyActivityPoint, WeeklyActivitySeries};
use crate::activity::ActivityDataProvider;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Days kept from the tail of an export unless the caller widens the window.
pub const DEFAULT_WINDOW_DAYS: usize = 7;

#[derive(Debug, thiserror::Error)]
pub enum ActivityImportError {
    #[error("failed to read activity export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid activity CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { line: usize, value: String },
    #[error("line {line}: unknown activity source '{value}'")]
    InvalidSource { line: usize, value: String },
}

/// Loads daily step exports (`Date,Steps,Source`) into a scoring window.
///
/// This is the ingestion side of the pipeline: it clamps negative counts,
/// collapses duplicate dates to the highest reading and orders the window
/// chronologically, so the scoring engine can assume a clean series.
#[derive(Debug, Clone)]
pub struct CsvActivityImporter {
    points: Vec<DailyActivityPoint>,
    window_days: Option<usize>,
    last_updated: DateTime<Utc>,
}

impl CsvActivityImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ActivityImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ActivityImportError> {
        let raw = parser::parse_points(reader, ActivitySource::Device)?;
        let points = sanitize_points(raw);
        debug!(points = points.len(), "activity export parsed");

        Ok(Self {
            points,
            window_days: Some(DEFAULT_WINDOW_DAYS),
            last_updated: Utc::now(),
        })
    }

    /// Keeps only the trailing `days` points; `None` keeps the whole export.
    pub fn with_window(mut self, days: Option<usize>) -> Self {
        self.window_days = days;
        self
    }

    pub fn with_last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = last_updated;
        self
    }

    pub fn points(&self) -> &[DailyActivityPoint] {
        &self.points
    }

    pub fn into_series(self) -> WeeklyActivitySeries {
        let points = trailing_window(self.points, self.window_days);
        WeeklyActivitySeries::new(points, self.last_updated)
    }
}

impl ActivityDataProvider for CsvActivityImporter {
    type Error = ActivityImportError;

    fn weekly_series(&self) -> Result<WeeklyActivitySeries, Self::Error> {
        Ok(self.clone().into_series())
    }
}

/// One point per date (highest reading wins), in ascending date order.
pub fn sanitize_points(raw: Vec<DailyActivityPoint>) -> Vec<DailyActivityPoint> {
    let mut by_date: BTreeMap<NaiveDate, DailyActivityPoint> = BTreeMap::new();
    for point in raw {
        match by_date.get(&point.date) {
            Some(existing) if existing.value >= point.value => {}
            _ => {
                by_date.insert(point.date, point);
            }
        }
    }
    by_date.into_values().collect()
}

/// Drops all but the last `days` points; `None` keeps everything.
pub fn trailing_window(
    mut points: Vec<DailyActivityPoint>,
    days: Option<usize>,
) -> Vec<DailyActivityPoint> {
    if let Some(days) = days {
        let excess = points.len().saturating_sub(days);
        points.drain(..excess);
    }
    points
}
