use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a daily step reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySource {
    Manual,
    Device,
    App,
}

impl ActivitySource {
    pub const fn label(self) -> &'static str {
        match self {
            ActivitySource::Manual => "manual",
            ActivitySource::Device => "device",
            ActivitySource::App => "app",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "device" | "wearable" => Some(Self::Device),
            "app" | "phone" => Some(Self::App),
            _ => None,
        }
    }
}

/// One day of step activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivityPoint {
    pub value: u32,
    pub date: NaiveDate,
    pub source: ActivitySource,
}

impl DailyActivityPoint {
    pub fn new(date: NaiveDate, value: u32, source: ActivitySource) -> Self {
        Self {
            value,
            date,
            source,
        }
    }
}

/// Chronologically ordered window of daily readings.
///
/// Ordering matters: trend detection reads the trailing points. The series
/// does not enforce ordering or uniqueness of dates; that belongs to whatever
/// [`ActivityDataProvider`](super::ActivityDataProvider) produced it.
///
/// `average_steps` is derived from `points` on construction and on
/// deserialization; neither can be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeriesRecord")]
pub struct WeeklyActivitySeries {
    points: Vec<DailyActivityPoint>,
    average_steps: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Deserialize)]
struct SeriesRecord {
    points: Vec<DailyActivityPoint>,
    last_updated: DateTime<Utc>,
}

impl From<SeriesRecord> for WeeklyActivitySeries {
    fn from(record: SeriesRecord) -> Self {
        Self::new(record.points, record.last_updated)
    }
}

impl WeeklyActivitySeries {
    pub fn new(points: Vec<DailyActivityPoint>, last_updated: DateTime<Utc>) -> Self {
        let average_steps = mean_steps(&points);
        Self {
            points,
            average_steps,
            last_updated,
        }
    }

    pub fn empty(last_updated: DateTime<Utc>) -> Self {
        Self::new(Vec::new(), last_updated)
    }

    /// Builds a series from raw counts on consecutive days ending at `last_day`.
    ///
    /// Returns `None` when the first day would fall before the earliest
    /// representable date.
    pub fn from_daily_counts(
        last_day: NaiveDate,
        counts: &[u32],
        source: ActivitySource,
        last_updated: DateTime<Utc>,
    ) -> Option<Self> {
        let span = (counts.len() as u64).saturating_sub(1);
        let first_day = last_day.checked_sub_days(Days::new(span))?;
        let points = counts
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let date = first_day.checked_add_days(Days::new(idx as u64))?;
                Some(DailyActivityPoint::new(date, *value, source))
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(points, last_updated))
    }

    pub fn points(&self) -> &[DailyActivityPoint] {
        &self.points
    }

    /// Mean daily steps; zero for an empty window.
    pub fn average_steps(&self) -> f64 {
        self.average_steps
    }

    #[cfg(test)]
    pub(crate) fn with_average_steps(mut self, average_steps: f64) -> Self {
        self.average_steps = average_steps;
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn step_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value as f64)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|point| point.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|point| point.date)
    }
}

fn mean_steps(points: &[DailyActivityPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points.iter().map(|point| point.value as f64).sum();
    total / points.len() as f64
}
