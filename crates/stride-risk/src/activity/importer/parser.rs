use super::ActivityImportError;
use crate::activity::domain::{ActivitySource, DailyActivityPoint};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_points<R: Read>(
    reader: R,
    default_source: ActivitySource,
) -> Result<Vec<DailyActivityPoint>, ActivityImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut points = Vec::new();

    for (idx, record) in csv_reader.deserialize::<ActivityRow>().enumerate() {
        let row = record?;
        // header occupies line 1
        let line = idx + 2;

        let Some(steps) = row.steps else {
            continue;
        };

        let date = parse_date(&row.date).ok_or_else(|| ActivityImportError::InvalidDate {
            line,
            value: row.date.clone(),
        })?;

        let source = match row.source.as_deref() {
            Some(raw) => {
                ActivitySource::parse(raw).ok_or_else(|| ActivityImportError::InvalidSource {
                    line,
                    value: raw.to_string(),
                })?
            }
            None => default_source,
        };

        points.push(DailyActivityPoint::new(date, clamp_steps(steps), source));
    }

    Ok(points)
}

#[derive(Debug, Deserialize)]
struct ActivityRow {
    #[serde(rename = "Date", alias = "date")]
    date: String,
    #[serde(
        rename = "Steps",
        alias = "steps",
        default,
        deserialize_with = "empty_string_as_none_i64"
    )]
    steps: Option<i64>,
    #[serde(
        rename = "Source",
        alias = "source",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    source: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn empty_string_as_none_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = empty_string_as_none(deserializer)? else {
        return Ok(None);
    };
    let cleaned = raw.replace([',', '_'], "");
    cleaned
        .trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("'{raw}' is not a whole step count")))
}

/// Raw exports occasionally carry negative counts from sync corrections.
fn clamp_steps(raw: i64) -> u32 {
    raw.clamp(0, u32::MAX as i64) as u32
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
