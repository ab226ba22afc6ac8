use crate::infra::{deserialize_date, AppState};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use stride_risk::activity::{
    sanitize_points, trailing_window, ActivityDataProvider, ActivitySource, CsvActivityImporter,
    DailyActivityPoint, WeeklyActivitySeries, DEFAULT_WINDOW_DAYS,
};
use stride_risk::error::AppError;
use stride_risk::risk::{
    assess_with, risk_description, AgeBasedStandards, DomainKey, RiskEngine, RiskLevel,
    RiskReport, RiskScore, RiskSignals, RiskWeights,
};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub(crate) struct PointInput {
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) date: NaiveDate,
    pub(crate) steps: i64,
    #[serde(default)]
    pub(crate) source: Option<ActivitySource>,
}

impl PointInput {
    fn into_point(self) -> DailyActivityPoint {
        let steps = self.steps.clamp(0, u32::MAX as i64) as u32;
        DailyActivityPoint::new(
            self.date,
            steps,
            self.source.unwrap_or(ActivitySource::App),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssessRequest {
    #[serde(default)]
    pub(crate) points: Option<Vec<PointInput>>,
    #[serde(default)]
    pub(crate) activity_csv: Option<String>,
    #[serde(default)]
    pub(crate) weights: Option<RiskWeights>,
    #[serde(default)]
    pub(crate) standards: Option<AgeBasedStandards>,
    #[serde(default)]
    pub(crate) window_days: Option<usize>,
    #[serde(default)]
    pub(crate) full_history: bool,
    #[serde(default)]
    pub(crate) include_breakdown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ActivityDataSource {
    Points,
    Csv,
    Empty,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentBreakdown {
    pub(crate) signals: RiskSignals,
    pub(crate) average_steps: f64,
    pub(crate) composite_step_risk: f64,
    pub(crate) combined_score: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessResponse {
    pub(crate) data_source: ActivityDataSource,
    pub(crate) points: usize,
    pub(crate) window_start: Option<NaiveDate>,
    pub(crate) window_end: Option<NaiveDate>,
    pub(crate) report: RiskReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) breakdown: Option<AssessmentBreakdown>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DescriptionResponse {
    pub(crate) domain: DomainKey,
    pub(crate) level: RiskLevel,
    pub(crate) description: &'static str,
}

/// Scoring endpoints bound to one engine instance.
pub(crate) fn risk_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/api/v1/risk/assess", post(assess_endpoint))
        .route(
            "/api/v1/risk/descriptions/:domain/:level",
            get(description_endpoint),
        )
        .with_state(engine)
}

pub(crate) fn with_risk_routes(engine: Arc<RiskEngine>) -> Router {
    risk_router(engine)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assess_endpoint(
    State(engine): State<Arc<RiskEngine>>,
    Json(payload): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, AppError> {
    let AssessRequest {
        points,
        activity_csv,
        weights,
        standards,
        window_days,
        full_history,
        include_breakdown,
    } = payload;

    let config = engine.overridden(weights.as_ref(), standards.as_ref());
    config.validate()?;

    let window = if full_history {
        None
    } else {
        Some(window_days.unwrap_or(DEFAULT_WINDOW_DAYS))
    };
    let now = Utc::now();

    let (series, data_source) = match (points, activity_csv) {
        (Some(_), Some(_)) => {
            return Err(AppError::BadRequest(
                "send either `points` or `activity_csv`, not both".to_string(),
            ))
        }
        (Some(points), None) => {
            let raw = points.into_iter().map(PointInput::into_point).collect();
            let points = trailing_window(sanitize_points(raw), window);
            (
                WeeklyActivitySeries::new(points, now),
                ActivityDataSource::Points,
            )
        }
        (None, Some(csv)) => {
            let importer = CsvActivityImporter::from_reader(Cursor::new(csv.into_bytes()))?
                .with_window(window)
                .with_last_updated(now);
            (importer.weekly_series()?, ActivityDataSource::Csv)
        }
        (None, None) => (WeeklyActivitySeries::empty(now), ActivityDataSource::Empty),
    };

    let (score, breakdown) = match assess_with(&series, &config, now) {
        Ok(assessment) => {
            let breakdown = AssessmentBreakdown {
                signals: assessment.signals,
                average_steps: assessment.average_steps,
                composite_step_risk: assessment.composite_step_risk,
                combined_score: assessment.combined_score,
            };
            (assessment.score, Some(breakdown))
        }
        Err(err) => {
            warn!(error = %err, "assessment failed; serving fail-safe score");
            (RiskScore::fail_safe(now), None)
        }
    };

    info!(
        points = series.len(),
        source = ?data_source,
        overall = %score.overall,
        "risk assessment served"
    );

    Ok(Json(AssessResponse {
        data_source,
        points: series.len(),
        window_start: series.first_date(),
        window_end: series.last_date(),
        report: RiskReport::from_score(score),
        breakdown: breakdown.filter(|_| include_breakdown),
    }))
}

pub(crate) async fn description_endpoint(
    Path((domain, level)): Path<(String, String)>,
) -> Result<Json<DescriptionResponse>, AppError> {
    let domain = DomainKey::parse(&domain)
        .ok_or_else(|| AppError::BadRequest(format!("unknown risk domain '{domain}'")))?;
    let level = RiskLevel::parse(&level)
        .ok_or_else(|| AppError::BadRequest(format!("unknown risk level '{level}'")))?;

    Ok(Json(DescriptionResponse {
        domain,
        level,
        description: risk_description(level, domain),
    }))
}
