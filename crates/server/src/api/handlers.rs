//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::store::TranscriptStore;
use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use kuona_core::{FeaturePipeline, LexiconStore, Section, Transcript};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
///
/// Everything here is read-only after startup — the lexicon, pipeline, and
/// transcript store are shared across concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TranscriptStore>,
    pub pipeline: Arc<FeaturePipeline>,
    pub lexicon: Arc<LexiconStore>,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

fn parse_call_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ApiError::BadRequest(format!(
            "call_date '{}' is not a valid YYYY-MM-DD date",
            raw
        ))
    })
}

/// `GET /features/earnings?ticker=AAPL&call_date=2025-01-28`
///
/// Resolves the transcript from the store and returns its tidy feature
/// matrix, one row per section.
pub async fn earnings_features(
    State(state): State<AppState>,
    Query(query): Query<EarningsFeaturesQuery>,
) -> Result<Json<FeaturesResponse>, ApiError> {
    let ticker = query.ticker.trim();
    if ticker.is_empty() {
        return Err(ApiError::BadRequest("ticker is required".into()));
    }
    let call_date = parse_call_date(&query.call_date)?;

    let transcript = state.store.get(ticker, call_date).ok_or_else(|| {
        ApiError::NotFound(format!(
            "No transcript found for {} on {}",
            ticker.to_uppercase(),
            call_date
        ))
    })?;

    let start = Instant::now();
    let matrix = state.pipeline.run(&transcript)?;
    metrics::record_pipeline_run("earnings", matrix.len(), start.elapsed());

    Ok(Json(FeaturesResponse {
        features: matrix.into_rows(),
    }))
}

/// `POST /features/compute`
///
/// Scores an ad-hoc transcript supplied in the request body, without
/// touching the store. Validation failures map to 400.
pub async fn compute_features(
    State(state): State<AppState>,
    Json(req): Json<ComputeFeaturesRequest>,
) -> Result<Json<FeaturesResponse>, ApiError> {
    let sections = req
        .sections
        .into_iter()
        .map(|s| Section::new(s.name, s.text))
        .collect();
    let transcript = Transcript::new(req.ticker, req.call_date, sections);

    let start = Instant::now();
    let matrix = state.pipeline.run(&transcript)?;
    metrics::record_pipeline_run("compute", matrix.len(), start.elapsed());

    Ok(Json(FeaturesResponse {
        features: matrix.into_rows(),
    }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        transcript_count: state.store.len(),
        lexicon_terms: state.lexicon.term_count(),
    })
}

/// `GET /metrics` — Prometheus exposition format.
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}
