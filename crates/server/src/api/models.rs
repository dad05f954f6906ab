//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling
//! via Axum. Feature rows serialize straight from the core
//! [`SectionFeatures`] type, so the wire columns are exactly the tidy
//! matrix columns.

use chrono::NaiveDate;
use kuona_core::SectionFeatures;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /features/earnings`.
#[derive(Debug, Deserialize)]
pub struct EarningsFeaturesQuery {
    /// Ticker symbol, e.g. "AAPL". Matched case-insensitively.
    pub ticker: String,
    /// Call date in YYYY-MM-DD format.
    pub call_date: String,
}

/// One section in an ad-hoc compute request.
#[derive(Debug, Deserialize)]
pub struct SectionRequest {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// Request body for `POST /features/compute`.
#[derive(Debug, Deserialize)]
pub struct ComputeFeaturesRequest {
    pub ticker: String,
    pub call_date: NaiveDate,
    pub sections: Vec<SectionRequest>,
}

/// Response body for both feature endpoints.
#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub features: Vec<SectionFeatures>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub transcript_count: usize,
    pub lexicon_terms: usize,
}
