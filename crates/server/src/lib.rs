//! kuona-server — HTTP server for kuona.
//!
//! Provides the REST API over the feature pipeline and the injected
//! transcript store. Pipeline logic lives in `kuona-core`.

/// REST API layer: Axum router, HTTP handlers, models, metrics.
pub mod api;
/// Transcript source: store trait and in-memory implementation.
pub mod store;
