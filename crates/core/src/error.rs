//! Error taxonomy for the feature pipeline.
//!
//! Three classes, matching where the fault lies:
//! - [`FeatureError::Configuration`] — malformed or conflicting lexicon
//!   definitions at load time. Fatal at startup, never per-request.
//! - [`FeatureError::Validation`] — malformed transcript input. Reported to
//!   the caller per request; the process keeps serving.
//! - [`FeatureError::Computation`] — unexpected internal failure. The
//!   specific request fails; other requests are unaffected since the
//!   pipeline holds no mutable cross-request state.

use std::fmt;

/// Typed error returned by lexicon loading and pipeline runs.
///
/// The pipeline performs no retries and no fallback to default scores: a
/// failed section fails the whole run so the one-row-per-section contract
/// of the output matrix stays intact.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Conflicting or malformed lexicon definitions at load time.
    Configuration(String),
    /// Malformed transcript input (missing metadata, empty section list).
    Validation(String),
    /// Unexpected internal failure during scoring or assembly.
    Computation(String),
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::Configuration(msg) => write!(f, "lexicon configuration error: {}", msg),
            FeatureError::Validation(msg) => write!(f, "transcript validation error: {}", msg),
            FeatureError::Computation(msg) => write!(f, "feature computation error: {}", msg),
        }
    }
}

impl std::error::Error for FeatureError {}
