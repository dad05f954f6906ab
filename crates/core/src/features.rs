//! Tidy output types: per-section feature rows and matrix assembly.
//!
//! One [`SectionFeatures`] row per (ticker, call_date, section), assembled
//! in input section order into a [`FeatureMatrix`]. Rows are produced fresh
//! per run and never mutated afterwards; the matrix serializes directly to
//! the JSON/tabular response shape.

use crate::error::FeatureError;
use crate::scorer::SectionScores;
use crate::transcript::Transcript;
use chrono::NaiveDate;
use serde::Serialize;

/// One tidy row: identifying triple plus feature columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFeatures {
    pub ticker: String,
    pub call_date: NaiveDate,
    pub section: String,
    pub token_count: u64,
    pub sentence_count: u64,
    pub avg_sentence_length: f64,
    pub sentiment_score: f64,
    pub sentiment_std: f64,
    pub uncertainty_score: f64,
}

/// Ordered feature rows for one transcript.
///
/// Row order follows the transcript's section order; the
/// (ticker, call_date, section) triple is unique per matrix because
/// duplicate section names are rejected during validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureMatrix {
    rows: Vec<SectionFeatures>,
}

impl FeatureMatrix {
    /// Number of rows (always equals the transcript's section count).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, in section order.
    pub fn rows(&self) -> &[SectionFeatures] {
        &self.rows
    }

    /// Consumes the matrix into its rows.
    pub fn into_rows(self) -> Vec<SectionFeatures> {
        self.rows
    }
}

/// Assembles per-section scores into a tidy matrix.
///
/// The transcript must already be validated; this re-checks the row-count
/// contract and fails with [`FeatureError::Computation`] if the scorer
/// produced a different number of score sets than there are sections —
/// returning a partial matrix would silently break the one-row-per-section
/// contract.
pub fn assemble(
    transcript: &Transcript,
    scores: Vec<SectionScores>,
) -> Result<FeatureMatrix, FeatureError> {
    if scores.len() != transcript.sections.len() {
        return Err(FeatureError::Computation(format!(
            "scored {} sections but transcript has {}",
            scores.len(),
            transcript.sections.len()
        )));
    }

    let rows = transcript
        .sections
        .iter()
        .zip(scores)
        .map(|(section, s)| SectionFeatures {
            ticker: transcript.ticker.clone(),
            call_date: transcript.call_date,
            section: section.name.clone(),
            token_count: s.token_count,
            sentence_count: s.sentence_count,
            avg_sentence_length: s.avg_sentence_length,
            sentiment_score: s.sentiment_score,
            sentiment_std: s.sentiment_std,
            uncertainty_score: s.uncertainty_score,
        })
        .collect();

    Ok(FeatureMatrix { rows })
}
