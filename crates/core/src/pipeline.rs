//! Pipeline orchestration: tokenize → score → assemble for one transcript.
//!
//! [`FeaturePipeline`] sequences the tokenizer, a [`SectionScorer`], and the
//! feature assembler. It is deterministic — identical transcript input
//! yields an identical matrix, since the scorer is pure and the lexicon is
//! read-only after load — and it surfaces component failures unchanged.
//! Sections are independent of each other; a sequential loop keeps row
//! order trivially equal to input order.

use crate::error::FeatureError;
use crate::features::{assemble, FeatureMatrix};
use crate::lexicon::LexiconStore;
use crate::scorer::{LexiconScorer, SectionScorer};
use crate::tokenizer::tokenize;
use crate::transcript::Transcript;
use std::sync::Arc;

/// Orchestrates feature extraction for whole transcripts.
///
/// Holds the scorer behind the [`SectionScorer`] seam; swapping the lexicon
/// scorer for a model-based one is a construction-time decision.
pub struct FeaturePipeline {
    scorer: Arc<dyn SectionScorer>,
}

impl FeaturePipeline {
    /// Builds the v1 pipeline: lexicon scorer over a shared read-only store.
    pub fn with_lexicon(lexicon: Arc<LexiconStore>) -> Self {
        Self {
            scorer: Arc::new(LexiconScorer::new(lexicon)),
        }
    }

    /// Builds a pipeline around any scorer implementation.
    pub fn with_scorer(scorer: Arc<dyn SectionScorer>) -> Self {
        Self { scorer }
    }

    /// Computes the tidy feature matrix for one transcript.
    ///
    /// Validates first, then tokenizes and scores each section in input
    /// order, then assembles. Any failure aborts the whole run — no partial
    /// matrix is ever returned, keeping the one-row-per-section contract.
    pub fn run(&self, transcript: &Transcript) -> Result<FeatureMatrix, FeatureError> {
        transcript.validate()?;

        let scores = transcript
            .sections
            .iter()
            .map(|section| self.scorer.score(&tokenize(&section.text)))
            .collect();

        let matrix = assemble(transcript, scores)?;
        tracing::debug!(
            ticker = %transcript.ticker,
            call_date = %transcript.call_date,
            sections = matrix.len(),
            "computed feature matrix"
        );
        Ok(matrix)
    }
}
