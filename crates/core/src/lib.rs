//! # kuona-core
//!
//! Lexicon-based NLP feature pipeline for earnings-call transcripts:
//! tokenization, sentiment/uncertainty scoring, and tidy feature-matrix
//! assembly, one row per (ticker, call_date, section).
//!
//! This is the core library crate with zero async dependencies — the HTTP
//! layer, transcript storage, and any future model-based scorers live in
//! the server crate and plug in at the [`scorer::SectionScorer`] seam.

/// Global configuration constants: limits, defaults, and tuning parameters.
pub mod config;
/// Error taxonomy: configuration, validation, and computation failures.
pub mod error;
/// Tidy output types: per-section feature rows and matrix assembly.
pub mod features;
/// Sentiment/uncertainty lexicon: entries, immutable store, JSON loading.
pub mod lexicon;
/// Pipeline orchestration: tokenize → score → assemble for one transcript.
pub mod pipeline;
/// Lexicon lookup scoring and the pluggable scorer seam.
pub mod scorer;
/// Transcript input types: sections, metadata, validation.
pub mod transcript;
/// Sentence splitting and token normalization.
pub mod tokenizer;

pub use error::FeatureError;
pub use features::{FeatureMatrix, SectionFeatures};
pub use lexicon::{Category, LexiconEntry, LexiconStore};
pub use pipeline::FeaturePipeline;
pub use scorer::{LexiconScorer, SectionScorer, SectionScores};
pub use transcript::{Section, Transcript};
