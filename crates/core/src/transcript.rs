//! Transcript input types for kuona.
//!
//! A [`Transcript`] is the raw text of one earnings call plus its metadata:
//! ticker, call date, and an ordered list of named sections (e.g.
//! "Prepared Remarks", "Q&A"). Transcripts are immutable once constructed;
//! the pipeline never mutates its input.

use crate::config;
use crate::error::FeatureError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A labeled portion of an earnings call.
///
/// The text may be empty (a section with no spoken content scores zero on
/// every feature); the name may not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section label, e.g. "Prepared Remarks" or "Q&A".
    pub name: String,
    /// Raw section text. Empty is valid.
    #[serde(default)]
    pub text: String,
}

impl Section {
    /// Creates a section from name and text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// One earnings-call transcript: metadata plus ordered sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Ticker symbol, e.g. "AAPL". Stored uppercased by [`Transcript::new`].
    pub ticker: String,
    /// Date of the call.
    pub call_date: NaiveDate,
    /// Ordered sections. Output row order follows this order.
    pub sections: Vec<Section>,
}

impl Transcript {
    /// Creates a transcript, uppercasing the ticker.
    pub fn new(ticker: impl Into<String>, call_date: NaiveDate, sections: Vec<Section>) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            call_date,
            sections,
        }
    }

    /// Validate the transcript before any scoring work.
    ///
    /// Checks required metadata and section shape: non-empty ticker within
    /// length limits, a non-empty section list, non-empty unique section
    /// names, and per-section text under the size cap. Section *text* may
    /// be empty — that is a valid section with zero-valued scores.
    pub fn validate(&self) -> Result<(), FeatureError> {
        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            return Err(FeatureError::Validation("ticker is required".into()));
        }
        if ticker.chars().count() > config::MAX_TICKER_LEN {
            return Err(FeatureError::Validation(format!(
                "ticker exceeds {} characters",
                config::MAX_TICKER_LEN
            )));
        }
        if self.sections.is_empty() {
            return Err(FeatureError::Validation(
                "transcript has no sections".into(),
            ));
        }
        if self.sections.len() > config::MAX_SECTIONS {
            return Err(FeatureError::Validation(format!(
                "transcript exceeds {} sections",
                config::MAX_SECTIONS
            )));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.sections.len());
        for section in &self.sections {
            let name = section.name.trim();
            if name.is_empty() {
                return Err(FeatureError::Validation("section name is required".into()));
            }
            if name.chars().count() > config::MAX_SECTION_NAME_LEN {
                return Err(FeatureError::Validation(format!(
                    "section name exceeds {} characters",
                    config::MAX_SECTION_NAME_LEN
                )));
            }
            // Duplicate names would break (ticker, call_date, section) row uniqueness.
            if !seen.insert(name) {
                return Err(FeatureError::Validation(format!(
                    "duplicate section name '{}'",
                    name
                )));
            }
            if section.text.len() > config::MAX_SECTION_TEXT_LEN {
                return Err(FeatureError::Validation(format!(
                    "section '{}' exceeds {} bytes",
                    name,
                    config::MAX_SECTION_TEXT_LEN
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()
    }

    #[test]
    fn test_new_uppercases_ticker() {
        let t = Transcript::new("aapl", date(), vec![Section::new("Q&A", "text")]);
        assert_eq!(t.ticker, "AAPL");
    }

    #[test]
    fn test_validate_ok() {
        let t = Transcript::new(
            "AAPL",
            date(),
            vec![
                Section::new("Prepared Remarks", "We delivered strong results."),
                Section::new("Q&A", ""),
            ],
        );
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_empty_ticker_rejected() {
        let t = Transcript::new("", date(), vec![Section::new("Q&A", "text")]);
        assert!(matches!(t.validate(), Err(FeatureError::Validation(_))));
    }

    #[test]
    fn test_empty_section_list_rejected() {
        let t = Transcript::new("AAPL", date(), vec![]);
        assert!(matches!(t.validate(), Err(FeatureError::Validation(_))));
    }

    #[test]
    fn test_blank_section_name_rejected() {
        let t = Transcript::new("AAPL", date(), vec![Section::new("  ", "text")]);
        assert!(matches!(t.validate(), Err(FeatureError::Validation(_))));
    }

    #[test]
    fn test_duplicate_section_name_rejected() {
        let t = Transcript::new(
            "AAPL",
            date(),
            vec![Section::new("Q&A", "a"), Section::new("Q&A", "b")],
        );
        assert!(matches!(t.validate(), Err(FeatureError::Validation(_))));
    }

    #[test]
    fn test_empty_section_text_is_valid() {
        let t = Transcript::new("AAPL", date(), vec![Section::new("Q&A", "")]);
        assert!(t.validate().is_ok());
    }
}
