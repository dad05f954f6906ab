//! Sentiment/uncertainty lexicon: entries, immutable store, JSON loading.
//!
//! A [`LexiconStore`] maps normalized (lowercased) terms to per-category
//! weights. It is built once at startup, is read-only afterwards, and is
//! shared across concurrent requests behind an `Arc` without locking.
//!
//! Loading rejects duplicate (term, category) pairs with differing weights —
//! last-write-wins would make scoring depend on entry order, and scoring
//! must be deterministic.

use crate::config;
use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Lexicon category. A term may appear in several categories; categories
/// are not mutually exclusive and contribute to their scores independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Positive sentiment ("strong", "growth", "record").
    SentimentPositive,
    /// Negative sentiment ("weak", "miss", "decline").
    SentimentNegative,
    /// Hedging / uncertainty language ("uncertain", "might", "could").
    Uncertainty,
}

/// One lexicon definition: a single-token term, its category, and weight.
///
/// Multi-word phrases are not matched in v1; entries containing whitespace
/// are rejected at load time so a phrase never silently matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub term: String,
    pub category: Category,
    pub weight: f64,
}

impl LexiconEntry {
    /// Creates an entry; the term is normalized on load, not here.
    pub fn new(term: impl Into<String>, category: Category, weight: f64) -> Self {
        Self {
            term: term.into(),
            category,
            weight,
        }
    }
}

/// Per-term weights, one optional slot per category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TermWeights {
    pub sentiment_positive: Option<f64>,
    pub sentiment_negative: Option<f64>,
    pub uncertainty: Option<f64>,
}

impl TermWeights {
    fn slot(&mut self, category: Category) -> &mut Option<f64> {
        match category {
            Category::SentimentPositive => &mut self.sentiment_positive,
            Category::SentimentNegative => &mut self.sentiment_negative,
            Category::Uncertainty => &mut self.uncertainty,
        }
    }
}

/// Immutable term → weights mapping, keyed by lowercased term.
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    terms: HashMap<String, TermWeights>,
    entry_count: usize,
}

impl LexiconStore {
    /// Builds a store from entries.
    ///
    /// Terms are lowercased and trimmed. Fails with
    /// [`FeatureError::Configuration`] on: empty terms, terms containing
    /// whitespace, non-finite weights, too many entries, or duplicate
    /// (term, category) pairs with differing weights. Exact duplicates are
    /// tolerated.
    pub fn load(entries: &[LexiconEntry]) -> Result<Self, FeatureError> {
        if entries.len() > config::MAX_LEXICON_ENTRIES {
            return Err(FeatureError::Configuration(format!(
                "lexicon exceeds {} entries",
                config::MAX_LEXICON_ENTRIES
            )));
        }

        let mut terms: HashMap<String, TermWeights> = HashMap::with_capacity(entries.len());
        for entry in entries {
            let term = entry.term.trim().to_lowercase();
            if term.is_empty() {
                return Err(FeatureError::Configuration(
                    "lexicon entry has an empty term".into(),
                ));
            }
            if term.chars().any(char::is_whitespace) {
                return Err(FeatureError::Configuration(format!(
                    "lexicon term '{}' contains whitespace; phrases are not supported",
                    term
                )));
            }
            if !entry.weight.is_finite() {
                return Err(FeatureError::Configuration(format!(
                    "lexicon term '{}' has a non-finite weight",
                    term
                )));
            }

            let weights = terms.entry(term.clone()).or_default();
            let slot = weights.slot(entry.category);
            match *slot {
                Some(existing) if existing != entry.weight => {
                    return Err(FeatureError::Configuration(format!(
                        "conflicting weights for term '{}' in category {:?}: {} vs {}",
                        term, entry.category, existing, entry.weight
                    )));
                }
                _ => *slot = Some(entry.weight),
            }
        }

        Ok(Self {
            entry_count: entries.len(),
            terms,
        })
    }

    /// Loads entries from a JSON file: an array of
    /// `{"term": …, "category": …, "weight": …}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self, FeatureError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FeatureError::Configuration(format!("cannot read lexicon file {:?}: {}", path, e))
        })?;
        let entries: Vec<LexiconEntry> = serde_json::from_str(&raw).map_err(|e| {
            FeatureError::Configuration(format!("malformed lexicon file {:?}: {}", path, e))
        })?;
        let store = Self::load(&entries)?;
        tracing::info!(
            "Loaded lexicon from {:?} ({} entries, {} distinct terms)",
            path,
            entries.len(),
            store.term_count()
        );
        Ok(store)
    }

    /// The built-in v1 lexicon: a small financial word list with every
    /// weight at 1.0. Intended as a working default until a richer lexicon
    /// file is supplied at startup.
    pub fn builtin() -> Self {
        const POSITIVE: &[&str] = &[
            "strong", "growth", "record", "robust", "confident", "positive", "improved", "solid",
            "ahead",
        ];
        const NEGATIVE: &[&str] = &[
            "weak", "miss", "decline", "soft", "headwinds", "pressure", "downturn", "negative",
            "risk",
        ];
        const UNCERTAINTY: &[&str] = &[
            "uncertain",
            "uncertainty",
            "risk",
            "risks",
            "volatility",
            "might",
            "could",
            "may",
            "headwinds",
            "challenge",
            "pressure",
        ];

        let mut entries = Vec::new();
        for &t in POSITIVE {
            entries.push(LexiconEntry::new(t, Category::SentimentPositive, 1.0));
        }
        for &t in NEGATIVE {
            entries.push(LexiconEntry::new(t, Category::SentimentNegative, 1.0));
        }
        for &t in UNCERTAINTY {
            entries.push(LexiconEntry::new(t, Category::Uncertainty, 1.0));
        }
        Self::load(&entries).expect("built-in lexicon is well-formed")
    }

    /// Looks up a term, case-insensitively.
    ///
    /// Tokens from the tokenizer are already lowercased, so the hot path
    /// avoids allocating; mixed-case input from other callers is lowercased
    /// here.
    pub fn lookup(&self, term: &str) -> Option<&TermWeights> {
        if term.chars().any(char::is_uppercase) {
            self.terms.get(&term.to_lowercase())
        } else {
            self.terms.get(term)
        }
    }

    /// Number of distinct terms in the store.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of entries the store was loaded from.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_lookup() {
        let store = LexiconStore::load(&[
            LexiconEntry::new("Strong", Category::SentimentPositive, 1.0),
            LexiconEntry::new("weak", Category::SentimentNegative, 2.0),
        ])
        .unwrap();
        assert_eq!(
            store.lookup("strong").unwrap().sentiment_positive,
            Some(1.0)
        );
        assert_eq!(store.lookup("weak").unwrap().sentiment_negative, Some(2.0));
        assert!(store.lookup("absent").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive_via_normalization() {
        let store =
            LexiconStore::load(&[LexiconEntry::new("ROBUST", Category::SentimentPositive, 1.0)])
                .unwrap();
        assert!(store.lookup("robust").is_some());
        assert!(store.lookup("Robust").is_some());
    }

    #[test]
    fn test_term_in_multiple_categories() {
        let store = LexiconStore::load(&[
            LexiconEntry::new("risk", Category::SentimentNegative, 1.0),
            LexiconEntry::new("risk", Category::Uncertainty, 1.0),
        ])
        .unwrap();
        let w = store.lookup("risk").unwrap();
        assert_eq!(w.sentiment_negative, Some(1.0));
        assert_eq!(w.uncertainty, Some(1.0));
        assert_eq!(w.sentiment_positive, None);
    }

    #[test]
    fn test_conflicting_duplicate_rejected() {
        let err = LexiconStore::load(&[
            LexiconEntry::new("soft", Category::SentimentNegative, 1.0),
            LexiconEntry::new("soft", Category::SentimentNegative, 0.5),
        ])
        .unwrap_err();
        assert!(matches!(err, FeatureError::Configuration(_)));
    }

    #[test]
    fn test_exact_duplicate_tolerated() {
        let store = LexiconStore::load(&[
            LexiconEntry::new("soft", Category::SentimentNegative, 1.0),
            LexiconEntry::new("soft", Category::SentimentNegative, 1.0),
        ])
        .unwrap();
        assert_eq!(store.term_count(), 1);
    }

    #[test]
    fn test_empty_term_rejected() {
        let err =
            LexiconStore::load(&[LexiconEntry::new("  ", Category::Uncertainty, 1.0)]).unwrap_err();
        assert!(matches!(err, FeatureError::Configuration(_)));
    }

    #[test]
    fn test_phrase_rejected() {
        let err = LexiconStore::load(&[LexiconEntry::new(
            "macro headwinds",
            Category::Uncertainty,
            1.0,
        )])
        .unwrap_err();
        assert!(matches!(err, FeatureError::Configuration(_)));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let err = LexiconStore::load(&[LexiconEntry::new(
            "strong",
            Category::SentimentPositive,
            f64::NAN,
        )])
        .unwrap_err();
        assert!(matches!(err, FeatureError::Configuration(_)));
    }

    #[test]
    fn test_builtin_lexicon_loads() {
        let store = LexiconStore::builtin();
        assert!(store.lookup("strong").is_some());
        // "risk" is both negative sentiment and uncertainty in the built-in list.
        let risk = store.lookup("risk").unwrap();
        assert!(risk.sentiment_negative.is_some());
        assert!(risk.uncertainty.is_some());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(
            &path,
            r#"[
                {"term": "strong", "category": "sentiment_positive", "weight": 1.0},
                {"term": "could", "category": "uncertainty", "weight": 0.5}
            ]"#,
        )
        .unwrap();
        let store = LexiconStore::from_json_file(&path).unwrap();
        assert_eq!(store.term_count(), 2);
        assert_eq!(store.lookup("could").unwrap().uncertainty, Some(0.5));
    }

    #[test]
    fn test_from_json_file_malformed_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, "not json").unwrap();
        let err = LexiconStore::from_json_file(&path).unwrap_err();
        assert!(matches!(err, FeatureError::Configuration(_)));
    }

    #[test]
    fn test_from_json_file_missing_is_configuration_error() {
        let err =
            LexiconStore::from_json_file(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(matches!(err, FeatureError::Configuration(_)));
    }

    #[test]
    fn test_category_serde_snake_case() {
        let json = serde_json::to_string(&Category::SentimentPositive).unwrap();
        assert_eq!(json, "\"sentiment_positive\"");
        let cat: Category = serde_json::from_str("\"uncertainty\"").unwrap();
        assert_eq!(cat, Category::Uncertainty);
    }
}
