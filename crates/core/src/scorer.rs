//! Lexicon lookup scoring and the pluggable scorer seam.
//!
//! [`SectionScorer`] is the capability interface future model-based scorers
//! (FinBERT and friends) implement; which scorer runs is a configuration
//! decision at pipeline construction, not an inheritance hierarchy.
//! [`LexiconScorer`] is the v1 implementation: pure lexicon lookups and
//! basic text statistics over tokenized sentences. It holds shared
//! ownership of the read-only [`LexiconStore`], so one scorer instance is
//! safely reusable across concurrent requests without locking.

use crate::lexicon::LexiconStore;
use crate::tokenizer::TokenizedText;
use std::sync::Arc;

/// Per-section feature values, before transcript metadata is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionScores {
    /// Total tokens across all sentences.
    pub token_count: u64,
    /// Number of sentences that produced at least one token.
    pub sentence_count: u64,
    /// token_count / sentence_count; 0.0 when there are no sentences.
    pub avg_sentence_length: f64,
    /// (Σ positive weights − Σ negative weights) / token_count; 0.0 when
    /// there are no tokens.
    pub sentiment_score: f64,
    /// Population standard deviation of per-sentence net sentiment; 0.0
    /// with fewer than two sentences.
    pub sentiment_std: f64,
    /// Σ uncertainty weights / token_count; 0.0 when there are no tokens.
    pub uncertainty_score: f64,
}

/// Scoring seam: turns one tokenized section into feature values.
///
/// Implementations must be pure — no side effects, no external state beyond
/// what they were constructed with — so pipeline runs stay deterministic.
pub trait SectionScorer: Send + Sync {
    fn score(&self, text: &TokenizedText) -> SectionScores;
}

/// v1 scorer: per-token lexicon lookups, normalized by token count.
///
/// A token matching multiple categories contributes to each score
/// independently; categories are not mutually exclusive.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Arc<LexiconStore>,
}

impl LexiconScorer {
    /// Creates a scorer over a shared read-only lexicon.
    pub fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self { lexicon }
    }

    /// The lexicon this scorer matches against.
    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }
}

impl SectionScorer for LexiconScorer {
    fn score(&self, text: &TokenizedText) -> SectionScores {
        let token_count = text.token_count() as u64;
        let sentence_count = text.sentence_count() as u64;

        if token_count == 0 {
            return SectionScores::default();
        }

        let mut positive_sum = 0.0f64;
        let mut negative_sum = 0.0f64;
        let mut uncertainty_sum = 0.0f64;
        let mut sentence_sentiments: Vec<f64> = Vec::with_capacity(sentence_count as usize);

        for sentence in text.sentences() {
            let mut sent_pos = 0.0f64;
            let mut sent_neg = 0.0f64;
            let mut sent_tokens = 0u64;
            for token in sentence {
                sent_tokens += 1;
                if let Some(weights) = self.lexicon.lookup(token) {
                    if let Some(w) = weights.sentiment_positive {
                        sent_pos += w;
                    }
                    if let Some(w) = weights.sentiment_negative {
                        sent_neg += w;
                    }
                    if let Some(w) = weights.uncertainty {
                        uncertainty_sum += w;
                    }
                }
            }
            positive_sum += sent_pos;
            negative_sum += sent_neg;
            // The tokenizer drops token-less sentences, so sent_tokens > 0.
            sentence_sentiments.push((sent_pos - sent_neg) / sent_tokens as f64);
        }

        let tokens_f = token_count as f64;
        let sentiment_std = population_std(&sentence_sentiments);

        SectionScores {
            token_count,
            sentence_count,
            avg_sentence_length: tokens_f / sentence_count as f64,
            sentiment_score: (positive_sum - negative_sum) / tokens_f,
            sentiment_std,
            uncertainty_score: uncertainty_sum / tokens_f,
        }
    }
}

/// Population standard deviation; 0.0 for fewer than two values.
fn population_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Category, LexiconEntry, LexiconStore};
    use crate::tokenizer::tokenize;

    fn scorer(entries: &[LexiconEntry]) -> LexiconScorer {
        LexiconScorer::new(Arc::new(LexiconStore::load(entries).unwrap()))
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let s = scorer(&[]);
        let scores = s.score(&tokenize(""));
        assert_eq!(scores, SectionScores::default());
    }

    #[test]
    fn test_spec_scenario() {
        // "Revenue grew strongly despite uncertain macro conditions." with
        // strongly=+1.0 positive, uncertain=+1.0 uncertainty.
        let s = scorer(&[
            LexiconEntry::new("strongly", Category::SentimentPositive, 1.0),
            LexiconEntry::new("uncertain", Category::Uncertainty, 1.0),
        ]);
        let scores = s.score(&tokenize(
            "Revenue grew strongly despite uncertain macro conditions.",
        ));
        assert_eq!(scores.token_count, 7);
        assert_eq!(scores.sentence_count, 1);
        assert_eq!(scores.avg_sentence_length, 7.0);
        assert!((scores.sentiment_score - 1.0 / 7.0).abs() < 1e-12);
        assert!((scores.uncertainty_score - 1.0 / 7.0).abs() < 1e-12);
        assert_eq!(scores.sentiment_std, 0.0);
    }

    #[test]
    fn test_negative_weights_subtract() {
        let s = scorer(&[
            LexiconEntry::new("strong", Category::SentimentPositive, 1.0),
            LexiconEntry::new("weak", Category::SentimentNegative, 1.0),
        ]);
        // 4 tokens: strong strong weak filler → (2 - 1) / 4
        let scores = s.score(&tokenize("strong strong weak filler"));
        assert!((scores.sentiment_score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_token_in_both_categories_counts_twice() {
        let s = scorer(&[
            LexiconEntry::new("risk", Category::SentimentNegative, 1.0),
            LexiconEntry::new("risk", Category::Uncertainty, 1.0),
        ]);
        let scores = s.score(&tokenize("risk ahead"));
        assert!((scores.sentiment_score - (-0.5)).abs() < 1e-12);
        assert!((scores.uncertainty_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_entries() {
        let s = scorer(&[
            LexiconEntry::new("record", Category::SentimentPositive, 2.0),
            LexiconEntry::new("decline", Category::SentimentNegative, 0.5),
        ]);
        let scores = s.score(&tokenize("record revenue despite decline"));
        assert!((scores.sentiment_score - (2.0 - 0.5) / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_statistics() {
        let s = scorer(&[]);
        let scores = s.score(&tokenize("One two three. Four five. Six."));
        assert_eq!(scores.token_count, 6);
        assert_eq!(scores.sentence_count, 3);
        assert!((scores.avg_sentence_length - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentiment_std_over_sentences() {
        let s = scorer(&[LexiconEntry::new(
            "strong",
            Category::SentimentPositive,
            1.0,
        )]);
        // Sentence sentiments: 1/2 and 0 → mean 0.25, pstdev 0.25.
        let scores = s.score(&tokenize("strong quarter. flat results."));
        assert!((scores.sentiment_std - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let s = scorer(&[
            LexiconEntry::new("strong", Category::SentimentPositive, 1.0),
            LexiconEntry::new("risk", Category::Uncertainty, 1.0),
        ]);
        let text = tokenize("Strong results. Some risk remains. Overall positive momentum.");
        let a = s.score(&text);
        let b = s.score(&text);
        assert_eq!(a, b);
    }
}
