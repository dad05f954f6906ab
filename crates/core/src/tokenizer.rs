//! Sentence splitting and token normalization.
//!
//! Splits raw text into sentences on `.`, `!`, `?` runs, then tokenizes each
//! sentence by lowercasing and splitting on non-alphanumeric characters.
//! Every word becomes a token — no stop-word removal and no length filter,
//! since downstream scores are normalized by total token count. Uses a
//! zero-per-token allocation design via byte spans into one lowercased
//! buffer.
//!
//! Arbitrary Unicode is safe: alphanumeric characters (in the Unicode sense)
//! form tokens, everything else acts as a separator. Empty input yields an
//! empty sentence sequence, not an error.

/// Tokenized text for one section: owns the lowercased buffer, provides
/// `&str` token slices via byte spans grouped by sentence.
///
/// Only one heap allocation per section (the lowercased String) plus the
/// span vectors, instead of N per-token Strings.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    buffer: String,
    /// Per-sentence (start, end) byte offsets into `buffer`.
    sentences: Vec<Vec<(u32, u32)>>,
}

impl TokenizedText {
    /// Returns the number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Returns the total number of tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.len()).sum()
    }

    /// Returns `true` if the text produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterates over sentences; each item iterates over that sentence's
    /// token `&str` slices.
    pub fn sentences(&self) -> impl Iterator<Item = impl Iterator<Item = &str> + '_> + '_ {
        self.sentences.iter().map(move |spans| {
            spans
                .iter()
                .map(move |&(s, e)| &self.buffer[s as usize..e as usize])
        })
    }

    /// Iterates over all tokens in order, ignoring sentence boundaries.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().flatten().map(move |&(s, e)| &self.buffer[s as usize..e as usize])
    }
}

/// Characters that terminate a sentence.
fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Tokenize a raw text span into sentences of normalized tokens.
///
/// A sentence segment that yields zero tokens (punctuation noise, blank
/// lines between terminators) is dropped rather than counted as an empty
/// sentence, so `avg_sentence_length` never averages over phantom
/// sentences.
pub fn tokenize(text: &str) -> TokenizedText {
    let buffer = text.to_lowercase();
    let mut sentences: Vec<Vec<(u32, u32)>> = Vec::new();
    let mut current: Vec<(u32, u32)> = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if c.is_alphanumeric() {
            if start.is_none() {
                start = Some(i);
            }
            continue;
        }
        if let Some(s) = start.take() {
            current.push((s as u32, i as u32));
        }
        if is_sentence_terminator(c) && !current.is_empty() {
            sentences.push(std::mem::take(&mut current));
        }
    }
    // Trailing token with no separator after it
    if let Some(s) = start {
        current.push((s as u32, buffer.len() as u32));
    }
    // Trailing sentence with no terminator
    if !current.is_empty() {
        sentences.push(current);
    }

    TokenizedText { buffer, sentences }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(t: &TokenizedText) -> Vec<&str> {
        t.tokens().collect()
    }

    #[test]
    fn test_empty_input_yields_no_sentences() {
        let t = tokenize("");
        assert_eq!(t.sentence_count(), 0);
        assert_eq!(t.token_count(), 0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_whitespace_only_yields_no_sentences() {
        let t = tokenize("   \n\t  ");
        assert_eq!(t.sentence_count(), 0);
    }

    #[test]
    fn test_punctuation_only_yields_no_sentences() {
        let t = tokenize("... !!! ??");
        assert_eq!(t.sentence_count(), 0);
        assert_eq!(t.token_count(), 0);
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let t = tokenize("Revenue grew 12%, beating estimates.");
        assert_eq!(
            flat(&t),
            vec!["revenue", "grew", "12", "beating", "estimates"]
        );
        assert_eq!(t.sentence_count(), 1);
    }

    #[test]
    fn test_spec_sentence_has_seven_tokens() {
        let t = tokenize("Revenue grew strongly despite uncertain macro conditions.");
        assert_eq!(t.token_count(), 7);
        assert_eq!(t.sentence_count(), 1);
    }

    #[test]
    fn test_splits_on_terminator_runs() {
        let t = tokenize("Strong quarter!! Really strong... What next?");
        assert_eq!(t.sentence_count(), 3);
        let lengths: Vec<usize> = t.sentences().map(|s| s.count()).collect();
        assert_eq!(lengths, vec![2, 2, 2]);
    }

    #[test]
    fn test_trailing_sentence_without_terminator() {
        let t = tokenize("First sentence. second without period");
        assert_eq!(t.sentence_count(), 2);
    }

    #[test]
    fn test_single_char_tokens_kept() {
        // Unlike a search tokenizer, scoring counts every word.
        let t = tokenize("I a m");
        assert_eq!(flat(&t), vec!["i", "a", "m"]);
    }

    #[test]
    fn test_unicode_does_not_panic() {
        let t = tokenize("Müller señaló: growth résumé 日本語。emoji 🚀 done.");
        assert!(t.token_count() > 0);
        assert!(flat(&t).contains(&"müller"));
        assert!(flat(&t).contains(&"résumé"));
    }

    #[test]
    fn test_abbreviation_splits_are_accepted_noise() {
        // "U.S." splits into two one-token sentences; the crude splitter
        // mirrors the v1 contract rather than attempting abbreviation
        // detection.
        let t = tokenize("U.S. growth was strong.");
        assert_eq!(t.sentence_count(), 3);
        assert_eq!(t.token_count(), 5);
    }
}
