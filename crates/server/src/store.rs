//! Transcript source for the API layer.
//!
//! The pipeline never reaches into a global store: handlers resolve
//! transcripts through the [`TranscriptStore`] trait, so tests inject
//! in-memory fixtures and a future database-backed repository slots in
//! without touching the core. The shipped implementation is an in-memory
//! map, optionally seeded from a JSON file at startup.

use chrono::NaiveDate;
use kuona_core::Transcript;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Read-only transcript lookup keyed by (uppercased ticker, call date).
pub trait TranscriptStore: Send + Sync {
    /// Fetches the transcript for one earnings call, if known.
    fn get(&self, ticker: &str, call_date: NaiveDate) -> Option<Arc<Transcript>>;

    /// Number of stored transcripts (for health reporting).
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no transcripts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory transcript store, built once at startup.
#[derive(Debug, Default)]
pub struct InMemoryTranscriptStore {
    transcripts: HashMap<(String, NaiveDate), Arc<Transcript>>,
}

impl InMemoryTranscriptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from transcripts, keyed by uppercased ticker.
    /// Later duplicates of a (ticker, call_date) key replace earlier ones.
    pub fn from_transcripts(transcripts: Vec<Transcript>) -> Self {
        let mut store = Self::new();
        for t in transcripts {
            store.insert(t);
        }
        store
    }

    /// Loads transcripts from a JSON file: an array of
    /// `{"ticker": …, "call_date": …, "sections": [{"name": …, "text": …}]}`.
    pub fn from_json_file(path: &Path) -> io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let transcripts: Vec<Transcript> = serde_json::from_str(&raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        let store = Self::from_transcripts(transcripts);
        tracing::info!("Loaded {} transcripts from {:?}", store.len(), path);
        Ok(store)
    }

    /// A stub store with one seeded AAPL call, so a fresh deployment
    /// answers requests before any transcript file is wired up.
    pub fn seeded() -> Self {
        use kuona_core::Section;

        let call_date = NaiveDate::from_ymd_opt(2025, 1, 28)
            .expect("seed date is valid");
        Self::from_transcripts(vec![Transcript::new(
            "AAPL",
            call_date,
            vec![
                Section::new(
                    "Prepared Remarks",
                    "Good afternoon and thank you for joining us today. \
                     We delivered strong results this quarter with solid growth across our \
                     product lines. However, we are seeing some uncertainty in certain \
                     international markets and macro headwinds that could create risk going \
                     forward.",
                ),
                Section::new(
                    "Q&A",
                    "Overall, we remain confident in our long-term strategy and our ability \
                     to execute.",
                ),
            ],
        )])
    }

    fn insert(&mut self, transcript: Transcript) {
        // Re-normalize: deserialized transcripts bypass Transcript::new, so
        // a lowercase ticker from a JSON file would otherwise leak into rows.
        let transcript = Transcript::new(
            transcript.ticker,
            transcript.call_date,
            transcript.sections,
        );
        let key = (transcript.ticker.clone(), transcript.call_date);
        self.transcripts.insert(key, Arc::new(transcript));
    }
}

impl TranscriptStore for InMemoryTranscriptStore {
    fn get(&self, ticker: &str, call_date: NaiveDate) -> Option<Arc<Transcript>> {
        self.transcripts
            .get(&(ticker.to_uppercase(), call_date))
            .cloned()
    }

    fn len(&self) -> usize {
        self.transcripts.len()
    }
}
