//! Global configuration constants for kuona.
//!
//! All tuning parameters, input validation limits, and server defaults are
//! defined here. These are compile-time constants; runtime configuration is
//! handled via CLI arguments and environment variables in `main.rs`.

/// Maximum number of sections accepted in a single transcript.
pub const MAX_SECTIONS: usize = 64;

/// Maximum length of a section's raw text in bytes.
pub const MAX_SECTION_TEXT_LEN: usize = 1_000_000;

/// Maximum length of a section name in characters.
pub const MAX_SECTION_NAME_LEN: usize = 128;

/// Maximum length of a ticker symbol in characters.
pub const MAX_TICKER_LEN: usize = 12;

/// Maximum number of lexicon entries accepted at load time.
pub const MAX_LEXICON_ENTRIES: usize = 1_000_000;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3030;

/// Per-request timeout in seconds.
///
/// The pipeline itself never blocks on I/O, so this bounds the whole
/// request including JSON deserialization of large transcripts.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size in bytes.
pub const MAX_REQUEST_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Maximum number of concurrently processed requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Global rate limit in requests per second.
pub const RATE_LIMIT_RPS: u64 = 1_000;
