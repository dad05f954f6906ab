//! Prometheus metrics recording.

use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records one pipeline run: which endpoint asked, how many sections it
/// scored, and how long the run took.
pub fn record_pipeline_run(endpoint: &str, sections: usize, duration: Duration) {
    let labels = [("endpoint", endpoint.to_string())];
    counter!("kuona_pipeline_runs_total", &labels).increment(1);
    counter!("kuona_sections_scored_total", &labels).increment(sections as u64);
    histogram!("kuona_pipeline_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Updates store-level gauges at startup.
pub fn update_store_metrics(transcript_count: usize, lexicon_terms: usize) {
    gauge!("kuona_transcripts_total").set(transcript_count as f64);
    gauge!("kuona_lexicon_terms_total").set(lexicon_terms as f64);
}
