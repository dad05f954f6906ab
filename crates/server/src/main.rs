use clap::Parser;
use kuona_core::{config, FeaturePipeline, LexiconStore};
use kuona_server::api::handlers::AppState;
use kuona_server::api::{create_router, metrics};
use kuona_server::store::{InMemoryTranscriptStore, TranscriptStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kuona", about = "NLP feature service for earnings-call transcripts")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// JSON lexicon file (array of {term, category, weight}); built-in
    /// lexicon is used when omitted
    #[arg(long)]
    lexicon_file: Option<PathBuf>,

    /// JSON transcript file (array of transcripts); a seeded stub store is
    /// used when omitted
    #[arg(long)]
    transcripts_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "kuona_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive("kuona_core=info".parse().expect("valid directive literal")),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    // Lexicon configuration errors are fatal at startup, never per-request.
    let lexicon = match args.lexicon_file {
        Some(ref path) => match LexiconStore::from_json_file(path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No lexicon file supplied, using built-in lexicon");
            Arc::new(LexiconStore::builtin())
        }
    };

    let store: Arc<dyn TranscriptStore> = match args.transcripts_file {
        Some(ref path) => match InMemoryTranscriptStore::from_json_file(path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                eprintln!("Error: failed to load transcripts from {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No transcript file supplied, using seeded stub store");
            Arc::new(InMemoryTranscriptStore::seeded())
        }
    };

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("install Prometheus recorder");
    metrics::update_store_metrics(store.len(), lexicon.term_count());

    tracing::info!(
        "Lexicon ready: {} terms from {} entries; {} transcripts stored",
        lexicon.term_count(),
        lexicon.entry_count(),
        store.len()
    );

    let state = AppState {
        store,
        pipeline: Arc::new(FeaturePipeline::with_lexicon(lexicon.clone())),
        lexicon,
        prometheus_handle,
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", args.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
