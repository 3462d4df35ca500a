//! Summary Cache - a URL summary cache server
//!
//! Maps HTTPS URLs to cached `{title, summary}` artifacts in an object
//! store and serves a bounded most-recent view over the store's listing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use summary_cache::api::{create_router, AppState};
use summary_cache::cache::SummaryStore;
use summary_cache::config::Config;
use summary_cache::storage::FsStore;
use summary_cache::summarizer::ClaudeSummarizer;

/// Main entry point for the summary cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the filesystem object store
/// 4. Build the summarizer client
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "summary_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Summary Cache Server");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: port={}, data_dir={}, recent_max_entries={}, page_size={}",
        config.server_port,
        config.data_dir.display(),
        config.recent_max_entries,
        config.list_page_size
    );

    let backend = Arc::new(FsStore::new(&config.data_dir)?);
    let store = SummaryStore::new(backend);
    info!("Object store opened at {}", config.data_dir.display());

    let summarizer = Arc::new(ClaudeSummarizer::new(
        &config.anthropic_api_key,
        &config.claude_model,
        config.claude_timeout,
    )?);

    let state = AppState::new(store, summarizer)
        .with_limits(config.recent_max_entries, config.list_page_size);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
