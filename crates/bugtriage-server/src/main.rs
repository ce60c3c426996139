//! Bugtriage Server
//!
//! Classifies free-text bug reports into a category and an urgency level
//! so incoming reports can be auto-routed without human triage. Uses
//! semantic similarity against reference embeddings when a provider is
//! configured, with a deterministic keyword-frequency fallback.

use anyhow::Result;
use bugtriage_classifiers::{Embedder, HttpEmbedder};
use bugtriage_engine::TriageService;
use bugtriage_server::{create_router, AppState, ServerConfig};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "bugtriage-server")]
#[command(about = "Bug report triage API server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Embedding provider base URL (overrides the config file)
    #[arg(short, long)]
    embedding_url: Option<String>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    info!("Starting Bugtriage Server");

    // Load configuration
    let config = ServerConfig::load(&cli.config, cli.embedding_url.as_deref())?;
    match &config.embedding {
        Some(embedding) => info!(
            provider = %embedding.base_url,
            model = %embedding.model,
            "embedding provider configured"
        ),
        None => info!("no embedding provider configured; keyword strategy only"),
    }

    // Initialize metrics
    let metrics_handle = init_metrics()?;

    // Build the triage service (reference embeddings, rule overlay)
    let embedder: Option<Arc<dyn Embedder>> = match &config.embedding {
        Some(embedding) => Some(Arc::new(HttpEmbedder::new(
            &embedding.base_url,
            &embedding.model,
            embedding.timeout(),
        )?)),
        None => None,
    };
    let service = Arc::new(TriageService::new(embedder).await?);
    info!(
        strategy = service.strategy().as_str(),
        ai_available = service.ai_available(),
        "triage service initialized"
    );

    let state = AppState::new(service, Some(metrics_handle));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            warn!("Shutdown signal received, stopping server...");
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("bugtriage=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bugtriage=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "bugtriage_requests_total",
        "Total number of triage requests processed"
    );
    metrics::describe_counter!(
        "bugtriage_strategy_fallbacks_total",
        "Number of calls downgraded from semantic similarity to keywords"
    );
    metrics::describe_counter!(
        "bugtriage_batch_items_total",
        "Total number of batch items by outcome"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
