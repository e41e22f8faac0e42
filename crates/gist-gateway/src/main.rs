//! Gist Gateway - caching HTTP gateway for the GitHub public gists listing

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;

use config::{Config, ConfigSource, LogFormat};
use gist_api::{AppState, create_router};
use gist_core::{CacheConfig, GistCache, GistService};
use gist_proxy::{GitHubClient, GitHubClientConfig};

/// Gist Gateway - caching gateway for GitHub public gists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Bind address
    #[arg(long, env = "GIST_GATEWAY_BIND")]
    bind: Option<String>,

    /// Port
    #[arg(short, long, env = "GIST_GATEWAY_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let (config, source) = Config::load(&args.config)?;

    // Initialize logging
    init_logging(&config.logging.level, config.logging.format);

    info!("Starting Gist Gateway v{}", env!("CARGO_PKG_VERSION"));
    match source {
        ConfigSource::File(path) => info!("Loaded configuration from {}", path),
        ConfigSource::Defaults(path) => {
            info!("Config file not found at {}, using defaults", path)
        }
    }

    // Install the Prometheus recorder before any metric is touched
    let metrics_handle = if config.metrics.enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(Arc::new(handle))
    } else {
        None
    };

    // Initialize upstream client
    let upstream = Arc::new(
        GitHubClient::new(GitHubClientConfig {
            url: config.upstream.url.clone(),
            timeout: config.upstream.timeout(),
            user_agent: config.upstream.user_agent.clone(),
        })
        .context("Failed to create upstream client")?,
    );

    // Initialize response cache
    let cache = Arc::new(GistCache::new(CacheConfig {
        capacity: config.cache.capacity,
    }));

    // Initialize request pipeline
    let service = Arc::new(GistService::new(cache, upstream));

    // Create router
    let app = create_router(AppState::new(service), metrics_handle)
        .layer(TraceLayer::new_for_http());

    // Determine bind address
    let bind_addr = args.bind.unwrap_or(config.server.bind_address);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind_addr, port)
        .parse()
        .with_context(|| format!("Invalid bind address: {}:{}", bind_addr, port))?;

    info!("Listening on {}", addr);
    info!("Upstream: {}", config.upstream.url);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging
fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    info!("Shutdown signal received");
}
