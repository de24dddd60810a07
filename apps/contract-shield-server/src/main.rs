//! Contract Shield API Server
//!
//! Accepts contract uploads (PDF or DOCX), extracts their text and runs the
//! heuristic risk engine over it. Provides REST endpoints for:
//!
//! - Liveness (`GET /`)
//! - Contract analysis (`POST /api/analyze`, multipart field `file`)
//!
//! ## Architecture
//!
//! The server is stateless: every upload is extracted and scored on the
//! blocking pool and the result is returned without being stored. The only
//! shared data is the risk engine's compiled rule catalog.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use risk_engine::RiskEngine;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_analyze, handle_root};

/// Command-line arguments for the Contract Shield server
#[derive(Parser, Debug)]
#[command(name = "contract-shield-server")]
#[command(about = "Contract Shield API server for contract risk analysis")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Largest accepted upload, in megabytes
    #[arg(long, default_value = "20")]
    max_upload_mb: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Risk engine shared by all requests
    pub engine: RiskEngine,
    /// Request body limit in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self {
            engine: RiskEngine::new(),
            max_upload_bytes,
        }
    }
}

/// Routes and middleware shared by the binary and the tests
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/", get(handle_root))
        .route("/health", get(handle_root))
        // API endpoints
        .route("/api/analyze", post(handle_analyze))
        // Apply middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Contract Shield server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .ok_or_else(|| anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let max_upload_bytes = args.max_upload_mb.saturating_mul(1024 * 1024);
    let state = AppState::new(max_upload_bytes);

    // Warm the rule catalog before the first request
    let rule_groups = risk_engine::RULE_CATALOG.len();

    let app = router(state).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rule groups loaded: {}", rule_groups);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Max upload size: {} MB", args.max_upload_mb);

    // The rate limiter keys on the peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
