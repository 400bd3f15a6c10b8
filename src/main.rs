//! Turbofan Predictive Maintenance API
//!
//! Serves the engine inventory, remaining-useful-life predictions and sensor
//! trends for a small turbofan fleet.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TURBOFAN RUL API                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────────┐  ┌─────────────────┐   │
//! │  │  API      │  │  Inference      │  │  Analytics      │   │
//! │  │  Gateway  │  │  Service        │  │  (Trends)       │   │
//! │  │  (Axum)   │  │  (RUL model)    │  │                 │   │
//! │  └─────┬─────┘  └────────┬────────┘  └────────┬────────┘   │
//! │        └─────────────────┼────────────────────┘            │
//! │                          ▼                                 │
//! │                 ┌─────────────────┐                        │
//! │                 │ Fleet DB (RAM)  │                        │
//! │                 └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The model and the trend data are placeholders: RUL is fixed and sensor
//! series are synthesized per request.

mod config;
mod db;
mod models;
mod handlers;
mod inference;
mod error;

use anyhow::Context;
use axum::{
    Router,
    routing::get,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;
use std::sync::Arc;

pub use error::{AppError, AppResult};

use db::FleetDb;
use inference::InferenceService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let json_logs = config.is_production();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "turbofan_rul_api=debug,tower_http=debug".into()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Turbofan RUL API starting ({})...", config.environment);

    // Build application state and load the model before accepting traffic
    let state = AppState::new(config.clone());
    state.inference.load().await;

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutting down...");
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<FleetDb>,
    pub inference: Arc<InferenceService>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        Self {
            db: Arc::new(FleetDb::seeded()),
            inference: Arc::new(InferenceService::new(
                config.model_load_delay(),
                config.inference_delay(),
            )),
            config,
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // System probes
    let system_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/ready", get(handlers::health::ready));

    let api_routes = Router::new()
        // Inventory
        .route("/api/v1/engines", get(handlers::engines::list))
        // Inference
        .route("/api/v1/engines/:unit_id/predict", get(handlers::engines::predict))
        // Analytics
        .route("/api/v1/engines/:unit_id/trends", get(handlers::engines::trends));

    Router::new()
        .merge(system_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
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
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
