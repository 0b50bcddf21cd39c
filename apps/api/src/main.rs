//! # GoodBurger API Server
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  env (GOODBURGER_*) ──► ApiConfig ──► tracing subscriber                │
//! │                                            │                            │
//! │                                            ▼                            │
//! │  Catalog::seeded() ──► OrderService ──► Router ──► TcpListener          │
//! │                                                        │                │
//! │                                  Ctrl+C / SIGTERM ──► graceful stop     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use goodburger_api::{build_router, ApiConfig, AppState};
use goodburger_core::Catalog;
use goodburger_orders::OrderService;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting GoodBurger API server...");

    let addr = config.socket_addr()?;
    info!(%addr, problem_base = %config.problem_base, "Configuration loaded");

    let catalog = Catalog::seeded();
    info!(items = catalog.len(), "Menu loaded");

    let orders = Arc::new(OrderService::new(catalog));
    let app = build_router(AppState::new(orders, config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening for HTTP requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
