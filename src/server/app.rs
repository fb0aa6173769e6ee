//! Application server
//!
//! This module provides the main application server implementation
//! including initialization and graceful shutdown handling.

use crate::{
    config::Settings,
    server::{routes, state::AppState},
};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Main application struct
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application instance
    ///
    /// Opens the database (creating missing tables) and the cloud clients.
    pub async fn new(settings: Arc<Settings>) -> Result<Self> {
        tracing::info!(app_name = %settings.app_name, "Starting up");
        let state = AppState::new(settings).await?;

        Ok(Self { state })
    }

    /// Run the server until SIGINT (Ctrl+C) or SIGTERM
    pub async fn run_with_graceful_shutdown(self) -> Result<()> {
        let addr = self
            .state
            .settings
            .server_addr()
            .parse::<SocketAddr>()
            .context("Invalid HOST/PORT")?;
        let router = routes::create_router(self.state.clone())?;

        tracing::info!("Starting server on {} with graceful shutdown enabled", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!(app_name = %self.state.settings.app_name, "Shutting down");

        Ok(())
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the settings
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }
}

/// Create a future that completes when a shutdown signal is received
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
