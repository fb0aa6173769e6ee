//! Sage Auth Service
//!
//! Resolves the environment profile once at startup and serves the HTTP API.

use anyhow::{Context, Result};
use clap::Parser;
use sage_auth_service::{
    config::{keys, EnvLoader},
    logging::init_tracing,
    server::App,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Sage Auth Service
///
/// Authentication service with environment-aware configuration profiles.
#[derive(Parser, Debug)]
#[command(name = "sage-auth-service")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT env var)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long)]
    log_level: Option<String>,

    /// Environment: development, dev, production, prod (overrides ENVIRONMENT env var)
    #[arg(short, long)]
    env: Option<String>,

    /// Directory holding .env and .env.<profile> files
    #[arg(long, default_value = ".")]
    env_dir: PathBuf,

    /// Also write JSON logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolve configuration first (before logging, so we can use log_level)
    let mut loader = EnvLoader::in_dir(&args.env_dir);
    if let Some(env) = args.env {
        loader = loader.with_override(keys::ENVIRONMENT, env);
    }
    if let Some(port) = args.port {
        loader = loader.with_override(keys::PORT, port.to_string());
    }
    if let Some(host) = args.host {
        loader = loader.with_override(keys::HOST, host);
    }
    if let Some(log_level) = args.log_level {
        loader = loader.with_override(keys::LOG_LEVEL, log_level);
    }

    let settings = loader.load().context("Failed to resolve configuration")?;

    init_tracing(&settings, args.log_file.as_deref())?;

    for warning in settings.warnings() {
        tracing::warn!(warning = %warning, "Degraded configuration");
    }

    tracing::info!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        environment = %settings.environment,
        local_emulation = settings.is_local_emulation(),
        host = %settings.host,
        port = %settings.port,
        "Starting application"
    );

    let app = App::new(Arc::new(settings)).await?;

    app.run_with_graceful_shutdown().await?;

    tracing::info!("Application shutdown complete");

    Ok(())
}
