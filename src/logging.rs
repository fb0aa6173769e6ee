//! Logging setup
//!
//! Installs the global tracing subscriber. Development gets human-readable
//! output; production emits JSON lines for log aggregation. An optional file
//! receives JSON regardless of profile.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::Settings;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Filter from `RUST_LOG`, falling back to the configured log level
fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Initialize the global tracing subscriber
pub fn init_tracing(settings: &Settings, log_file: Option<&Path>) -> Result<()> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console: BoxedLayer = if settings.is_production() {
        fmt::layer()
            .json()
            .with_filter(env_filter(&settings.log_level))
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_filter(env_filter(&settings.log_level))
            .boxed()
    };
    layers.push(console);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(env_filter(&settings.log_level))
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
