//! CLI tool to print the resolved configuration
//!
//! Secrets are never printed. Exits non-zero if resolution fails, which makes
//! it usable as a deploy-time configuration check.
//!
//! Usage:
//!   cargo run --bin print_config -- --env production

use anyhow::{Context, Result};
use clap::Parser;
use sage_auth_service::config::{keys, EnvLoader};
use serde_json::json;
use std::path::PathBuf;

/// Resolve and print the service configuration
#[derive(Parser, Debug)]
#[command(name = "print_config")]
#[command(about = "Resolve and print the service configuration")]
struct Args {
    /// Environment indicator (overrides ENVIRONMENT env var)
    #[arg(short, long)]
    env: Option<String>,

    /// Directory holding .env and .env.<profile> files
    #[arg(long, default_value = ".")]
    env_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut loader = EnvLoader::in_dir(&args.env_dir);
    if let Some(env) = args.env {
        loader = loader.with_override(keys::ENVIRONMENT, env);
    }

    let settings = loader.load().context("Failed to resolve configuration")?;
    let credentials = settings.cloud_credentials();

    let report = json!({
        "settings": settings,
        "derived": {
            "is_local_emulation": settings.is_local_emulation(),
            "aws_endpoint_override": settings.aws_endpoint_override(),
            "storage_endpoint_override": settings.storage_endpoint_override(),
            "storage_read_domain": settings.storage_read_domain(),
            "lambda_endpoint_override": settings.lambda_endpoint_override(),
            "aws_region": credentials.region,
            "static_aws_credentials": credentials.static_keys.is_some(),
        },
        "warnings": settings
            .warnings()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
