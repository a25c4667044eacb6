//! Beacon - Entry Point
//!
//! Loads configuration, initializes logging and runs the example service
//! through the bootstrap. Diagnostics go to stderr; the exit status is 0
//! on graceful stop and non-zero on an unrecovered failure.

// Force-link beacon-providers to ensure linkme inventory registrations are included
extern crate beacon_providers;

use beacon::infrastructure::config::{ConfigLoader, validate_app_config};
use beacon::infrastructure::logging::{init_logging, log_config_loaded};
use beacon::launcher::bootstrap;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface for Beacon
#[derive(Parser, Debug)]
#[command(name = "beacon")]
#[command(about = "Beacon - Discoverable service bootstrap")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Instance config provider for the deployment override (e.g. datacenter, cloud)
    #[arg(long)]
    pub instance_config: Option<String>,

    /// Stop after this many seconds instead of waiting for ctrl-c
    #[arg(long, value_name = "SECS")]
    pub run_for: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("beacon: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(name) = cli.instance_config {
        config.discovery.instance_config = name;
    }
    if let Some(secs) = cli.run_for {
        config.service.run_for_secs = Some(secs);
    }
    if let Err(e) = validate_app_config(&config) {
        eprintln!("beacon: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("beacon: {e}");
        return ExitCode::FAILURE;
    }
    if let Some(path) = loader.source_path() {
        log_config_loaded(&path);
    }

    let outcome = match bootstrap(&config) {
        Ok(bootstrap) => bootstrap.run().await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to declare modules");
            return ExitCode::FAILURE;
        }
    };

    ExitCode::from(outcome.exit_code())
}
