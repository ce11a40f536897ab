//! # Vaccine Registry
//!
//! Loads a record file, then answers status queries per virus.
//!
//! ```text
//! vaccine-registry records.txt [--bloom-size N] [--hash-count K] [--max-level L] [--seed S]
//! ```
//!
//! Logs go to stderr (`RUST_LOG` controls the level, default `info`);
//! command answers go to stdout.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use registry_runtime::{load_file, shell, Args, RuntimeConfig};
use vr_03_category_index::CategoryRegistry;

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let mut config = RuntimeConfig::from_args(Args::parse());
    config.apply_env();
    config.validate().context("Invalid configuration")?;

    info!(
        input = %config.input.display(),
        size_bits = config.registry.filter.size_bits,
        hash_count = config.registry.filter.hash_count,
        max_level = config.registry.index.max_level,
        "Starting vaccine registry"
    );

    let mut registry =
        CategoryRegistry::new(config.registry.clone()).context("Failed to create registry")?;
    let report = load_file(&config.input, &mut registry)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    if !report.is_clean() {
        warn!(rejected = report.errors.len(), "Some input lines were rejected");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(stdin.lock(), stdout.lock(), &registry).context("Shell I/O failed")?;

    info!("Exiting");
    Ok(())
}
