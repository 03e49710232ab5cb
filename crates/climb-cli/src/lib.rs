//! Climb CLI - command line tools over the climb performance engine.
//!
//! Binaries:
//! - climb_segment: performance between two altitudes, with diagnostics on failure
//! - perf_lookup: standard or temperature-corrected performance at one point

pub mod config;
pub mod report;

pub use config::{Config, OutputFormat};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}
