//! PharmTrack terminal front end
//!
//! The rendering layer over `pharmtrack-core`: loads a dataset, mounts a
//! page, applies the requested query and prints the visible subset with its
//! facet counts.

#![warn(missing_docs)]

pub mod config;
pub mod render;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, LogConfig};

use anyhow::Context;
use pharmtrack_core::{load_records, sample, Dataset};

/// Load the configured dataset, falling back to sample data per collection
///
/// # Errors
/// Returns an error if a configured file cannot be loaded or the combined
/// dataset has duplicate ids
pub fn load_dataset(config: &AppConfig) -> anyhow::Result<Dataset> {
    let inventory = match &config.inventory_path {
        Some(path) => load_records(path)
            .with_context(|| format!("loading inventory from {}", path.display()))?,
        None => sample::inventory(),
    };
    let deliveries = match &config.deliveries_path {
        Some(path) => load_records(path)
            .with_context(|| format!("loading deliveries from {}", path.display()))?,
        None => sample::deliveries(),
    };
    Ok(Dataset::new(inventory, deliveries)?)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
