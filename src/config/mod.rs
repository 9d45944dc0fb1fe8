//! Configuration module
//!
//! Handles CLI argument parsing and validation.

pub mod cli;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: CatalogSource,
    /// Worker thread count, fixed before the computation phase starts
    pub workers: usize,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub debug: bool,
}

/// Where the catalog comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CatalogSource {
    /// Whitespace-delimited catalog file (id, ra, dec per row)
    File { path: PathBuf },
    /// Seeded uniform random sky
    Synthetic { count: usize, seed: u64 },
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write the final report as JSON to this path
    pub json_output: Option<PathBuf>,
    /// Collect per-worker histograms and print separation percentiles
    #[serde(default)]
    pub show_histogram: bool,
}
