//! starsep - Parallel angular-separation statistics for star catalogs
//!
//! starsep computes aggregate statistics (count, minimum, maximum, running mean)
//! of the great-circle angular separation between every unordered pair of stars
//! in a catalog, parallelized across a configurable pool of worker threads.
//!
//! # Architecture
//!
//! - **Catalog**: immutable, index-stable star records loaded once before the run
//! - **Deterministic partitioning**: the N·(N−1)/2 canonical pairs are split into
//!   disjoint per-worker shares before any thread starts, so no runtime dedup
//!   bookkeeping is needed
//! - **Single-fold aggregation**: count, Welford running mean, min and max are
//!   updated as one mutex-protected step per sample
//! - **Worker pool**: one OS thread per share, joined before anything is reported

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod distance;
pub mod output;
pub mod partition;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use catalog::{Catalog, Star};
pub use config::Config;
pub use stats::Summary;

/// Result type used throughout starsep
pub type Result<T> = anyhow::Result<T>;
