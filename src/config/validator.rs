//! Configuration validation

use super::*;
use anyhow::Result;

/// Upper bound on the worker pool, far above any host's core count
const MAX_WORKERS: usize = 4096;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_workers(config.workers)?;
    validate_source(&config.source)?;
    Ok(())
}

/// Validate the worker count
pub fn validate_workers(workers: usize) -> Result<()> {
    if workers == 0 {
        anyhow::bail!("worker count must be at least 1");
    }
    if workers > MAX_WORKERS {
        anyhow::bail!(
            "worker count must be between 1 and {}, got {}",
            MAX_WORKERS,
            workers
        );
    }
    Ok(())
}

fn validate_source(source: &CatalogSource) -> Result<()> {
    match source {
        CatalogSource::File { path } => {
            if path.as_os_str().is_empty() {
                anyhow::bail!("catalog path is empty");
            }
        }
        CatalogSource::Synthetic { .. } => {}
    }
    Ok(())
}
