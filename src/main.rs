//! starsep CLI entry point

use anyhow::{Context, Result};
use starsep::catalog::Catalog;
use starsep::config::{cli::Cli, validator, CatalogSource, Config, OutputConfig};
use starsep::{coordinator, output};
use std::sync::Arc;
use std::time::Instant;

fn main() -> Result<()> {
    println!("starsep v{}", env!("CARGO_PKG_VERSION"));
    println!("Parallel angular-separation statistics");
    println!();

    // Parse CLI arguments
    let parse_start = Instant::now();
    let cli = Cli::parse_args();
    cli.validate()?;
    if cli.debug {
        eprintln!(
            "DEBUG TIMING: CLI parse: {:.3}s",
            parse_start.elapsed().as_secs_f64()
        );
    }

    // Build and validate configuration
    let config = build_config_from_cli(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;

    // Load the catalog before any worker exists; it is read-only from here on
    let load_start = Instant::now();
    let catalog = load_catalog(&config.source)?;
    println!("{} records read", catalog.len());
    if config.debug {
        eprintln!(
            "DEBUG TIMING: Catalog load: {:.3}s",
            load_start.elapsed().as_secs_f64()
        );
    }

    let n = catalog.len() as u64;
    if n > 50_000 {
        eprintln!(
            "Warning: {} records produce {} pairs; this run may take a while",
            n,
            n * (n - 1) / 2
        );
    }

    let report = coordinator::run(Arc::new(catalog), &config)?;

    output::text::print_report(&report);

    if let Some(ref path) = config.output.json_output {
        output::json::write_report(&report, path)?;
        println!();
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

/// Build run configuration from CLI arguments
fn build_config_from_cli(cli: &Cli) -> Result<Config> {
    let source = match cli.synthetic {
        Some(count) => CatalogSource::Synthetic {
            count,
            seed: cli.seed,
        },
        None => {
            let path = cli
                .catalog
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Catalog path required unless --synthetic is given"))?;
            CatalogSource::File { path }
        }
    };

    Ok(Config {
        source,
        workers: cli.threads,
        output: OutputConfig {
            json_output: cli.json_output.clone(),
            show_histogram: cli.show_histogram,
        },
        debug: cli.debug,
    })
}

/// Load or generate the catalog named by the configuration
fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    match source {
        CatalogSource::File { path } => Catalog::from_path(path)
            .with_context(|| format!("Unable to load catalog {}", path.display())),
        CatalogSource::Synthetic { count, seed } => Ok(Catalog::synthetic(*count, *seed)),
    }
}
