//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// starsep - parallel angular-separation statistics for star catalogs
#[derive(Parser, Debug)]
#[command(name = "starsep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog file with one star per row: id, right ascension, declination
    ///
    /// Not required when --synthetic is given.
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,

    // === Worker Options ===
    /// Number of worker threads
    #[arg(short = 't', long, default_value_t = num_cpus::get())]
    pub threads: usize,

    // === Catalog Options ===
    /// Generate a uniform synthetic sky with N stars instead of loading a file
    #[arg(long, value_name = "N")]
    pub synthetic: Option<usize>,

    /// Seed for synthetic sky generation
    #[arg(long, default_value = "42")]
    pub seed: u64,

    // === Output Options ===
    /// Print separation percentiles from a merged histogram
    #[arg(long)]
    pub show_histogram: bool,

    /// JSON report output path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Enable debug output (phase timing)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.threads == 0 {
            anyhow::bail!("threads must be at least 1");
        }
        if self.catalog.is_none() && self.synthetic.is_none() {
            anyhow::bail!("either a CATALOG path or --synthetic is required");
        }
        if self.catalog.is_some() && self.synthetic.is_some() {
            anyhow::bail!("--synthetic cannot be combined with a CATALOG path");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_path() {
        let cli = Cli::try_parse_from(["starsep", "data/tycho-trimmed.csv"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("data/tycho-trimmed.csv")));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_threads() {
        let cli = Cli::try_parse_from(["starsep", "-t", "8", "stars.csv"]).unwrap();
        assert_eq!(cli.threads, 8);

        let cli = Cli::try_parse_from(["starsep", "--threads", "16", "stars.csv"]).unwrap();
        assert_eq!(cli.threads, 16);
    }

    #[test]
    fn test_non_numeric_threads_rejected() {
        assert!(Cli::try_parse_from(["starsep", "-t", "abc", "stars.csv"]).is_err());
        assert!(Cli::try_parse_from(["starsep", "-t", "-3", "stars.csv"]).is_err());
    }

    #[test]
    fn test_zero_threads_rejected_by_validate() {
        let cli = Cli::try_parse_from(["starsep", "-t", "0", "stars.csv"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_synthetic_without_path() {
        let cli = Cli::try_parse_from(["starsep", "--synthetic", "1000", "--seed", "9"]).unwrap();
        assert_eq!(cli.synthetic, Some(1000));
        assert_eq!(cli.seed, 9);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_no_source_rejected() {
        let cli = Cli::try_parse_from(["starsep"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_path_and_synthetic_conflict() {
        let cli = Cli::try_parse_from(["starsep", "stars.csv", "--synthetic", "10"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_output_flags() {
        let cli = Cli::try_parse_from([
            "starsep",
            "stars.csv",
            "--show-histogram",
            "--json-output",
            "report.json",
        ])
        .unwrap();
        assert!(cli.show_histogram);
        assert_eq!(cli.json_output, Some(PathBuf::from("report.json")));
    }
}
