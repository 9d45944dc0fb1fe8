//! Star catalog loading
//!
//! Parses whitespace-delimited catalog rows (identifier, right ascension,
//! declination) into an immutable, index-stable sequence of stars. The catalog
//! is sized by the actual input, never by a compile-time cap, and is read-only
//! after construction so workers can share it without synchronization.
//!
//! A seeded synthetic generator is provided for benchmarking runs that don't
//! have a real catalog at hand.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unable to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 columns (id, ra, dec), found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: invalid {column} value '{token}'")]
    Parse {
        line: usize,
        column: &'static str,
        token: String,
    },
}

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub id: u32,
    /// Right ascension in degrees
    pub ra_deg: f64,
    /// Declination in degrees
    pub dec_deg: f64,
}

/// Immutable, index-stable star catalog
///
/// Workers reference stars by index 0..N−1, so the order of records is the
/// order they appeared in the input and never changes after load.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stars: Vec<Star>,
}

impl Catalog {
    /// Load a catalog from a file on disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse catalog rows from any buffered reader
    ///
    /// Blank lines are skipped. Every other row must carry exactly three
    /// whitespace-delimited columns: an integer identifier followed by right
    /// ascension and declination in degrees. Malformed rows abort the load
    /// with the offending line number.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let mut stars = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 3 {
                return Err(CatalogError::ColumnCount {
                    line: line_no,
                    found: fields.len(),
                });
            }

            let id = fields[0].parse().map_err(|_| CatalogError::Parse {
                line: line_no,
                column: "id",
                token: fields[0].to_string(),
            })?;
            let ra_deg = fields[1].parse().map_err(|_| CatalogError::Parse {
                line: line_no,
                column: "ra",
                token: fields[1].to_string(),
            })?;
            let dec_deg = fields[2].parse().map_err(|_| CatalogError::Parse {
                line: line_no,
                column: "dec",
                token: fields[2].to_string(),
            })?;

            stars.push(Star { id, ra_deg, dec_deg });
        }

        Ok(Self { stars })
    }

    /// Build a catalog from records already in memory
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    /// Generate a seeded uniform random sky
    ///
    /// Declination is drawn as the arcsine of a uniform value so stars are
    /// uniform over the sphere rather than bunched toward the poles.
    pub fn synthetic(count: usize, seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let stars = (0..count)
            .map(|i| {
                let ra_deg = rng.gen_range(0.0..360.0);
                let z: f64 = rng.gen_range(-1.0..1.0);
                Star {
                    id: i as u32 + 1,
                    ra_deg,
                    dec_deg: z.asin().to_degrees(),
                }
            })
            .collect();

        Self { stars }
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// All records, in load order
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
