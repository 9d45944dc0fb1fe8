//! Deterministic pair-space partitioning
//!
//! Splits the canonical pair space `{(i, j) : 0 <= i < j < n}` into disjoint,
//! collectively exhaustive shares, one per worker. Worker `w` owns every pair
//! whose higher index falls in `[w·n/W, (w+1)·n/W)`, with the lower index
//! sweeping `[0, j)`. The split is fixed before any thread starts, so workers
//! need no runtime coordination and no shared "already computed" bookkeeping;
//! auxiliary space is O(1) instead of the O(N²) flag matrix a check-then-act
//! design would require.
//!
//! Later shares carry more pairs than earlier ones (the per-`j` inner sweep
//! grows with `j`); the imbalance is bounded and accepted in exchange for a
//! coordination-free hot loop.

use crate::Result;
use anyhow::bail;

/// One worker's slice of the canonical pair space
///
/// Covers all pairs `(i, j)` with `j` in `[j_start, j_end)` and `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairShare {
    j_start: usize,
    j_end: usize,
}

impl PairShare {
    /// Iterate this share's canonical pairs
    pub fn pairs(&self) -> PairIter {
        PairIter {
            i: 0,
            j: self.j_start,
            j_end: self.j_end,
        }
    }

    /// Number of pairs in this share
    pub fn pair_count(&self) -> u64 {
        if self.j_end <= self.j_start {
            return 0;
        }
        // sum of j over [j_start, j_end)
        let a = self.j_start as u64;
        let b = self.j_end as u64;
        (b - a) * (a + b - 1) / 2
    }
}

/// Iterator over the canonical pairs of one share, in (j, i) order
#[derive(Debug)]
pub struct PairIter {
    i: usize,
    j: usize,
    j_end: usize,
}

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        while self.j < self.j_end {
            if self.i < self.j {
                let pair = (self.i, self.j);
                self.i += 1;
                return Some(pair);
            }
            self.j += 1;
            self.i = 0;
        }
        None
    }
}

/// Deterministic assignment of canonical pairs to workers
#[derive(Debug)]
pub struct Partitioner {
    n: usize,
    workers: usize,
}

impl Partitioner {
    /// Create a partitioner for `n` catalog entries across `workers` shares
    ///
    /// Zero workers is a configuration error and is rejected here as well as
    /// in config validation.
    pub fn new(n: usize, workers: usize) -> Result<Self> {
        if workers == 0 {
            bail!("worker count must be at least 1");
        }
        Ok(Self { n, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The share owned by worker `w`
    pub fn share(&self, w: usize) -> PairShare {
        debug_assert!(w < self.workers);
        PairShare {
            j_start: w * self.n / self.workers,
            j_end: (w + 1) * self.n / self.workers,
        }
    }

    /// All shares, in worker order
    pub fn shares(&self) -> Vec<PairShare> {
        (0..self.workers).map(|w| self.share(w)).collect()
    }

    /// Total number of canonical pairs, n·(n−1)/2
    pub fn total_pairs(&self) -> u64 {
        let n = self.n as u64;
        n * n.saturating_sub(1) / 2
    }
}
