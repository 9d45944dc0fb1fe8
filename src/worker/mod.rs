//! Worker execution unit
//!
//! Each worker owns one partitioner share and runs it to completion with no
//! suspension points: evaluate the separation for a canonical pair, fold it
//! into the shared stats, move on. Workers share the catalog and the stats
//! accumulator read-only and through its fold operation respectively; they
//! hold no other mutable state in common.

use crate::catalog::Catalog;
use crate::distance::angular_separation_deg;
use crate::partition::PairShare;
use crate::stats::{separation_histogram, SeparationStats, HISTOGRAM_SCALE};
use hdrhistogram::Histogram;
use std::sync::Arc;

/// Per-worker results carried back through the join
pub struct WorkerOutput {
    pub pairs_processed: u64,
    /// Separation histogram in millidegrees, when recording was requested
    pub histogram: Option<Histogram<u64>>,
}

/// One worker bound to one share of the pair space
pub struct Worker {
    id: usize,
    share: PairShare,
    catalog: Arc<Catalog>,
    stats: Arc<SeparationStats>,
    histogram: Option<Histogram<u64>>,
}

impl Worker {
    pub fn new(
        id: usize,
        share: PairShare,
        catalog: Arc<Catalog>,
        stats: Arc<SeparationStats>,
        record_histogram: bool,
    ) -> Self {
        Self {
            id,
            share,
            catalog,
            stats,
            histogram: record_histogram.then(separation_histogram),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Walk the share to completion
    pub fn run(mut self) -> WorkerOutput {
        let stars = self.catalog.stars();
        let mut pairs_processed = 0u64;

        for (i, j) in self.share.pairs() {
            let a = &stars[i];
            let b = &stars[j];
            let sep = angular_separation_deg(a.ra_deg, a.dec_deg, b.ra_deg, b.dec_deg);

            self.stats.fold(sep);
            if let Some(ref mut hist) = self.histogram {
                hist.saturating_record((sep * HISTOGRAM_SCALE).round() as u64);
            }
            pairs_processed += 1;
        }

        WorkerOutput {
            pairs_processed,
            histogram: self.histogram,
        }
    }
}
