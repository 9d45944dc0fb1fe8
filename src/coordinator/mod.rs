//! Worker pool orchestration
//!
//! Spawns one OS thread per partitioner share, joins them all, and reports
//! elapsed wall-clock time for the computation phase only. A spawn failure or
//! a worker panic aborts the run: an aggregate missing a share's contribution
//! is misleading rather than merely incomplete, so no partial statistics ever
//! escape this module.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::partition::Partitioner;
use crate::stats::{SeparationStats, Summary};
use crate::worker::{Worker, WorkerOutput};
use crate::Result;
use anyhow::{anyhow, Context};
use hdrhistogram::Histogram;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Results of one complete run
pub struct RunReport {
    pub summary: Summary,
    /// Merged separation histogram in millidegrees, when recording was enabled
    pub histogram: Option<Histogram<u64>>,
    /// Wall-clock time of the computation phase (excludes load and parse)
    pub elapsed: Duration,
    pub records: usize,
    pub workers: usize,
}

/// Run the full pairwise computation across the configured worker pool
///
/// The pool is sized once from the configuration before any thread starts; no
/// threads are created or resized mid-run.
pub fn run(catalog: Arc<Catalog>, config: &Config) -> Result<RunReport> {
    let partitioner = Partitioner::new(catalog.len(), config.workers)?;
    let stats = Arc::new(SeparationStats::new());

    let start = Instant::now();

    let mut handles = Vec::with_capacity(partitioner.workers());
    for (w, share) in partitioner.shares().into_iter().enumerate() {
        let worker = Worker::new(
            w,
            share,
            Arc::clone(&catalog),
            Arc::clone(&stats),
            config.output.show_histogram,
        );

        let spawned = thread::Builder::new()
            .name(format!("starsep-worker-{}", worker.id()))
            .spawn(move || worker.run());

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                // Drain what already started, then abort; the partial samples
                // are discarded along with the run.
                for handle in handles {
                    let _ = handle.join();
                }
                return Err(err).context(format!("failed to spawn worker thread {w}"));
            }
        }
    }

    let mut histogram: Option<Histogram<u64>> = None;
    let mut pairs_processed = 0u64;
    for handle in handles {
        let output: WorkerOutput = handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))?;

        pairs_processed += output.pairs_processed;
        if let Some(worker_hist) = output.histogram {
            match histogram {
                Some(ref mut merged) => merged
                    .add(&worker_hist)
                    .map_err(|e| anyhow!("failed to merge worker histogram: {e}"))?,
                None => histogram = Some(worker_hist),
            }
        }
    }

    let elapsed = start.elapsed();

    let summary = stats.summary();
    debug_assert_eq!(pairs_processed, partitioner.total_pairs());
    debug_assert_eq!(summary.count, pairs_processed);

    Ok(RunReport {
        summary,
        histogram,
        elapsed,
        records: catalog.len(),
        workers: config.workers,
    })
}
