//! Separation statistics
//!
//! One shared accumulator folds every separation sample computed by the worker
//! pool into count, running mean (Welford's incremental formula), minimum and
//! maximum. The entire fold happens inside a single mutex scope per sample:
//! there is no unlocked fast path for any field, so no thread can ever observe
//! a count that disagrees with the mean or a min/max update racing ahead of
//! the rest of the state.
//!
//! An optional HdrHistogram of separations is kept per worker and merged after
//! the join; it never touches the shared fold path.

use hdrhistogram::Histogram;
use serde::Serialize;
use std::sync::Mutex;

/// Scale applied when recording separations into a histogram (millidegrees)
pub const HISTOGRAM_SCALE: f64 = 1000.0;

/// Create a histogram sized for separations in millidegrees (0..=180 000)
pub fn separation_histogram() -> Histogram<u64> {
    Histogram::new_with_bounds(1, 180_000, 3).expect("histogram bounds are static")
}

/// Frozen view of the aggregate after a run
///
/// `min_deg`/`max_deg` are `None` when no samples were folded, so a degenerate
/// catalog reports "no samples" instead of the ±∞ sentinels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub count: u64,
    pub mean_deg: f64,
    pub min_deg: Option<f64>,
    pub max_deg: Option<f64>,
}

/// Mutable aggregate state, only ever touched under the stats mutex
#[derive(Debug)]
struct State {
    count: u64,
    mean: f64,
    min: f64,
    max: f64,
}

impl State {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn fold(&mut self, sample: f64) {
        self.count += 1;
        self.mean += (sample - self.mean) / self.count as f64;
        if sample < self.min {
            self.min = sample;
        }
        if sample > self.max {
            self.max = sample;
        }
    }
}

/// Thread-safe accumulator for separation samples
///
/// Safe to share across any number of workers via `Arc`. Every mutation goes
/// through [`fold`](Self::fold); readers take a [`summary`](Self::summary)
/// snapshot once the worker pool has joined.
#[derive(Debug)]
pub struct SeparationStats {
    state: Mutex<State>,
}

impl SeparationStats {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::new()),
        }
    }

    /// Fold one sample into the aggregate
    ///
    /// Count increment, Welford mean update and min/max comparisons happen as
    /// one logically atomic step under the mutex.
    pub fn fold(&self, sample: f64) {
        let mut state = self.state.lock().expect("stats mutex poisoned");
        state.fold(sample);
    }

    /// Snapshot the aggregate
    pub fn summary(&self) -> Summary {
        let state = self.state.lock().expect("stats mutex poisoned");
        Summary {
            count: state.count,
            mean_deg: state.mean,
            min_deg: (state.count > 0).then_some(state.min),
            max_deg: (state.count > 0).then_some(state.max),
        }
    }
}

impl Default for SeparationStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_known_sequence() {
        let stats = SeparationStats::new();
        for sample in [1.0, 2.0, 3.0, 4.0] {
            stats.fold(sample);
        }

        let summary = stats.summary();
        assert_eq!(summary.count, 4);
        assert!((summary.mean_deg - 2.5).abs() < 1e-12);
        assert_eq!(summary.min_deg, Some(1.0));
        assert_eq!(summary.max_deg, Some(4.0));
    }

    #[test]
    fn test_empty_summary() {
        let stats = SeparationStats::new();
        let summary = stats.summary();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_deg, 0.0);
        assert_eq!(summary.min_deg, None);
        assert_eq!(summary.max_deg, None);
    }

    #[test]
    fn test_single_sample() {
        let stats = SeparationStats::new();
        stats.fold(42.0);

        let summary = stats.summary();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean_deg, 42.0);
        assert_eq!(summary.min_deg, Some(42.0));
        assert_eq!(summary.max_deg, Some(42.0));
    }

    #[test]
    fn test_concurrent_folds() {
        let stats = Arc::new(SeparationStats::new());
        let threads = 4;
        let per_thread = 1_000u64;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for k in 0..per_thread {
                        // Values span 0..4000 with a known min of 0 and max of 3999
                        stats.fold((t * per_thread + k) as f64);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let summary = stats.summary();
        let total = threads * per_thread;
        assert_eq!(summary.count, total);
        assert_eq!(summary.min_deg, Some(0.0));
        assert_eq!(summary.max_deg, Some((total - 1) as f64));

        // Arithmetic mean of 0..total
        let expected = (total - 1) as f64 / 2.0;
        assert!((summary.mean_deg - expected).abs() / expected < 1e-9);
    }

    #[test]
    fn test_fold_order_shifts_mean_only_in_rounding() {
        let samples = [0.125, 7.5, 3.25, 180.0, 0.0, 99.875];

        let forward = SeparationStats::new();
        for &s in &samples {
            forward.fold(s);
        }
        let backward = SeparationStats::new();
        for &s in samples.iter().rev() {
            backward.fold(s);
        }

        let f = forward.summary();
        let b = backward.summary();
        assert_eq!(f.count, b.count);
        assert_eq!(f.min_deg, b.min_deg);
        assert_eq!(f.max_deg, b.max_deg);
        assert!((f.mean_deg - b.mean_deg).abs() < 1e-9);
    }

    #[test]
    fn test_separation_histogram_records_full_range() {
        let mut hist = separation_histogram();
        hist.saturating_record(0);
        hist.saturating_record(180_000);
        hist.saturating_record(90_000);

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.min(), 0);
        // max() rounds to bucket precision
        assert!(hist.max() >= 180_000);
    }
}
