//! JSON report output
//!
//! Serializes the final aggregate for downstream tooling: record/worker/pair
//! counts, separation statistics in degrees, optional percentiles, elapsed
//! computation time, and an RFC 3339 timestamp.

use crate::coordinator::RunReport;
use crate::stats::HISTOGRAM_SCALE;
use crate::Result;
use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Separation percentiles in degrees
#[derive(Debug, Serialize)]
pub struct JsonPercentiles {
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub p99_9: f64,
}

/// Complete JSON report
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub version: String,
    pub timestamp: String,
    pub records: usize,
    pub workers: usize,
    pub pairs: u64,
    pub mean_deg: Option<f64>,
    pub min_deg: Option<f64>,
    pub max_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentiles: Option<JsonPercentiles>,
    pub elapsed_secs: f64,
}

impl JsonReport {
    pub fn from_report(report: &RunReport) -> Self {
        let percentiles = report
            .histogram
            .as_ref()
            .filter(|hist| hist.len() > 0)
            .map(|hist| {
                let deg = |p: f64| hist.value_at_percentile(p) as f64 / HISTOGRAM_SCALE;
                JsonPercentiles {
                    p50: deg(50.0),
                    p90: deg(90.0),
                    p95: deg(95.0),
                    p99: deg(99.0),
                    p99_9: deg(99.9),
                }
            });

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
            records: report.records,
            workers: report.workers,
            pairs: report.summary.count,
            mean_deg: (report.summary.count > 0).then_some(report.summary.mean_deg),
            min_deg: report.summary.min_deg,
            max_deg: report.summary.max_deg,
            percentiles,
            elapsed_secs: report.elapsed.as_secs_f64(),
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = JsonReport::from_report(report);

    let file = File::create(path)
        .with_context(|| format!("failed to create JSON report at {}", path.display()))?;
    serde_json::to_writer_pretty(file, &json).context("failed to serialize JSON report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Summary;
    use std::time::Duration;

    fn sample_report() -> RunReport {
        RunReport {
            summary: Summary {
                count: 3,
                mean_deg: 120.0,
                min_deg: Some(0.0),
                max_deg: Some(180.0),
            },
            histogram: None,
            elapsed: Duration::from_millis(1500),
            records: 3,
            workers: 2,
        }
    }

    #[test]
    fn test_from_report() {
        let json = JsonReport::from_report(&sample_report());

        assert_eq!(json.records, 3);
        assert_eq!(json.workers, 2);
        assert_eq!(json.pairs, 3);
        assert_eq!(json.mean_deg, Some(120.0));
        assert_eq!(json.min_deg, Some(0.0));
        assert_eq!(json.max_deg, Some(180.0));
        assert!(json.percentiles.is_none());
        assert!((json.elapsed_secs - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_run_serializes_without_stats() {
        let report = RunReport {
            summary: Summary {
                count: 0,
                mean_deg: 0.0,
                min_deg: None,
                max_deg: None,
            },
            histogram: None,
            elapsed: Duration::from_millis(1),
            records: 1,
            workers: 4,
        };

        let json = JsonReport::from_report(&report);
        assert_eq!(json.mean_deg, None);

        let rendered = serde_json::to_string(&json).unwrap();
        assert!(rendered.contains("\"min_deg\":null"));
        assert!(!rendered.contains("percentiles"));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_report(&sample_report(), &path).unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["pairs"], 3);
        assert_eq!(value["max_deg"], 180.0);
    }
}
