//! Human-readable text output

use crate::coordinator::RunReport;
use crate::stats::HISTOGRAM_SCALE;
use crate::util::format::{format_count, format_duration};

/// Print the run report to stdout
///
/// Displays record, worker and pair counts, separation min/mean/max in
/// degrees, optional percentiles, and the elapsed computation time.
pub fn print_report(report: &RunReport) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                ANGULAR SEPARATION REPORT");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Catalog records: {}", format_count(report.records as u64));
    println!("Workers:         {}", report.workers);
    println!("Pairs sampled:   {}", format_count(report.summary.count));
    println!();

    match (report.summary.min_deg, report.summary.max_deg) {
        (Some(min), Some(max)) => {
            println!("Separation (degrees):");
            println!("  Min:  {:.6}", min);
            println!("  Mean: {:.6}", report.summary.mean_deg);
            println!("  Max:  {:.6}", max);
        }
        _ => {
            println!("No pairs to sample (catalog has fewer than two records)");
        }
    }

    if let Some(ref hist) = report.histogram {
        if hist.len() > 0 {
            println!();
            println!("  Percentiles:");
            for &p in &[50.0, 90.0, 95.0, 99.0, 99.9] {
                let deg = hist.value_at_percentile(p) as f64 / HISTOGRAM_SCALE;
                println!("    p{:5.2}: {:8.3}", p, deg);
            }
        }
    }

    println!();
    println!("Computation time: {}", format_duration(report.elapsed));
    println!("═══════════════════════════════════════════════════════════");
}
