//! Report Building
//!
//! Converts the frozen measurement store into the report structure: one
//! entry per problem in first-seen order, each carrying the compressed
//! cost history and the timing/cost summaries.

use benchsum_core::MeasurementStore;
use benchsum_report::{
    CompressedCost, CostMetrics, ProblemReport, Report, ReportMeta, TimingMetrics,
};
use benchsum_stats::{compress_costs, compute_cost_summary, compute_timing_summary};
use chrono::Utc;
use regex::Regex;
use std::path::PathBuf;

/// Build the complete report from the store.
///
/// `filter` restricts which problems are reported; it never affects what
/// was parsed. Problems keep the order the input first mentioned them.
pub fn build_report(
    store: &MeasurementStore,
    inputs: &[PathBuf],
    filter: Option<&Regex>,
) -> Report {
    let problems = store
        .problems()
        .filter(|p| filter.map_or(true, |re| re.is_match(p.name())))
        .map(|p| {
            let costs = p.costs();
            let times = p.times_ms();

            ProblemReport {
                name: p.name().to_string(),
                runs: p.runs(),
                costs: compress_costs(&costs)
                    .iter()
                    .map(CompressedCost::from)
                    .collect(),
                timing: TimingMetrics::from(&compute_timing_summary(&times)),
                cost_stats: CostMetrics::from(&compute_cost_summary(&costs)),
            }
        })
        .collect();

    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            inputs: inputs.iter().map(|p| p.display().to_string()).collect(),
        },
        problems,
    }
}
