//! Report Data Structures

use benchsum_stats::{CostRun, CostSummary, TimingSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete summary report over all parsed input files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report metadata.
    pub meta: ReportMeta,
    /// One entry per problem, in first-seen order.
    pub problems: Vec<ProblemReport>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// benchsum version that produced the report.
    pub version: String,
    /// UTC time of report generation.
    pub timestamp: DateTime<Utc>,
    /// Input files in the order they were parsed.
    pub inputs: Vec<String>,
}

/// Aggregated results for one problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemReport {
    /// Problem name as it appeared in the input.
    pub name: String,
    /// Number of recorded runs.
    pub runs: usize,
    /// Run-length-encoded cost history, ascending by value.
    pub costs: Vec<CompressedCost>,
    /// Timing statistics over the run times.
    pub timing: TimingMetrics,
    /// Statistics over the cost values.
    pub cost_stats: CostMetrics,
}

/// One maximal run of equal cost values in the sorted history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompressedCost {
    /// The shared cost value.
    pub cost: f64,
    /// How many runs produced it.
    pub count: usize,
}

impl From<&CostRun> for CompressedCost {
    fn from(run: &CostRun) -> Self {
        Self {
            cost: run.cost,
            count: run.count,
        }
    }
}

/// Timing metrics, milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingMetrics {
    /// Fastest run.
    pub min_ms: u64,
    /// Mean over all runs.
    pub mean_ms: f64,
    /// Slowest run.
    pub max_ms: u64,
    /// Sample standard deviation of the run times.
    pub std_dev_ms: f64,
}

impl From<&TimingSummary> for TimingMetrics {
    fn from(summary: &TimingSummary) -> Self {
        Self {
            min_ms: summary.min_ms,
            mean_ms: summary.mean_ms,
            max_ms: summary.max_ms,
            std_dev_ms: summary.std_dev_ms,
        }
    }
}

/// Cost metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostMetrics {
    /// Mean cost over all runs.
    pub mean: f64,
    /// Sample standard deviation of the costs.
    pub std_dev: f64,
}

impl From<&CostSummary> for CostMetrics {
    fn from(summary: &CostSummary) -> Self {
        Self {
            mean: summary.mean,
            std_dev: summary.std_dev,
        }
    }
}
