//! Timing and Cost Summaries
//!
//! Timing statistics run over the insertion-order time sequence; cost
//! statistics over the cost sequence. Standard deviations are sample
//! standard deviations (N−1 divisor), zero for fewer than two runs.

/// Timing statistics for one problem, milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    /// Fastest run.
    pub min_ms: u64,
    /// Slowest run.
    pub max_ms: u64,
    /// Arithmetic mean over all runs.
    pub mean_ms: f64,
    /// Sample standard deviation of the run times.
    pub std_dev_ms: f64,
}

/// Cost statistics for one problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSummary {
    /// Arithmetic mean of the cost values.
    pub mean: f64,
    /// Sample standard deviation of the cost values.
    pub std_dev: f64,
}

/// Summarize a problem's time sequence.
///
/// The store never aggregates an empty history; an empty slice yields the
/// all-zero summary rather than panicking.
pub fn compute_timing_summary(times_ms: &[u64]) -> TimingSummary {
    if times_ms.is_empty() {
        return TimingSummary {
            min_ms: 0,
            max_ms: 0,
            mean_ms: 0.0,
            std_dev_ms: 0.0,
        };
    }

    let min_ms = *times_ms.iter().min().unwrap_or(&0);
    let max_ms = *times_ms.iter().max().unwrap_or(&0);
    let mean_ms = times_ms.iter().map(|&t| t as f64).sum::<f64>() / times_ms.len() as f64;
    let std_dev_ms = sample_std_dev_of(times_ms.iter().map(|&t| t as f64), mean_ms, times_ms.len());

    TimingSummary {
        min_ms,
        max_ms,
        mean_ms,
        std_dev_ms,
    }
}

/// Summarize a problem's cost sequence.
pub fn compute_cost_summary(costs: &[f64]) -> CostSummary {
    if costs.is_empty() {
        return CostSummary {
            mean: 0.0,
            std_dev: 0.0,
        };
    }

    let mean = costs.iter().sum::<f64>() / costs.len() as f64;
    let std_dev = sample_std_dev_of(costs.iter().copied(), mean, costs.len());

    CostSummary { mean, std_dev }
}

fn sample_std_dev_of(values: impl Iterator<Item = f64>, mean: f64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let variance = values.map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}
