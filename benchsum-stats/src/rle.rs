//! Cost Run-Length Encoding
//!
//! Compresses a problem's cost history into `(value, count)` pairs over
//! the ascending-sorted sequence, for compact display of repeated results.

/// One maximal run of equal cost values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRun {
    /// The cost value shared by the run.
    pub cost: f64,
    /// How many measurements produced exactly this value.
    pub count: usize,
}

/// Sort a copy of the cost sequence ascending and run-length-encode it.
///
/// Runs use exact floating-point equality on the stored values, not on any
/// rounded display form, so `5.0` and `5.0000001` land in separate runs.
pub fn compress_costs(costs: &[f64]) -> Vec<CostRun> {
    let mut sorted = costs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut runs: Vec<CostRun> = Vec::new();
    for &cost in &sorted {
        match runs.last_mut() {
            Some(run) if run.cost == cost => run.count += 1,
            _ => runs.push(CostRun { cost, count: 1 }),
        }
    }
    runs
}

/// Expand an encoded run list back into the sorted cost sequence.
///
/// Inverse of [`compress_costs`]; used by tests to check the round-trip.
pub fn expand_costs(runs: &[CostRun]) -> Vec<f64> {
    runs.iter()
        .flat_map(|run| std::iter::repeat(run.cost).take(run.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_sorts_and_groups() {
        let runs = compress_costs(&[7.0, 5.0, 5.0]);
        assert_eq!(
            runs,
            [
                CostRun {
                    cost: 5.0,
                    count: 2
                },
                CostRun {
                    cost: 7.0,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_roundtrip_reproduces_sorted_sequence() {
        let costs = [3.5, 1.0, 3.5, 2.0, 1.0, 1.0];
        let runs = compress_costs(&costs);

        let mut sorted = costs.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        assert_eq!(expand_costs(&runs), sorted);
    }

    #[test]
    fn test_counts_sum_to_run_total() {
        let costs = [2.0, 2.0, 1.0, 9.0, 2.0];
        let runs = compress_costs(&costs);
        let total: usize = runs.iter().map(|r| r.count).sum();
        assert_eq!(total, costs.len());
    }

    #[test]
    fn test_equality_is_exact() {
        // Values differing below display precision still form separate runs.
        let runs = compress_costs(&[5.0, 5.0000001]);
        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(compress_costs(&[]).is_empty());
    }
}
