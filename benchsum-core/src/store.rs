//! Measurement Store
//!
//! Accumulates parsed measurements keyed by problem name. Problems keep
//! their first-seen order; lookups go through a hash index instead of a
//! linear scan.

use fxhash::FxHashMap;

/// A single parsed observation: solution cost plus wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Solution cost reported by the benchmark run.
    pub cost: f64,
    /// Wall-clock time of the run in milliseconds.
    pub time_ms: u64,
}

/// All measurements recorded for one named problem, in insertion order.
#[derive(Debug, Clone)]
pub struct ProblemHistory {
    name: String,
    measurements: Vec<Measurement>,
}

impl ProblemHistory {
    fn new(name: String) -> Self {
        Self {
            name,
            measurements: Vec::new(),
        }
    }

    /// Problem name (case-sensitive, as it appeared in the input).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of recorded runs. Always at least 1: the store only creates
    /// a history when it has a measurement to append.
    pub fn runs(&self) -> usize {
        self.measurements.len()
    }

    /// The recorded measurements in insertion order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// The cost sequence in insertion order.
    pub fn costs(&self) -> Vec<f64> {
        self.measurements.iter().map(|m| m.cost).collect()
    }

    /// The time sequence in insertion order, milliseconds.
    pub fn times_ms(&self) -> Vec<u64> {
        self.measurements.iter().map(|m| m.time_ms).collect()
    }
}

/// Mapping from problem name to measurement history.
///
/// Re-encountering a known name appends to its existing history; new names
/// are added at the end, so iteration yields problems in the order the
/// input first mentioned them. The store grows without a capacity ceiling.
#[derive(Debug, Default)]
pub struct MeasurementStore {
    problems: Vec<ProblemHistory>,
    index: FxHashMap<String, usize>,
}

impl MeasurementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement to the named problem, creating the problem on
    /// first encounter.
    pub fn record(&mut self, name: &str, measurement: Measurement) {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.problems.len();
                self.problems.push(ProblemHistory::new(name.to_string()));
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        self.problems[idx].measurements.push(measurement);
    }

    /// Look up a problem by name.
    pub fn get(&self, name: &str) -> Option<&ProblemHistory> {
        self.index.get(name).map(|&idx| &self.problems[idx])
    }

    /// Number of distinct problems.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// True if no measurement has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Iterate over problems in first-seen order.
    pub fn problems(&self) -> impl Iterator<Item = &ProblemHistory> {
        self.problems.iter()
    }
}
