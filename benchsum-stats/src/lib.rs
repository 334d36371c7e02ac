#![warn(missing_docs)]
//! Benchsum Statistical Engine
//!
//! Pure functions summarizing one problem's measurement history:
//! - Run-length encoding of the ascending-sorted cost sequence
//! - Timing summary (min, mean, max, sample standard deviation)
//! - Cost summary (mean, sample standard deviation)
//!
//! Sorting happens on a copy and only feeds the compressed-cost display;
//! timing statistics always run over the insertion-order time sequence.

mod rle;
mod summary;

pub use rle::{CostRun, compress_costs, expand_costs};
pub use summary::{CostSummary, TimingSummary, compute_cost_summary, compute_timing_summary};

/// Fractional parts below this threshold render as integers in the
/// compressed cost display.
pub const DISPLAY_PRECISION: f64 = 1e-6;
