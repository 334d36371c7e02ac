#![warn(missing_docs)]
//! Benchsum Report - Rendering
//!
//! Report data structures plus the two output formats:
//! - Human-readable text (fixed-width terminal layout)
//! - JSON (machine-readable)
//!
//! Also home to the duration formatter used by the human renderer.

mod duration;
mod human;
mod json;
mod report;

pub use duration::format_duration;
pub use human::format_human_output;
pub use json::generate_json_report;
pub use report::{
    CompressedCost, CostMetrics, ProblemReport, Report, ReportMeta, TimingMetrics,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON with the full report structure
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
