//! Human-Readable Output
//!
//! Per problem: a separator block, the run count, the compressed cost
//! list, the three timing lines, then mean cost and cost standard
//! deviation.

use crate::duration::format_duration;
use crate::report::Report;
use benchsum_stats::DISPLAY_PRECISION;

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    for problem in &report.problems {
        output.push('\n');
        output.push_str(&"-".repeat(62));
        output.push_str("\n\n");

        output.push_str(&format!("Name: {}\n", problem.name));
        output.push_str(&format!("Runs: {}\n\n", problem.runs));

        output.push_str("Costs\n");
        for run in &problem.costs {
            output.push_str(&format!("{} -> {}x\n", format_cost(run.cost), run.count));
        }

        output.push_str(&format!(
            "\nMin time       : {}\n",
            format_duration(problem.timing.min_ms)
        ));
        // The mean is truncated to whole milliseconds before formatting.
        output.push_str(&format!(
            "Average time   : {}\n",
            format_duration(problem.timing.mean_ms as u64)
        ));
        output.push_str(&format!(
            "Max time       : {}\n",
            format_duration(problem.timing.max_ms)
        ));

        output.push_str(&format!(
            "\nAverage costs  : {:.6}\n",
            problem.cost_stats.mean
        ));
        output.push_str(&format!(
            "Std. deviation : {:.6}\n",
            problem.cost_stats.std_dev
        ));
    }

    output
}

/// Near-integer cost values print without decimals, everything else with
/// the fixed six-decimal precision.
fn format_cost(cost: f64) -> String {
    if cost - cost.floor() < DISPLAY_PRECISION {
        format!("{}", cost as i64)
    } else {
        format!("{:.6}", cost)
    }
}
