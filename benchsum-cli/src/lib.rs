#![warn(missing_docs)]
//! Benchsum CLI Library
//!
//! Drives the pipeline: parse each input file in argument order into the
//! shared measurement store, then aggregate and render a report in the
//! selected output format. Any parse or I/O failure aborts the whole run;
//! there is no partial-result mode.

mod report;

pub use report::build_report;

use benchsum_core::MeasurementStore;
use benchsum_parser::parse_file;
use benchsum_report::{OutputFormat, format_human_output, generate_json_report};
use clap::Parser;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Benchsum CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchsum")]
#[command(author, version, about = "benchsum - benchmark log summarizer")]
pub struct Cli {
    /// Input log files, processed in argument order
    pub files: Vec<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only report problems whose name matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the benchsum CLI. This is the entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the benchsum CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // Zero inputs is not an error: print the syntax line and leave.
    if cli.files.is_empty() {
        eprintln!("Usage: benchsum <file1> [file2 ...]");
        return Ok(());
    }

    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let filter = match &cli.filter {
        Some(pattern) => Some(Regex::new(pattern)?),
        None => None,
    };

    // Files are parsed strictly sequentially; the first failure aborts the
    // run before any aggregation happens.
    let mut store = MeasurementStore::new();
    for path in &cli.files {
        eprint!("parsing {}...", path.display());
        parse_file(path, &mut store)?;
        eprintln!("done");
    }

    let report = build_report(&store, &cli.files, filter.as_ref());

    let rendered = match format {
        OutputFormat::Human => format_human_output(&report),
        OutputFormat::Json => generate_json_report(&report)?,
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered.as_bytes())?,
        None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

/// Initialize tracing output on stderr, keeping stdout for the report.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "benchsum_parser=debug,benchsum_cli=debug"
    } else {
        "info"
    };
    // try_init: repeated calls (library use, tests) keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
