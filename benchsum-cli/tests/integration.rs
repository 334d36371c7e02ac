//! Integration tests for benchsum
//!
//! These tests verify the end-to-end behavior of the pipeline: parsing
//! log text, aggregating the store, and rendering reports.

use benchsum_cli::{Cli, build_report, run_with_cli};
use benchsum_core::{MeasurementStore, TOTAL_COSTS_PROBLEM};
use benchsum_parser::{ParseError, parse_file, parse_str};
use benchsum_report::format_human_output;
use std::fs;
use std::path::{Path, PathBuf};

/// Log excerpt with three runs of one problem, embedded in prose.
const THREE_RUN_LOG: &str = "\
    Solver started.\n\
    Problem: a; Kosten = 5, Zeit = 200 ms\n\
    Problem: a; Kosten = 5, Zeit = 200 ms\n\
    some diagnostic chatter in between\n\
    Problem: a; Kosten = 7, Zeit = 300 ms\n\
    Solver finished.\n";

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("benchsum-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Three runs of "a" compress to 5 -> 2x, 7 -> 1x with 200/300 ms
/// timing bounds.
#[test]
fn test_three_run_pipeline() {
    let mut store = MeasurementStore::new();
    parse_str(THREE_RUN_LOG, &mut store).unwrap();

    let report = build_report(&store, &[], None);
    assert_eq!(report.problems.len(), 1);

    let problem = &report.problems[0];
    assert_eq!(problem.name, "a");
    assert_eq!(problem.runs, 3);
    assert_eq!(problem.costs.len(), 2);
    assert_eq!((problem.costs[0].cost, problem.costs[0].count), (5.0, 2));
    assert_eq!((problem.costs[1].cost, problem.costs[1].count), (7.0, 1));
    assert_eq!(problem.timing.min_ms, 200);
    assert_eq!(problem.timing.max_ms, 300);

    let output = format_human_output(&report);
    assert!(output.contains("Name: a\n"));
    assert!(output.contains("Runs: 3\n"));
    assert!(output.contains("5 -> 2x\n7 -> 1x\n"));
    assert!(output.contains("Min time       : 200 ms\n"));
    assert!(output.contains("Max time       : 300 ms\n"));
}

/// A grand-total record lands under the reserved problem with the
/// seconds converted to milliseconds.
#[test]
fn test_grand_total_record() {
    let mut store = MeasurementStore::new();
    parse_str("Gesamtkosten = 10.5\nGesamtzeit = 2.0 s\n", &mut store).unwrap();

    let history = store.get(TOTAL_COSTS_PROBLEM).unwrap();
    assert_eq!(history.runs(), 1);
    assert_eq!(history.measurements()[0].cost, 10.5);
    assert_eq!(history.measurements()[0].time_ms, 2000);
}

/// Identical inputs always produce identical reports.
#[test]
fn test_deterministic_aggregation() {
    let render = || {
        let mut store = MeasurementStore::new();
        parse_str(THREE_RUN_LOG, &mut store).unwrap();
        parse_str("Gesamtkosten = 10.5\nGesamtzeit = 2.0 s\n", &mut store).unwrap();
        format_human_output(&build_report(&store, &[], None))
    };

    assert_eq!(render(), render());
}

/// Problems appear in the order the inputs first mentioned them, across
/// file boundaries.
#[test]
fn test_first_seen_order_across_files() {
    let mut store = MeasurementStore::new();
    parse_str("Problem: late; Kosten = 1, Zeit = 10 ms", &mut store).unwrap();
    parse_str(
        "Problem: early; Kosten = 2, Zeit = 20 ms\n\
         Problem: late; Kosten = 3, Zeit = 30 ms",
        &mut store,
    )
    .unwrap();

    let report = build_report(&store, &[], None);
    let names: Vec<&str> = report.problems.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["late", "early"]);
    assert_eq!(report.problems[0].runs, 2);
}

/// A record missing its unit token fails fatally instead of recording a
/// truncated measurement.
#[test]
fn test_missing_unit_token_is_fatal() {
    let mut store = MeasurementStore::new();
    let err = parse_str(
        "Problem: a; Kosten = 5, Zeit = 200\nnext line of prose",
        &mut store,
    )
    .unwrap_err();

    match err {
        ParseError::MalformedRecord { expected, actual } => {
            assert_eq!(expected, "ms");
            assert_eq!(actual, "next");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

/// An unknown path fails before any aggregation runs.
#[test]
fn test_unknown_path_is_fatal() {
    let mut store = MeasurementStore::new();
    let err = parse_file(Path::new("/no/such/dir/run.log"), &mut store).unwrap_err();
    assert!(matches!(err, ParseError::FileNotFound { .. }));
    assert!(store.is_empty());
}

/// Full CLI run: two files, JSON output to a file.
#[test]
fn test_cli_end_to_end() {
    let first = scratch_file("first.log", THREE_RUN_LOG);
    let second = scratch_file(
        "second.log",
        "Problem: b; Kosten = 1.25, Zeit = 75000 ms\n\
         Gesamtkosten = 10.5\n\
         Gesamtzeit = 2.0 s\n",
    );
    let out = scratch_file("report.json", "");

    let cli = Cli {
        files: vec![first, second],
        format: "json".to_string(),
        output: Some(out.clone()),
        filter: None,
        verbose: false,
    };
    run_with_cli(cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let problems = json["problems"].as_array().unwrap();
    assert_eq!(problems.len(), 3);
    assert_eq!(problems[0]["name"], "a");
    assert_eq!(problems[1]["name"], "b");
    assert_eq!(problems[2]["name"], TOTAL_COSTS_PROBLEM);
    assert_eq!(problems[2]["timing"]["min_ms"], 2000);
}

/// CLI with no files prints usage and exits successfully.
#[test]
fn test_cli_without_files_succeeds() {
    let cli = Cli {
        files: Vec::new(),
        format: "human".to_string(),
        output: None,
        filter: None,
        verbose: false,
    };
    assert!(run_with_cli(cli).is_ok());
}

/// CLI propagates a missing input file as an error (exit 1 in the binary).
#[test]
fn test_cli_missing_file_fails() {
    let cli = Cli {
        files: vec![PathBuf::from("/no/such/dir/run.log")],
        format: "human".to_string(),
        output: None,
        filter: None,
        verbose: false,
    };
    assert!(run_with_cli(cli).is_err());
}

/// Durations above a minute render in the clock format in the report.
#[test]
fn test_long_durations_in_human_output() {
    let mut store = MeasurementStore::new();
    parse_str("Problem: slow; Kosten = 1, Zeit = 3661000 ms", &mut store).unwrap();

    let output = format_human_output(&build_report(&store, &[], None));
    assert!(output.contains("Min time       : 01:01:01.00\n"));
}
