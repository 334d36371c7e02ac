//! Record Grammar
//!
//! Scans the token stream for the two record openers (`Problem:` and
//! `Gesamtkosten`) and parses the fixed token sequence that must follow
//! each. Unmatched tokens are prose noise and are ignored.

use crate::error::ParseError;
use crate::tokens::Tokens;
use benchsum_core::{Measurement, MeasurementStore, TOTAL_COSTS_PROBLEM};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse one log file into the store.
///
/// Fatal on an unreadable file or on the first grammar violation; the
/// store may already contain records from earlier files, which the caller
/// discards by aborting the run.
pub fn parse_file(path: &Path, store: &mut MeasurementStore) -> Result<(), ParseError> {
    let input = fs::read_to_string(path).map_err(|source| ParseError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&input, store)
}

/// Parse log text into the store.
pub fn parse_str(input: &str, store: &mut MeasurementStore) -> Result<(), ParseError> {
    let mut tokens = Tokens::new(input);
    while let Some(token) = tokens.next() {
        match token {
            "Problem:" => parse_problem_record(&mut tokens, store)?,
            "Gesamtkosten" => parse_total_record(&mut tokens, store)?,
            _ => {}
        }
    }
    Ok(())
}

/// `Problem: <name>; Kosten = <cost>, Zeit = <time> ms`
fn parse_problem_record(
    tokens: &mut Tokens<'_>,
    store: &mut MeasurementStore,
) -> Result<(), ParseError> {
    let raw = tokens.next_required("problem name")?;

    // The name token must carry a trailing semicolon; an undelimited or
    // empty name is rejected rather than silently corrupted.
    let name = raw
        .strip_suffix(';')
        .ok_or_else(|| ParseError::MissingNameDelimiter {
            token: raw.to_string(),
        })?;
    if name.is_empty() {
        return Err(ParseError::EmptyProblemName);
    }

    tokens.expect("Kosten")?;
    tokens.expect("=")?;
    let cost = tokens.float("cost value")?;
    tokens.expect(",")?;
    tokens.expect("Zeit")?;
    tokens.expect("=")?;
    let time_ms = tokens.int("time in milliseconds")?;
    tokens.expect("ms")?;

    debug!(problem = name, cost, time_ms, "recorded measurement");
    store.record(name, Measurement { cost, time_ms });
    Ok(())
}

/// `Gesamtkosten = <cost>` followed by `Gesamtzeit = <time> s`
fn parse_total_record(
    tokens: &mut Tokens<'_>,
    store: &mut MeasurementStore,
) -> Result<(), ParseError> {
    tokens.expect("=")?;
    let cost = tokens.float("total cost value")?;
    tokens.expect("Gesamtzeit")?;
    tokens.expect("=")?;
    let total_secs = tokens.float("total time in seconds")?;
    tokens.expect("s")?;

    // Sub-millisecond precision is dropped, truncating toward zero.
    let time_ms = (total_secs * 1000.0) as u64;

    debug!(cost, time_ms, "recorded grand total");
    store.record(TOTAL_COSTS_PROBLEM, Measurement { cost, time_ms });
    Ok(())
}
