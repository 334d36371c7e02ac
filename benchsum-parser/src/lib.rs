#![warn(missing_docs)]
//! Benchsum Parser - Record Extraction
//!
//! Reads benchmark log files as whitespace-delimited token streams and
//! extracts the two embedded record shapes:
//!
//! ```text
//! Problem: <name>; Kosten = <cost>, Zeit = <time> ms
//! Gesamtkosten = <cost>
//! Gesamtzeit = <time> s
//! ```
//!
//! Everything between records is free prose and is skipped. Once a record
//! opener is seen, the remaining tokens must match the grammar exactly;
//! any mismatch aborts the run with an error naming the expected and the
//! actual token. There is no partial-result mode: a malformed record could
//! mask measurement corruption, so it is never skipped.

mod error;
mod records;
mod tokens;

pub use error::ParseError;
pub use records::{parse_file, parse_str};
