//! Parse Errors
//!
//! Every variant is fatal: the driver aborts the whole run on the first
//! error and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting records from a log file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file could not be opened or read.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A token inside a record did not match the grammar.
    #[error("expected token \"{expected}\", read token \"{actual}\"")]
    MalformedRecord {
        /// The literal the grammar requires at this position.
        expected: String,
        /// The token actually read.
        actual: String,
    },

    /// The input ended in the middle of a record.
    #[error("unexpected end of input, expected {expected}")]
    TruncatedRecord {
        /// Description of the missing token.
        expected: String,
    },

    /// A numeric field did not parse.
    #[error("invalid {expected}: \"{token}\"")]
    InvalidNumber {
        /// The token that failed to parse.
        token: String,
        /// Description of the expected value.
        expected: &'static str,
    },

    /// The problem name token did not carry the trailing `;` delimiter.
    #[error("problem name \"{token}\" is missing the trailing ';'")]
    MissingNameDelimiter {
        /// The offending name token.
        token: String,
    },

    /// The problem name was empty after stripping the delimiter.
    #[error("problem record has an empty name")]
    EmptyProblemName,
}
