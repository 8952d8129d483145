//! Error taxonomy.
//!
//! Every input problem is fatal: the binary reports the error and exits
//! before any scheduling output is written.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, SchedError>;

#[derive(Debug, Error)]
pub enum SchedError {
    /// Wrong number of command-line arguments.
    #[error("invalid args: {0}")]
    InvalidArgs(String),

    #[error("error opening scheduling file '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: field '{field}' is not an integer: '{value}'")]
    IntegerParse {
        row: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Row does not have 3 or 4 fields.
    #[error("row {row}: expected 3 or 4 fields (id,burst,arrival[,priority]), found {fields}")]
    Format { row: usize, fields: usize },

    #[error("invalid process batch: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("invalid value '{value}' for {var}: {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Report output failed.
    #[error("writing report: {0}")]
    Io(#[from] io::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
