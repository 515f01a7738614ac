//! Error types for loading data and drawing suggestions.
//!
//! None of these are fatal to the tool. Load errors are reported and the
//! caller continues with whatever was read; an empty pool is reported inside
//! the suggestion flow.

use std::path::PathBuf;

use thiserror::Error;

/// Reading the reference table or the used-name log failed.
///
/// Messages leave the path out; callers print it alongside the error.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file could not be opened or read.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed. `line` is 1-based when known.
    #[error("malformed row{}: {source}", line_suffix(*.line))]
    Row {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// Appending an entry to the log file failed.
    #[error("{source}")]
    Append {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Every record in the reference table is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No available names left: every name in the reference table is taken.")]
pub struct EmptyPoolError;

fn line_suffix(line: Option<u64>) -> String {
    line.map(|line| format!(" at line {line}"))
        .unwrap_or_default()
}
