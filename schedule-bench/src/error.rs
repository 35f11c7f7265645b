//! Error types.
//!
//! Sorting itself cannot fail; these cover the file handling around it and
//! the benchmark configuration.

use std::io;
use std::path::PathBuf;

use crate::sort::UnknownAlgorithm;

/// Errors reading or writing schedule CSV files.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// Input file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Output file could not be created
    #[error("cannot create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    /// Reading a line failed part way through the input
    #[error("read failed after {records} records: {source}")]
    Read { records: usize, source: io::Error },

    /// Writing to the output failed
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

/// Errors in benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A dataset size was not a positive integer
    #[error("invalid dataset size: {0:?}")]
    InvalidSize(String),

    /// No dataset sizes were given
    #[error("at least one dataset size is required")]
    EmptySizes,

    /// Unknown algorithm name
    #[error(transparent)]
    InvalidAlgorithm(#[from] UnknownAlgorithm),

    /// Unknown report format
    #[error("invalid report format: {0:?} (expected \"text\" or \"json\")")]
    InvalidFormat(String),
}
