use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpectrumError {
    /// Malformed input file. Fatal at startup: no partial store is
    /// ever exposed to downstream consumers.
    #[error("data format error in {path} (line {line}): {message}")]
    DataFormat {
        path: PathBuf,
        line: usize,
        message: String,
    },
    /// Out-of-domain selection received at the adapter boundary.
    /// Recoverable: the previous state and payload are retained.
    #[error("selection error: {0}")]
    Selection(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpectrumError>;
