//! Error types for glossa operations.
//!
//! Per-file failures (`Parse`) are recovered by the scan and turned into
//! issues. The other variants terminate the operation that raised them.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// A source file could not be read or parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// The configuration file is malformed or holds invalid values.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A persisted translation document is missing or not a valid tree.
    #[error("cannot read translation file {}: {message}", path.display())]
    BaselineRead { path: PathBuf, message: String },

    /// Nothing was found for an operation that needs at least one item.
    #[error("nothing to do: {0}")]
    NoInput(String),

    /// An output document could not be written.
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn baseline(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::BaselineRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Informational errors are reported without failing the process.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::NoInput(_))
    }
}
