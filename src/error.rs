//! Error types for loading seed data

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a seed file
#[derive(Error, Debug)]
pub enum SeedError {
    /// The file could not be read
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid seed TOML
    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}
