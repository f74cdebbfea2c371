//! Error types for the program viewer.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while loading and driving a program view.
#[derive(Debug, Error)]
pub enum AppError {
    /// A file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file did not contain the expected JSON document
    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An `--open` path segment was not a 1-based index
    #[error("Invalid section path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// An `--open` path pointed at a section that does not exist
    #[error("No section {index} at depth {depth} of path '{path}'")]
    SectionNotFound {
        path: String,
        depth: usize,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
