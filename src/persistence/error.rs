//! Error types for checkpoint persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing or reading checkpoint files.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// I/O error (file creation, disk I/O).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or both checkpoint files are absent at the resolved paths.
    #[error("missing checkpoint file(s): {}", format_paths(.paths))]
    MissingFiles { paths: Vec<PathBuf> },

    /// The stream ended before the declared record count was consumed.
    #[error("{file} ended unexpectedly (read {read} of {expected} records)")]
    Truncated {
        file: String,
        read: u64,
        expected: u64,
    },

    /// Malformed header or record data.
    #[error("format error in {file}: {message}")]
    Format { file: String, message: String },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;
