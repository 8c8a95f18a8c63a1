//! Error types for mzml-rename.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.
//! Missing sources and existing targets are not errors; they are reported
//! per row as a [`RenameOutcome`](crate::fs::RenameOutcome).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a rename run.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Manifest could not be opened.
    #[error("Cannot read manifest '{}': {source}", .path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest row has fewer than the three required fields.
    #[error("Malformed manifest row at line {line}: expected at least 3 fields, found {found}")]
    MalformedRow { line: u64, found: usize },

    /// Rename failed for a reason other than a missing source or existing target.
    #[error("Failed to rename {} → {}: {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid file extension.
    #[error("Invalid extension '{0}': {1}")]
    InvalidExtension(String, String),

    /// Delimiter cannot be used to split manifest rows.
    #[error("Invalid delimiter {0:?}: must be a single ASCII character other than a quote or newline")]
    InvalidDelimiter(char),

    /// Data directory does not exist.
    #[error("Data directory not found: {}", .0.display())]
    DataDirNotFound(PathBuf),

    /// CSV decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mzml-rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;
