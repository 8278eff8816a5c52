//! Error types for snippet resolution and document assembly.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced by the regeneration core.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// One or more requested snippets were not found in any tier. The
    /// output file has already been written when this is returned.
    #[error("Regenerated, but the following snippets were not found: {}", .missing.join(", "))]
    Incomplete {
        /// Missing snippet names in request order.
        missing: Vec<String>,
    },

    /// A file could not be read.
    #[error("failed to read {}: {message}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {message}", .path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The output file could not be deleted during a revert.
    #[error("failed to remove {}: {message}", .path.display())]
    Remove {
        /// File that failed.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// A snippet file is not valid UTF-8.
    #[error("snippet {} is not valid UTF-8", .path.display())]
    Encoding {
        /// Offending snippet file.
        path: PathBuf,
    },
}

impl WeaveError {
    pub(crate) fn read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn remove(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Remove {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result alias for the regeneration core.
pub type Result<T> = std::result::Result<T, WeaveError>;
