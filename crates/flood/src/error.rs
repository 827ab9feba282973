//! Error types for notus-flood.

use std::path::PathBuf;

/// Error type for all fallible operations in the notus-flood crate.
#[derive(Debug, thiserror::Error)]
pub enum FloodError {
    /// Returned when the lookup file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O failure while reading the lookup file.
    #[error("io error reading {}: {reason}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when the lookup file is not valid JSON of the expected
    /// shape.
    #[error("invalid flood lookup JSON: {reason}")]
    Json {
        /// Description of the parse failure.
        reason: String,
    },
}
