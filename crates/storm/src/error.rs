//! Error types for notus-storm.

use std::path::PathBuf;

/// Error type for all fallible operations in the notus-storm crate.
#[derive(Debug, thiserror::Error)]
pub enum StormError {
    /// Returned when the track archive does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O failure while opening or decompressing the archive.
    #[error("io error reading {}: {reason}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV parser.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when the archive header lacks a required column.
    #[error("missing column '{name}' in track archive header")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },
}

impl From<csv::Error> for StormError {
    fn from(e: csv::Error) -> Self {
        StormError::Csv {
            reason: e.to_string(),
        }
    }
}
