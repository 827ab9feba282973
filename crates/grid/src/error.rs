//! Error types for notus-grid.

use std::path::PathBuf;

/// Error type for all fallible operations in the notus-grid crate.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a coordinate variable is not present in a file.
    #[error("coordinate variable '{name}' not found in {}", path.display())]
    MissingCoordinate {
        /// Name of the missing coordinate variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a file has no 3-D data variable besides its coordinates.
    #[error("no 3-D data variable found in {}", path.display())]
    NoDataVariable {
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when array shapes are inconsistent with the declared grid.
    #[error("shape mismatch: {reason}")]
    ShapeMismatch {
        /// Description of the inconsistency.
        reason: String,
    },
}

impl From<netcdf::Error> for GridError {
    fn from(e: netcdf::Error) -> Self {
        GridError::Netcdf {
            reason: e.to_string(),
        }
    }
}
