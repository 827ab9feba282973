//! Error types for the notus-spatial crate.

use notus_grid::ClimateIndex;

/// Error type for all fallible operations in the notus-spatial crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpatialError {
    /// Returned when the requested index was never loaded into the store.
    #[error("climate index '{index}' is not available")]
    IndexUnavailable {
        /// The index that was requested.
        index: ClimateIndex,
    },

    /// Returned when all grid tiers failed and the regional baseline table
    /// carries no proxy value for the requested index.
    #[error("no baseline proxy value for climate index '{index}'")]
    NoBaselineProxy {
        /// The index that was requested.
        index: ClimateIndex,
    },
}
