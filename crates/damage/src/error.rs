//! Error types for the notus-damage crate.

/// Error type for all fallible operations in the notus-damage crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DamageError {
    /// Returned when a building type string does not name a known type.
    #[error("unknown building type '{name}'")]
    UnknownBuildingType {
        /// The unrecognised input string.
        name: String,
    },
}
