//! Error types for the notus-engine crate.

/// Error type for all fallible operations in the notus-engine crate.
///
/// Only input validation surfaces as an error: data problems degrade the
/// affected hazard estimate instead (see [`crate::Confidence`]).
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// Returned when the request latitude is outside [-90, 90].
    #[error("latitude must be within [-90, 90], got {value}")]
    LatitudeOutOfRange {
        /// The invalid latitude.
        value: f64,
    },

    /// Returned when the request longitude is outside [-180, 180].
    #[error("longitude must be within [-180, 180], got {value}")]
    LongitudeOutOfRange {
        /// The invalid longitude.
        value: f64,
    },

    /// Returned when the request asset value is not strictly positive.
    #[error("asset value must be positive, got {value}")]
    NonPositiveAssetValue {
        /// The invalid asset value.
        value: f64,
    },

    /// Returned when a valuation parameter is not usable.
    #[error("invalid valuation parameters: {reason}")]
    InvalidValuation {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_latitude_out_of_range() {
        let e = EngineError::LatitudeOutOfRange { value: 95.0 };
        assert_eq!(e.to_string(), "latitude must be within [-90, 90], got 95");
    }

    #[test]
    fn display_longitude_out_of_range() {
        let e = EngineError::LongitudeOutOfRange { value: -181.5 };
        assert_eq!(
            e.to_string(),
            "longitude must be within [-180, 180], got -181.5"
        );
    }

    #[test]
    fn display_non_positive_asset_value() {
        let e = EngineError::NonPositiveAssetValue { value: 0.0 };
        assert_eq!(e.to_string(), "asset value must be positive, got 0");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<EngineError>();
    }
}
