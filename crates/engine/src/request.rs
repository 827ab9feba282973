//! Assessment request validation.

use serde::Deserialize;

use notus_damage::BuildingType;

use crate::error::EngineError;

/// One risk assessment request.
///
/// Validation happens before any hazard computation runs; an invalid
/// request never reaches the estimators.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    /// Asset latitude (degrees north).
    pub latitude: f64,
    /// Asset longitude (degrees east).
    pub longitude: f64,
    /// Asset replacement value in currency units.
    pub asset_value: f64,
    /// Building construction/occupancy class.
    pub building_type: BuildingType,
}

impl AssessmentRequest {
    /// Construct a request.
    pub fn new(latitude: f64, longitude: f64, asset_value: f64, building_type: BuildingType) -> Self {
        Self {
            latitude,
            longitude,
            asset_value,
            building_type,
        }
    }

    /// Validate coordinate ranges and the asset value.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as an [`EngineError`]. NaN
    /// coordinates fail their range check.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EngineError::LatitudeOutOfRange {
                value: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EngineError::LongitudeOutOfRange {
                value: self.longitude,
            });
        }
        if !(self.asset_value > 0.0) || !self.asset_value.is_finite() {
            return Err(EngineError::NonPositiveAssetValue {
                value: self.asset_value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(lat: f64, lon: f64, value: f64) -> AssessmentRequest {
        AssessmentRequest::new(lat, lon, value, BuildingType::WoodFrame)
    }

    #[test]
    fn valid_request_passes() {
        assert!(request(25.76, -80.19, 1_000_000.0).validate().is_ok());
        assert!(request(-90.0, 180.0, 0.01).validate().is_ok());
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        let err = request(95.0, 0.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, EngineError::LatitudeOutOfRange { value } if value == 95.0));
        assert!(request(-90.1, 0.0, 1.0).validate().is_err());
    }

    #[test]
    fn longitude_out_of_range_rejected() {
        let err = request(0.0, 180.5, 1.0).validate().unwrap_err();
        assert!(matches!(err, EngineError::LongitudeOutOfRange { .. }));
    }

    #[test]
    fn non_positive_asset_value_rejected() {
        assert!(matches!(
            request(0.0, 0.0, 0.0).validate().unwrap_err(),
            EngineError::NonPositiveAssetValue { .. }
        ));
        assert!(request(0.0, 0.0, -100.0).validate().is_err());
        assert!(request(0.0, 0.0, f64::INFINITY).validate().is_err());
        assert!(request(0.0, 0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn nan_coordinates_rejected() {
        assert!(request(f64::NAN, 0.0, 1.0).validate().is_err());
        assert!(request(0.0, f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn deserializes_from_json_request_body() {
        let req: AssessmentRequest = serde_json::from_str(
            r#"{"latitude": 25.76, "longitude": -80.19, "asset_value": 500000, "building_type": "concrete"}"#,
        )
        .unwrap();
        assert_eq!(req.building_type, BuildingType::Concrete);
        assert!(req.validate().is_ok());
    }
}
