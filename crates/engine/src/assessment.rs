//! Aggregated assessment output types.

use serde::Serialize;

use notus_damage::BuildingType;

use crate::estimate::{HazardEstimate, HazardKind};

/// Echo of the assessed coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Echo of the parameters the assessment ran with.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentParameters {
    pub building_type: BuildingType,
    pub time_horizon: u32,
    pub discount_rate: f64,
    pub climate_escalation: f64,
}

/// The five per-hazard estimates.
#[derive(Debug, Clone, Serialize)]
pub struct RiskBreakdown {
    pub hurricane: HazardEstimate,
    pub flood: HazardEstimate,
    pub heat_stress: HazardEstimate,
    pub drought: HazardEstimate,
    pub extreme_precipitation: HazardEstimate,
}

impl RiskBreakdown {
    /// Returns the estimate for one hazard.
    pub fn get(&self, kind: HazardKind) -> &HazardEstimate {
        match kind {
            HazardKind::Hurricane => &self.hurricane,
            HazardKind::Flood => &self.flood,
            HazardKind::HeatStress => &self.heat_stress,
            HazardKind::Drought => &self.drought,
            HazardKind::ExtremePrecipitation => &self.extreme_precipitation,
        }
    }

    /// Sum of the component annual losses.
    pub fn total_annual_loss(&self) -> f64 {
        HazardKind::ALL
            .iter()
            .map(|&k| self.get(k).annual_loss)
            .sum()
    }
}

/// Complete five-hazard assessment with its financial projection.
#[derive(Debug, Clone, Serialize)]
pub struct ComprehensiveAssessment {
    pub asset_value: f64,
    pub expected_annual_loss: f64,
    pub expected_annual_loss_pct: f64,
    pub present_value_30yr: f64,
    pub present_value_30yr_pct: f64,
    pub risk_breakdown: RiskBreakdown,
    pub location: Location,
    pub parameters: AssessmentParameters,
}
