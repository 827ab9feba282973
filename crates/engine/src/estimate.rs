//! Per-hazard estimate types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Confidence tag carried by every hazard estimate.
///
/// Doubles as the estimator's success/degraded/failed marker: the data
/// tiers map to `High`/`Medium`/`RegionalBaseline`, while the degraded
/// outcomes (`InsufficientData`, `NoData`, `Error`) always accompany a
/// zero-loss estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Regional Baseline")]
    RegionalBaseline,
    #[serde(rename = "Insufficient Data")]
    InsufficientData,
    #[serde(rename = "No Data")]
    NoData,
    Error,
}

impl Confidence {
    /// Returns the human-readable tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::LowRisk => "Low Risk",
            Confidence::RegionalBaseline => "Regional Baseline",
            Confidence::InsufficientData => "Insufficient Data",
            Confidence::NoData => "No Data",
            Confidence::Error => "Error",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one hazard estimator.
#[derive(Debug, Clone, Serialize)]
pub struct HazardEstimate {
    /// Expected annual loss in currency units.
    pub annual_loss: f64,
    /// Expected annual loss as a percentage of asset value.
    pub annual_loss_pct: f64,
    /// Confidence tag for this estimate.
    pub confidence: Confidence,
    /// Human-readable summary of what drove the estimate.
    pub details: String,
}

impl HazardEstimate {
    /// Build an estimate, deriving the loss percentage from `asset_value`.
    pub fn new(
        annual_loss: f64,
        asset_value: f64,
        confidence: Confidence,
        details: impl Into<String>,
    ) -> Self {
        Self {
            annual_loss,
            annual_loss_pct: annual_loss / asset_value * 100.0,
            confidence,
            details: details.into(),
        }
    }

    /// Build a zero-loss estimate for degraded or low-risk outcomes.
    pub fn zero(confidence: Confidence, details: impl Into<String>) -> Self {
        Self {
            annual_loss: 0.0,
            annual_loss_pct: 0.0,
            confidence,
            details: details.into(),
        }
    }
}

/// The five modelled hazards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Hurricane,
    Flood,
    HeatStress,
    Drought,
    ExtremePrecipitation,
}

impl HazardKind {
    /// All hazards, in breakdown order.
    pub const ALL: [HazardKind; 5] = [
        HazardKind::Hurricane,
        HazardKind::Flood,
        HazardKind::HeatStress,
        HazardKind::Drought,
        HazardKind::ExtremePrecipitation,
    ];

    /// Returns the snake_case name used in the risk breakdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardKind::Hurricane => "hurricane",
            HazardKind::Flood => "flood",
            HazardKind::HeatStress => "heat_stress",
            HazardKind::Drought => "drought",
            HazardKind::ExtremePrecipitation => "extreme_precipitation",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HazardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hurricane" => Ok(HazardKind::Hurricane),
            "flood" => Ok(HazardKind::Flood),
            "heat_stress" | "heat" => Ok(HazardKind::HeatStress),
            "drought" => Ok(HazardKind::Drought),
            "extreme_precipitation" | "precipitation" => Ok(HazardKind::ExtremePrecipitation),
            _ => Err(format!("unknown hazard '{s}'")),
        }
    }
}
