//! The fully-loaded risk engine and its five hazard estimators.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use notus_damage::flood_damage_ratio;
use notus_flood::{FloodError, FloodLookup};
use notus_grid::{ClimateIndex, IndexStore};
use notus_spatial::{Resolution, SpatialError, resolve_index};
use notus_storm::{StormAggregateConfig, TrackArchive, aggregate_track_damage};

use crate::assessment::{
    AssessmentParameters, ComprehensiveAssessment, Location, RiskBreakdown,
};
use crate::chronic::{
    DROUGHT_CALIBRATION, HEAT_CALIBRATION, PRECIPITATION_CALIBRATION, drought_damage_ratio,
    heat_damage_ratio, precipitation_damage_ratio,
};
use crate::discount::{ValuationParams, present_value};
use crate::error::EngineError;
use crate::estimate::{Confidence, HazardEstimate, HazardKind};
use crate::request::AssessmentRequest;

/// Empirical multiplier reconciling modelled hurricane loss to the NOAA
/// historical benchmark (Miami: 1.5 % observed annual loss).
const HURRICANE_CALIBRATION: f64 = 0.22;

/// Annual exceedance probability of the 100-year flood.
const FLOOD_ANNUAL_PROBABILITY: f64 = 0.01;

/// Conservative calibration applied to modelled flood losses.
const FLOOD_CALIBRATION: f64 = 0.8;

/// Chronic estimators average over this many most recent years.
const RECENT_WINDOW_YEARS: usize = 30;

/// At least this many distinct damaging storms upgrades hurricane
/// confidence to High.
const HIGH_CONFIDENCE_STORMS: usize = 5;

/// File locations of the engine's datasets.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory holding the HadEX3 index archives.
    pub hadex3_dir: PathBuf,
    /// Path to the flood depth lookup JSON.
    pub flood_lookup: PathBuf,
    /// Path to the gzipped hurricane track archive.
    pub hurricane_archive: PathBuf,
}

/// Summary of what the engine loaded, for introspection.
#[derive(Debug, Clone, Serialize)]
pub struct EngineInventory {
    /// Short names of the loaded climate indices.
    pub climate_indices: Vec<String>,
    /// Number of flood lookup cells.
    pub flood_cells: usize,
    /// Whether the hurricane track archive is available.
    pub hurricane_archive: bool,
}

/// Immutable risk engine.
///
/// All datasets are loaded eagerly by [`RiskEngine::load`]; a constructed
/// engine is read-only and can be shared freely across concurrent
/// assessments. The hurricane archive is the exception to in-memory
/// loading: it is re-streamed per query, so only its path is held.
#[derive(Debug)]
pub struct RiskEngine {
    indices: IndexStore,
    flood: FloodLookup,
    tracks: Option<TrackArchive>,
    storm_config: StormAggregateConfig,
    valuation: ValuationParams,
}

impl RiskEngine {
    /// Load every dataset and return a ready engine.
    ///
    /// Missing or unreadable datasets degrade the affected hazards to
    /// `No Data` estimates rather than failing the load; the engine always
    /// constructs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidValuation`] if `valuation` is
    /// degenerate.
    pub fn load(config: &EngineConfig, valuation: ValuationParams) -> Result<Self, EngineError> {
        valuation.validate()?;

        let indices = IndexStore::load(&config.hadex3_dir);

        let flood = match FloodLookup::load(&config.flood_lookup) {
            Ok(lookup) => lookup,
            Err(FloodError::FileNotFound { path }) => {
                warn!(path = %path.display(), "flood lookup absent, flood queries will be dry");
                FloodLookup::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load flood lookup, flood queries will be dry");
                FloodLookup::default()
            }
        };

        let archive = TrackArchive::new(&config.hurricane_archive);
        let tracks = if archive.exists() {
            Some(archive)
        } else {
            warn!(
                path = %config.hurricane_archive.display(),
                "hurricane track archive absent, hurricane estimates degrade to No Data"
            );
            None
        };

        info!(
            n_indices = indices.len(),
            n_flood_cells = flood.len(),
            hurricane_archive = tracks.is_some(),
            "risk engine loaded"
        );

        Ok(Self {
            indices,
            flood,
            tracks,
            storm_config: StormAggregateConfig::default(),
            valuation,
        })
    }

    /// Assemble an engine from already-loaded parts. Used by tests and
    /// embedders that manage their own data loading.
    pub fn from_parts(
        indices: IndexStore,
        flood: FloodLookup,
        tracks: Option<TrackArchive>,
        valuation: ValuationParams,
    ) -> Self {
        Self {
            indices,
            flood,
            tracks,
            storm_config: StormAggregateConfig::default(),
            valuation,
        }
    }

    /// Returns the valuation parameters the engine projects with.
    pub fn valuation(&self) -> &ValuationParams {
        &self.valuation
    }

    /// Returns a summary of the loaded datasets.
    pub fn inventory(&self) -> EngineInventory {
        EngineInventory {
            climate_indices: self
                .indices
                .loaded()
                .iter()
                .map(|i| i.as_str().to_string())
                .collect(),
            flood_cells: self.flood.len(),
            hurricane_archive: self.tracks.is_some(),
        }
    }

    /// Run the full five-hazard assessment.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] only for invalid input; data problems
    /// appear as degraded estimates inside the breakdown.
    pub fn assess(&self, request: &AssessmentRequest) -> Result<ComprehensiveAssessment, EngineError> {
        request.validate()?;

        let breakdown = RiskBreakdown {
            hurricane: self.hurricane_risk(request),
            flood: self.flood_risk(request),
            heat_stress: self.heat_stress_risk(request),
            drought: self.drought_risk(request),
            extreme_precipitation: self.extreme_precipitation_risk(request),
        };

        let total_annual_loss = breakdown.total_annual_loss();
        let pv = present_value(total_annual_loss, &self.valuation);

        Ok(ComprehensiveAssessment {
            asset_value: request.asset_value,
            expected_annual_loss: total_annual_loss,
            expected_annual_loss_pct: total_annual_loss / request.asset_value * 100.0,
            present_value_30yr: pv,
            present_value_30yr_pct: pv / request.asset_value * 100.0,
            risk_breakdown: breakdown,
            location: Location {
                latitude: request.latitude,
                longitude: request.longitude,
            },
            parameters: AssessmentParameters {
                building_type: request.building_type,
                time_horizon: self.valuation.horizon_years(),
                discount_rate: self.valuation.discount_rate(),
                climate_escalation: self.valuation.escalation_rate(),
            },
        })
    }

    /// Run a single hazard estimator.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] only for invalid input.
    pub fn assess_hazard(
        &self,
        kind: HazardKind,
        request: &AssessmentRequest,
    ) -> Result<HazardEstimate, EngineError> {
        request.validate()?;
        Ok(match kind {
            HazardKind::Hurricane => self.hurricane_risk(request),
            HazardKind::Flood => self.flood_risk(request),
            HazardKind::HeatStress => self.heat_stress_risk(request),
            HazardKind::Drought => self.drought_risk(request),
            HazardKind::ExtremePrecipitation => self.extreme_precipitation_risk(request),
        })
    }

    // -- Acute hazards -------------------------------------------------------

    fn hurricane_risk(&self, request: &AssessmentRequest) -> HazardEstimate {
        let Some(archive) = &self.tracks else {
            return HazardEstimate::zero(Confidence::NoData, "hurricane track archive not available");
        };

        let summary = match aggregate_track_damage(
            archive,
            request.latitude,
            request.longitude,
            request.building_type,
            &self.storm_config,
        ) {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "hurricane track aggregation failed");
                return HazardEstimate::zero(Confidence::Error, format!("track archive error: {e}"));
            }
        };

        if summary.n_storms == 0 {
            return HazardEstimate::zero(
                Confidence::LowRisk,
                "no damaging hurricanes in historical record",
            );
        }

        let annual_loss = summary.annual_frequency
            * summary.mean_max_damage
            * request.asset_value
            * HURRICANE_CALIBRATION;
        let confidence = if summary.n_storms >= HIGH_CONFIDENCE_STORMS {
            Confidence::High
        } else {
            Confidence::Medium
        };

        HazardEstimate::new(
            annual_loss,
            request.asset_value,
            confidence,
            format!(
                "{} distinct damaging storms in {:.0} years of record",
                summary.n_storms,
                self.storm_config.record_years()
            ),
        )
    }

    fn flood_risk(&self, request: &AssessmentRequest) -> HazardEstimate {
        let depth_m = self.flood.depth(request.latitude, request.longitude);
        if depth_m <= 0.0 {
            return HazardEstimate::zero(
                Confidence::LowRisk,
                "no significant flood risk at this location",
            );
        }

        let damage_ratio = flood_damage_ratio(depth_m, request.building_type);
        let annual_loss =
            FLOOD_ANNUAL_PROBABILITY * damage_ratio * request.asset_value * FLOOD_CALIBRATION;

        HazardEstimate::new(
            annual_loss,
            request.asset_value,
            Confidence::High,
            format!(
                "100-year flood depth: {depth_m:.2}m, damage ratio: {:.1}%",
                damage_ratio * 100.0
            ),
        )
    }

    // -- Chronic hazards -----------------------------------------------------

    fn heat_stress_risk(&self, request: &AssessmentRequest) -> HazardEstimate {
        self.chronic_risk(
            request,
            ClimateIndex::Txx,
            HEAT_CALIBRATION,
            heat_damage_ratio,
            |mean| format!("average annual maximum temperature: {mean:.1}°C"),
        )
    }

    fn drought_risk(&self, request: &AssessmentRequest) -> HazardEstimate {
        self.chronic_risk(
            request,
            ClimateIndex::Cdd,
            DROUGHT_CALIBRATION,
            drought_damage_ratio,
            |mean| format!("average consecutive dry days: {mean:.0}"),
        )
    }

    fn extreme_precipitation_risk(&self, request: &AssessmentRequest) -> HazardEstimate {
        self.chronic_risk(
            request,
            ClimateIndex::Rx5day,
            PRECIPITATION_CALIBRATION,
            precipitation_damage_ratio,
            |mean| format!("average 5-day maximum precipitation: {mean:.0}mm"),
        )
    }

    /// Shared shape of the three chronic estimators: resolve one index,
    /// average its recent window, map through a threshold curve, calibrate.
    fn chronic_risk(
        &self,
        request: &AssessmentRequest,
        index: ClimateIndex,
        calibration: f64,
        damage_fn: fn(f64) -> f64,
        detail_fn: impl Fn(f64) -> String,
    ) -> HazardEstimate {
        let resolution = match resolve_index(
            &self.indices,
            index,
            request.latitude,
            request.longitude,
        ) {
            Ok(resolution) => resolution,
            Err(SpatialError::IndexUnavailable { index }) => {
                return HazardEstimate::zero(
                    Confidence::NoData,
                    format!("climate index '{index}' not loaded"),
                );
            }
            Err(SpatialError::NoBaselineProxy { index }) => {
                return HazardEstimate::zero(
                    Confidence::InsufficientData,
                    format!("no usable data or baseline for climate index '{index}'"),
                );
            }
        };

        let Some(mean) = resolution.recent_mean_value(RECENT_WINDOW_YEARS) else {
            return HazardEstimate::zero(
                Confidence::InsufficientData,
                format!("no valid recent samples for climate index '{index}'"),
            );
        };

        let (confidence, details) = match &resolution {
            Resolution::Series { .. } => (Confidence::Medium, detail_fn(mean)),
            Resolution::Baseline { region, .. } => (
                Confidence::RegionalBaseline,
                format!("{} (regional baseline: {region})", detail_fn(mean)),
            ),
        };

        let annual_loss = damage_fn(mean) * request.asset_value * calibration;
        HazardEstimate::new(annual_loss, request.asset_value, confidence, details)
    }
}
