//! # notus-engine
//!
//! Combine the geospatial data layer, the streaming storm aggregator, and
//! the calibrated damage curves into financial risk estimates.
//!
//! The [`RiskEngine`] is constructed fully loaded: every dataset is read
//! before the engine is handed to a caller, so queries never race an
//! initialisation step. A comprehensive assessment runs five independent
//! hazard estimators (hurricane, flood, heat stress, drought, extreme
//! precipitation); a failed or data-starved estimator degrades to a
//! structured zero-loss estimate instead of aborting the others, so every
//! assessment completes with a full breakdown.

mod assessment;
mod chronic;
mod discount;
mod engine;
mod error;
mod estimate;
mod request;

pub use assessment::{
    AssessmentParameters, ComprehensiveAssessment, Location, RiskBreakdown,
};
pub use discount::{ValuationParams, present_value};
pub use engine::{EngineConfig, EngineInventory, RiskEngine};
pub use error::EngineError;
pub use estimate::{Confidence, HazardEstimate, HazardKind};
pub use request::AssessmentRequest;
