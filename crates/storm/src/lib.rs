//! # notus-storm
//!
//! Stream the IBTrACS-style hurricane track archive and reduce it to
//! per-storm damage statistics for one query location.
//!
//! The archive can be large relative to memory, so it is never loaded
//! whole: every query re-streams the gzipped CSV record by record and keeps
//! only one running maximum per storm identifier. A storm's many 6-hourly
//! track points therefore collapse into a single loss-causing event.

mod aggregate;
mod error;
mod track;

pub use aggregate::{StormAggregateConfig, StormDamageSummary, aggregate_track_damage};
pub use error::StormError;
pub use track::{TrackArchive, TrackObservation};
