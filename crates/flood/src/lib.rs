//! # notus-flood
//!
//! Query 100-year-return-period flood depths from a pre-computed lookup
//! keyed by 0.5° grid cell. Coordinates quantize to the nearest half
//! degree; a missed exact lookup falls back to the nearest table entry
//! within 2° (Euclidean distance in degrees, matching how the table was
//! built — not great-circle).

mod error;
mod lookup;

pub use error::FloodError;
pub use lookup::{CellKey, FloodLookup, NEAREST_RADIUS_DEG};
