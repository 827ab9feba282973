//! # notus-spatial
//!
//! Resolve a gridded climate index at an arbitrary coordinate through a
//! three-tier fallback cascade:
//!
//! 1. **Nearest grid cell** — accepted when at least half its samples are
//!    valid.
//! 2. **8-neighbor interpolation** — inverse-distance-weighted average over
//!    adjacent cells that are themselves at least half valid, requiring at
//!    least three qualifying neighbors.
//! 3. **Regional baseline** — a fixed ordered table of named climate regions
//!    supplying a single scalar proxy value, with a terminal global default.
//!
//! Each tier runs only when the previous one fails, so interpolated data is
//! always preferred over a baseline even when both are available.

mod distance;
mod error;
mod region;
mod resolve;
mod result;

pub use distance::haversine_km;
pub use error::SpatialError;
pub use region::{GLOBAL_DEFAULT, REGIONS, RegionalBaseline, baseline_for};
pub use resolve::{MIN_VALID_FRACTION, MIN_VALID_NEIGHBORS, resolve_index};
pub use result::{Resolution, ResolveMethod, recent_mean};
