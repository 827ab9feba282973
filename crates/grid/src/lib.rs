//! # notus-grid
//!
//! Load HadEX3-style gridded annual climate-extremes indices from NetCDF
//! files into immutable in-memory grids. Sample validity (fill values, NaN,
//! the −90 missing-data sentinel) is decided once at ingestion; consumers
//! see plain `Option<f64>` samples and never re-check sentinels.

mod error;
mod index;
mod netcdf_read;
mod series;
mod store;

pub use error::GridError;
pub use index::ClimateIndex;
pub use series::GriddedIndex;
pub use store::IndexStore;

/// Values at or below this sentinel are treated as missing at ingestion.
pub const MISSING_SENTINEL: f64 = -90.0;
