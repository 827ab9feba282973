//! Loading and holding the full set of gridded indices.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::MISSING_SENTINEL;
use crate::error::GridError;
use crate::index::ClimateIndex;
use crate::netcdf_read;
use crate::series::GriddedIndex;

/// Aliases tried when looking up the latitude axis.
const LAT_ALIASES: &[&str] = &["latitude", "lat", "y"];
/// Aliases tried when looking up the longitude axis.
const LON_ALIASES: &[&str] = &["longitude", "lon", "x"];

/// Immutable collection of loaded gridded indices.
///
/// Built once at engine startup. Indices whose archive file is missing or
/// unreadable are simply absent; consumers degrade per-hazard rather than
/// failing the whole load.
#[derive(Debug, Default)]
pub struct IndexStore {
    indices: BTreeMap<ClimateIndex, GriddedIndex>,
}

impl IndexStore {
    /// Load every known index from `dir`, tolerating missing or unreadable
    /// files.
    ///
    /// A missing directory yields an empty store. Per-file failures are
    /// logged at warn level and skipped.
    pub fn load(dir: &Path) -> Self {
        let mut indices = BTreeMap::new();

        if !dir.is_dir() {
            warn!(dir = %dir.display(), "climate index directory not found, store will be empty");
            return Self { indices };
        }

        for index in ClimateIndex::ALL {
            let path = dir.join(index.file_name());
            match load_index_file(&path) {
                Ok(grid) => {
                    debug!(
                        index = %index,
                        n_lat = grid.lats().len(),
                        n_lon = grid.lons().len(),
                        n_time = grid.n_time(),
                        "loaded gridded index"
                    );
                    indices.insert(index, grid);
                }
                Err(GridError::FileNotFound { .. }) => {
                    debug!(index = %index, path = %path.display(), "index file absent, skipping");
                }
                Err(e) => {
                    warn!(index = %index, path = %path.display(), error = %e, "failed to load index, skipping");
                }
            }
        }

        info!(n_indices = indices.len(), "gridded index store loaded");
        Self { indices }
    }

    /// Build a store from pre-constructed grids. Used by tests and callers
    /// that assemble grids without touching the filesystem.
    pub fn from_indices(indices: BTreeMap<ClimateIndex, GriddedIndex>) -> Self {
        Self { indices }
    }

    /// Returns the grid for `index`, if loaded.
    pub fn get(&self, index: ClimateIndex) -> Option<&GriddedIndex> {
        self.indices.get(&index)
    }

    /// Returns the number of loaded indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no index was loaded.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Names of the loaded indices, in load order.
    pub fn loaded(&self) -> Vec<ClimateIndex> {
        self.indices.keys().copied().collect()
    }
}

/// Read one index file into a [`GriddedIndex`], resolving sample validity.
fn load_index_file(path: &Path) -> Result<GriddedIndex, GridError> {
    let file = netcdf_read::open_file(path)?;

    let lats = netcdf_read::read_coordinate(&file, LAT_ALIASES, path)?;
    let lons = netcdf_read::read_coordinate(&file, LON_ALIASES, path)?;

    let var_name = netcdf_read::find_data_variable_name(&file, path)?;
    let (raw, [nt, ny, nx]) = netcdf_read::read_3d_f64(&file, &var_name, path)?;

    if ny != lats.len() || nx != lons.len() {
        return Err(GridError::ShapeMismatch {
            reason: format!(
                "variable '{var_name}' grid {ny}x{nx} does not match axes {}x{}",
                lats.len(),
                lons.len()
            ),
        });
    }

    let fill_value = netcdf_read::read_fill_value(&file, &var_name);
    let samples = raw
        .into_iter()
        .map(|v| ingest_sample(v, fill_value))
        .collect();

    GriddedIndex::new(lats, lons, nt, samples)
}

/// Resolve one raw archive value to a validated sample.
///
/// A sample is valid iff it is finite, is not the variable's fill value, and
/// lies above the missing-data sentinel.
fn ingest_sample(value: f64, fill_value: Option<f64>) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    if let Some(fv) = fill_value
        && value == fv
    {
        return None;
    }
    if value <= MISSING_SENTINEL {
        return None;
    }
    Some(value)
}
