//! Three-tier index resolution.

use tracing::debug;

use notus_grid::{ClimateIndex, GriddedIndex, IndexStore};

use crate::distance::haversine_km;
use crate::error::SpatialError;
use crate::region::baseline_for;
use crate::result::{Resolution, ResolveMethod};

/// A cell's time series qualifies when at least this fraction of its
/// samples is valid.
pub const MIN_VALID_FRACTION: f64 = 0.5;

/// Interpolation proceeds only with at least this many qualifying
/// neighbors.
pub const MIN_VALID_NEIGHBORS: usize = 3;

/// Resolve `index` at `(lat, lon)` through the three-tier cascade.
///
/// # Errors
///
/// Returns [`SpatialError::IndexUnavailable`] when the store never loaded
/// the index, and [`SpatialError::NoBaselineProxy`] when the grid tiers
/// fail and the baseline table has no proxy for the index.
pub fn resolve_index(
    store: &IndexStore,
    index: ClimateIndex,
    lat: f64,
    lon: f64,
) -> Result<Resolution, SpatialError> {
    let grid = store
        .get(index)
        .ok_or(SpatialError::IndexUnavailable { index })?;

    let lat_idx = nearest_index(grid.lats(), lat);
    let lon_idx = nearest_index(grid.lons(), lon);

    // Tier 1: the nearest cell itself.
    if grid.valid_fraction_at(lat_idx, lon_idx) >= MIN_VALID_FRACTION {
        debug!(%index, lat_idx, lon_idx, "resolved from nearest grid cell");
        return Ok(Resolution::Series {
            values: grid.series_at(lat_idx, lon_idx),
            method: ResolveMethod::Direct,
        });
    }

    // Tier 2: inverse-distance interpolation over the 8 adjacent cells.
    if let Some(values) = interpolate_neighbors(grid, lat, lon, lat_idx, lon_idx) {
        debug!(%index, lat_idx, lon_idx, "resolved by 8-neighbor interpolation");
        return Ok(Resolution::Series {
            values,
            method: ResolveMethod::Interpolated,
        });
    }

    // Tier 3: regional baseline.
    let region = baseline_for(lat, lon);
    let value = region
        .proxy_value(index)
        .ok_or(SpatialError::NoBaselineProxy { index })?;
    debug!(%index, region = region.name, "resolved from regional baseline");
    Ok(Resolution::Baseline {
        value,
        region: region.name,
    })
}

/// Index of the axis entry with minimum absolute difference to `target`.
/// Ties resolve to the first index in iteration order.
fn nearest_index(axis: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_diff = f64::INFINITY;
    for (i, &v) in axis.iter().enumerate() {
        let diff = (v - target).abs();
        if diff < best_diff {
            best = i;
            best_diff = diff;
        }
    }
    best
}

/// Distance-weighted average over qualifying adjacent cells, per time index.
///
/// Returns `None` when fewer than [`MIN_VALID_NEIGHBORS`] adjacent cells
/// are at least half valid. Time indices where no qualifying neighbor has a
/// valid sample remain missing in the output.
fn interpolate_neighbors(
    grid: &GriddedIndex,
    lat: f64,
    lon: f64,
    lat_idx: usize,
    lon_idx: usize,
) -> Option<Vec<Option<f64>>> {
    let mut neighbors: Vec<(usize, usize, f64)> = Vec::with_capacity(8);

    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            if dy == 0 && dx == 0 {
                continue;
            }
            let y = lat_idx as i64 + dy;
            let x = lon_idx as i64 + dx;
            if y < 0 || x < 0 || y >= grid.lats().len() as i64 || x >= grid.lons().len() as i64 {
                continue;
            }
            let (y, x) = (y as usize, x as usize);
            if grid.valid_fraction_at(y, x) < MIN_VALID_FRACTION {
                continue;
            }
            let d = haversine_km(lat, lon, grid.lats()[y], grid.lons()[x]);
            neighbors.push((y, x, 1.0 / (d + 1.0)));
        }
    }

    if neighbors.len() < MIN_VALID_NEIGHBORS {
        return None;
    }

    let values = (0..grid.n_time())
        .map(|t| {
            let mut weighted_sum = 0.0;
            let mut weight_total = 0.0;
            for &(y, x, w) in &neighbors {
                if let Some(v) = grid.sample(t, y, x) {
                    weighted_sum += w * v;
                    weight_total += w;
                }
            }
            if weight_total > 0.0 {
                Some(weighted_sum / weight_total)
            } else {
                None
            }
        })
        .collect();

    Some(values)
}
