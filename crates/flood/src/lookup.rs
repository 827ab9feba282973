//! Flood depth lookup table.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::FloodError;

/// Radius in degrees for the nearest-entry fallback scan.
pub const NEAREST_RADIUS_DEG: f64 = 2.0;

/// A 0.5° grid cell identified by coordinates doubled into integers.
///
/// `(25.5, -80.0)` becomes `(51, -160)`; the integer form makes the cell
/// identity exact and orderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    /// Latitude in half-degree units.
    pub lat_half: i32,
    /// Longitude in half-degree units.
    pub lon_half: i32,
}

impl CellKey {
    /// Quantize a coordinate to its nearest half-degree cell.
    pub fn quantize(lat: f64, lon: f64) -> Self {
        Self {
            lat_half: (lat * 2.0).round() as i32,
            lon_half: (lon * 2.0).round() as i32,
        }
    }

    /// Cell centre latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat_half as f64 / 2.0
    }

    /// Cell centre longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon_half as f64 / 2.0
    }
}

/// Immutable 100-year flood depth table, loaded once at engine startup.
///
/// Cells are kept ordered so the nearest-entry scan resolves distance ties
/// identically on every run.
#[derive(Debug, Default)]
pub struct FloodLookup {
    cells: BTreeMap<CellKey, f64>,
}

impl FloodLookup {
    /// Load the lookup from a JSON object mapping `"lat,lon"` strings to
    /// depths in metres.
    ///
    /// Entries whose key does not parse as two comma-separated floats are
    /// logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FloodError::FileNotFound`] if `path` does not exist,
    /// [`FloodError::Io`] on read failure, or [`FloodError::Json`] if the
    /// file is not a JSON object of numbers.
    pub fn load(path: &Path) -> Result<Self, FloodError> {
        if !path.exists() {
            return Err(FloodError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path).map_err(|e| FloodError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let raw: HashMap<String, f64> =
            serde_json::from_str(&text).map_err(|e| FloodError::Json {
                reason: e.to_string(),
            })?;

        let mut cells = BTreeMap::new();
        let mut skipped = 0usize;
        for (key, depth) in raw {
            match parse_key(&key) {
                Some(cell) => {
                    cells.insert(cell, depth);
                }
                None => {
                    skipped += 1;
                    warn!(key, "unparseable flood lookup key, skipping");
                }
            }
        }

        info!(
            n_cells = cells.len(),
            n_skipped = skipped,
            "flood lookup loaded"
        );
        Ok(Self { cells })
    }

    /// Build a lookup from already-parsed cells. Used by tests.
    pub fn from_cells(cells: BTreeMap<CellKey, f64>) -> Self {
        Self { cells }
    }

    /// Returns the number of table entries.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 100-year flood depth in metres at a coordinate, 0.0 when no entry
    /// applies.
    ///
    /// The coordinate quantizes to its half-degree cell for an exact
    /// lookup. On a miss, a linear scan picks the entry with minimum
    /// Euclidean degree distance within [`NEAREST_RADIUS_DEG`]; the scan is
    /// O(table size) and relies on the table being small.
    pub fn depth(&self, lat: f64, lon: f64) -> f64 {
        let key = CellKey::quantize(lat, lon);
        if let Some(&depth) = self.cells.get(&key) {
            return depth;
        }

        let mut best: Option<(f64, f64)> = None;
        for (cell, &depth) in &self.cells {
            let d_lat = lat - cell.lat();
            let d_lon = lon - cell.lon();
            let dist = (d_lat * d_lat + d_lon * d_lon).sqrt();
            if dist <= NEAREST_RADIUS_DEG {
                match best {
                    Some((best_dist, _)) if best_dist <= dist => {}
                    _ => best = Some((dist, depth)),
                }
            }
        }

        best.map(|(_, depth)| depth).unwrap_or(0.0)
    }
}

/// Parse a `"lat,lon"` key into its half-degree cell.
fn parse_key(key: &str) -> Option<CellKey> {
    let (lat_s, lon_s) = key.split_once(',')?;
    let lat: f64 = lat_s.trim().parse().ok()?;
    let lon: f64 = lon_s.trim().parse().ok()?;
    Some(CellKey::quantize(lat, lon))
}
