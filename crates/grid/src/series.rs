//! In-memory container for one gridded index.

use crate::error::GridError;

/// One loaded gridded annual index.
///
/// Samples are stored flat in `[time, lat, lon]` order with validity already
/// resolved: `None` means the archive held NaN, a fill value, or the −90
/// missing-data sentinel at that position. The grid is immutable once built
/// and safe to share read-only across concurrent queries.
#[derive(Debug, Clone)]
pub struct GriddedIndex {
    /// Grid cell centre latitudes (degrees north).
    lats: Vec<f64>,
    /// Grid cell centre longitudes (degrees east).
    lons: Vec<f64>,
    /// Number of annual time steps.
    n_time: usize,
    /// Flat samples, length `n_time * lats.len() * lons.len()`.
    samples: Vec<Option<f64>>,
}

impl GriddedIndex {
    /// Creates a new `GriddedIndex` after validating the flat sample length
    /// against the declared grid shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if either coordinate axis is
    /// empty, or if `samples.len()` is not
    /// `n_time * lats.len() * lons.len()`.
    pub fn new(
        lats: Vec<f64>,
        lons: Vec<f64>,
        n_time: usize,
        samples: Vec<Option<f64>>,
    ) -> Result<Self, GridError> {
        if lats.is_empty() || lons.is_empty() {
            return Err(GridError::ShapeMismatch {
                reason: "coordinate axes must be non-empty".to_string(),
            });
        }
        let expected = n_time * lats.len() * lons.len();
        if samples.len() != expected {
            return Err(GridError::ShapeMismatch {
                reason: format!(
                    "samples length {} != {}x{}x{}",
                    samples.len(),
                    n_time,
                    lats.len(),
                    lons.len()
                ),
            });
        }
        Ok(Self {
            lats,
            lons,
            n_time,
            samples,
        })
    }

    /// Returns the latitude axis.
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Returns the longitude axis.
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Returns the number of annual time steps.
    pub fn n_time(&self) -> usize {
        self.n_time
    }

    /// Returns the sample at `(t, lat_idx, lon_idx)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn sample(&self, t: usize, lat_idx: usize, lon_idx: usize) -> Option<f64> {
        assert!(t < self.n_time && lat_idx < self.lats.len() && lon_idx < self.lons.len());
        self.samples[(t * self.lats.len() + lat_idx) * self.lons.len() + lon_idx]
    }

    /// Extracts the full time series at one grid cell.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn series_at(&self, lat_idx: usize, lon_idx: usize) -> Vec<Option<f64>> {
        (0..self.n_time)
            .map(|t| self.sample(t, lat_idx, lon_idx))
            .collect()
    }

    /// Fraction of valid samples in the time series at one grid cell.
    ///
    /// Returns 0.0 for a grid with no time steps.
    pub fn valid_fraction_at(&self, lat_idx: usize, lon_idx: usize) -> f64 {
        if self.n_time == 0 {
            return 0.0;
        }
        let n_valid = (0..self.n_time)
            .filter(|&t| self.sample(t, lat_idx, lon_idx).is_some())
            .count();
        n_valid as f64 / self.n_time as f64
    }
}
