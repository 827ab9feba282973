//! Integration tests for loading HadEX3-style archives into an `IndexStore`.
//!
//! Builds minimal NetCDF fixtures on disk and validates sentinel masking,
//! fill-value masking, and tolerant per-file skipping.

use std::path::Path;

use tempfile::tempdir;
use notus_grid::{ClimateIndex, IndexStore};

/// Configuration for building a minimal HadEX3-style NetCDF fixture.
struct FixtureBuilder {
    nx: usize,
    ny: usize,
    nt: usize,
    lons: Vec<f64>,
    lats: Vec<f64>,
    /// Flat index data in `[time, lat, lon]` order (length = nt * ny * nx).
    data: Vec<f64>,
    /// Name of the data variable inside the file.
    var_name: String,
    /// Optional `_FillValue` for the data variable.
    fill_value: Option<f64>,
}

impl FixtureBuilder {
    /// Create a new builder with all-valid data.
    fn new(nx: usize, ny: usize, nt: usize) -> Self {
        let lons: Vec<f64> = (0..nx).map(|i| -80.0 + i as f64 * 2.5).collect();
        let lats: Vec<f64> = (0..ny).map(|i| 20.0 + i as f64 * 2.5).collect();
        let data: Vec<f64> = (0..nt * nx * ny).map(|i| 25.0 + (i % 10) as f64).collect();

        Self {
            nx,
            ny,
            nt,
            lons,
            lats,
            data,
            var_name: "TXx".to_string(),
            fill_value: None,
        }
    }

    /// Replace the data array entirely.
    fn with_data(mut self, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), self.nt * self.nx * self.ny);
        self.data = data;
        self
    }

    /// Set a single sample at `(t, lat_idx, lon_idx)`.
    fn with_sample(mut self, t: usize, lat_idx: usize, lon_idx: usize, value: f64) -> Self {
        self.data[(t * self.ny + lat_idx) * self.nx + lon_idx] = value;
        self
    }

    /// Set a `_FillValue` attribute on the data variable.
    fn with_fill_value(mut self, fv: f64) -> Self {
        self.fill_value = Some(fv);
        self
    }

    /// Write the fixture to `dir` under the given file name.
    fn write(&self, dir: &Path, file_name: &str) -> std::path::PathBuf {
        let path = dir.join(file_name);
        let mut file = netcdf::create(&path).expect("failed to create NetCDF file");

        file.add_dimension("time", self.nt).expect("add dim time");
        file.add_dimension("latitude", self.ny).expect("add dim latitude");
        file.add_dimension("longitude", self.nx)
            .expect("add dim longitude");

        {
            let mut var = file
                .add_variable::<f64>("latitude", &["latitude"])
                .expect("add var latitude");
            var.put_values(&self.lats, ..).expect("put latitude values");
        }
        {
            let mut var = file
                .add_variable::<f64>("longitude", &["longitude"])
                .expect("add var longitude");
            var.put_values(&self.lons, ..).expect("put longitude values");
        }
        {
            let time_vals: Vec<f64> = (0..self.nt).map(|t| t as f64).collect();
            let mut var = file
                .add_variable::<f64>("time", &["time"])
                .expect("add var time");
            var.put_values(&time_vals, ..).expect("put time values");
        }
        {
            let mut var = file
                .add_variable::<f64>(&self.var_name, &["time", "latitude", "longitude"])
                .expect("add data variable");
            if let Some(fv) = self.fill_value {
                var.put_attribute("_FillValue", fv).expect("add _FillValue");
            }
            var.put_values(&self.data, ..).expect("put data values");
        }

        path
    }
}

#[test]
fn loads_single_index_with_correct_shape() {
    let dir = tempdir().unwrap();
    FixtureBuilder::new(3, 2, 5).write(dir.path(), ClimateIndex::Txx.file_name());

    let store = IndexStore::load(dir.path());
    assert_eq!(store.len(), 1);

    let grid = store.get(ClimateIndex::Txx).expect("txx should be loaded");
    assert_eq!(grid.lats().len(), 2);
    assert_eq!(grid.lons().len(), 3);
    assert_eq!(grid.n_time(), 5);
    assert_eq!(grid.valid_fraction_at(0, 0), 1.0);
}

#[test]
fn sentinel_values_become_missing_samples() {
    let dir = tempdir().unwrap();
    FixtureBuilder::new(2, 2, 3)
        .with_sample(0, 0, 0, -99.9)
        .with_sample(1, 0, 0, -90.0)
        .with_sample(2, 0, 0, 31.5)
        .write(dir.path(), ClimateIndex::Txx.file_name());

    let store = IndexStore::load(dir.path());
    let grid = store.get(ClimateIndex::Txx).unwrap();

    assert_eq!(grid.series_at(0, 0), vec![None, None, Some(31.5)]);
    assert_eq!(grid.valid_fraction_at(0, 0), 1.0 / 3.0);
}

#[test]
fn fill_values_become_missing_samples() {
    let dir = tempdir().unwrap();
    FixtureBuilder::new(2, 1, 2)
        .with_fill_value(1.0e20)
        .with_sample(0, 0, 1, 1.0e20)
        .write(dir.path(), ClimateIndex::Cdd.file_name());

    let store = IndexStore::load(dir.path());
    let grid = store.get(ClimateIndex::Cdd).unwrap();

    assert_eq!(grid.sample(0, 0, 1), None);
    assert!(grid.sample(0, 0, 0).is_some());
}

#[test]
fn multiple_indices_load_independently() {
    let dir = tempdir().unwrap();
    FixtureBuilder::new(2, 2, 4).write(dir.path(), ClimateIndex::Txx.file_name());
    FixtureBuilder::new(3, 3, 6).write(dir.path(), ClimateIndex::Rx5day.file_name());

    let store = IndexStore::load(dir.path());
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(ClimateIndex::Txx).unwrap().n_time(), 4);
    assert_eq!(store.get(ClimateIndex::Rx5day).unwrap().n_time(), 6);
    assert!(store.get(ClimateIndex::Cdd).is_none());
}

#[test]
fn corrupt_file_is_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    FixtureBuilder::new(2, 2, 2).write(dir.path(), ClimateIndex::Txx.file_name());
    // A plain-text file where an archive is expected.
    std::fs::write(dir.path().join(ClimateIndex::Cdd.file_name()), b"not netcdf").unwrap();

    let store = IndexStore::load(dir.path());
    assert_eq!(store.len(), 1);
    assert!(store.get(ClimateIndex::Txx).is_some());
    assert!(store.get(ClimateIndex::Cdd).is_none());
}

#[test]
fn all_missing_grid_still_loads_with_zero_valid_fraction() {
    let dir = tempdir().unwrap();
    let n = 2 * 2 * 3;
    FixtureBuilder::new(2, 2, 3)
        .with_data(vec![-99.9; n])
        .write(dir.path(), ClimateIndex::Txx.file_name());

    let store = IndexStore::load(dir.path());
    let grid = store.get(ClimateIndex::Txx).unwrap();
    assert_eq!(grid.valid_fraction_at(0, 0), 0.0);
    assert_eq!(grid.valid_fraction_at(1, 1), 0.0);
}
