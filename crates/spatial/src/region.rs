//! Regional baseline table.
//!
//! Last-resort scalar proxies for locations where no usable grid data
//! exists. Regions are consulted in declaration order and the first
//! bounding box containing the coordinate wins; [`GLOBAL_DEFAULT`] is the
//! terminal fallback.

use notus_grid::ClimateIndex;

/// A named rectangular climate region with fixed proxy values.
#[derive(Debug, Clone, Copy)]
pub struct RegionalBaseline {
    /// Region name, reported in estimate details.
    pub name: &'static str,
    /// Southern edge (degrees north, inclusive).
    pub lat_min: f64,
    /// Northern edge (degrees north, inclusive).
    pub lat_max: f64,
    /// Western edge (degrees east, inclusive).
    pub lon_min: f64,
    /// Eastern edge (degrees east, inclusive).
    pub lon_max: f64,
    /// Typical annual maximum temperature (°C).
    pub txx: f64,
    /// Typical maximum consecutive dry days (days).
    pub cdd: f64,
    /// Typical annual maximum 5-day precipitation (mm).
    pub rx5day: f64,
}

impl RegionalBaseline {
    /// Returns `true` if the coordinate lies inside this region's box.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }

    /// Returns this region's proxy value for `index`, if the table carries
    /// one. Only the three chronic-hazard drivers have proxies.
    pub fn proxy_value(&self, index: ClimateIndex) -> Option<f64> {
        match index {
            ClimateIndex::Txx => Some(self.txx),
            ClimateIndex::Cdd => Some(self.cdd),
            ClimateIndex::Rx5day => Some(self.rx5day),
            _ => None,
        }
    }
}

/// Ordered region table; more specific boxes come before the broad
/// latitude bands they overlap.
pub const REGIONS: &[RegionalBaseline] = &[
    RegionalBaseline {
        name: "saharan-arabian arid belt",
        lat_min: 12.0,
        lat_max: 35.0,
        lon_min: -20.0,
        lon_max: 60.0,
        txx: 43.0,
        cdd: 150.0,
        rx5day: 25.0,
    },
    RegionalBaseline {
        name: "south asian monsoon",
        lat_min: 5.0,
        lat_max: 30.0,
        lon_min: 60.0,
        lon_max: 100.0,
        txx: 38.0,
        cdd: 60.0,
        rx5day: 250.0,
    },
    RegionalBaseline {
        name: "maritime tropics",
        lat_min: -15.0,
        lat_max: 15.0,
        lon_min: 90.0,
        lon_max: 160.0,
        txx: 33.0,
        cdd: 25.0,
        rx5day: 220.0,
    },
    RegionalBaseline {
        name: "tropics",
        lat_min: -23.5,
        lat_max: 23.5,
        lon_min: -180.0,
        lon_max: 180.0,
        txx: 34.0,
        cdd: 45.0,
        rx5day: 180.0,
    },
    RegionalBaseline {
        name: "northern midlatitudes",
        lat_min: 23.5,
        lat_max: 55.0,
        lon_min: -180.0,
        lon_max: 180.0,
        txx: 32.0,
        cdd: 35.0,
        rx5day: 90.0,
    },
    RegionalBaseline {
        name: "southern midlatitudes",
        lat_min: -55.0,
        lat_max: -23.5,
        lon_min: -180.0,
        lon_max: 180.0,
        txx: 30.0,
        cdd: 40.0,
        rx5day: 100.0,
    },
];

/// Terminal fallback when no region box contains the coordinate.
pub const GLOBAL_DEFAULT: RegionalBaseline = RegionalBaseline {
    name: "global default",
    lat_min: -90.0,
    lat_max: 90.0,
    lon_min: -180.0,
    lon_max: 180.0,
    txx: 27.0,
    cdd: 30.0,
    rx5day: 70.0,
};

/// Returns the first region whose box contains the coordinate, or
/// [`GLOBAL_DEFAULT`].
pub fn baseline_for(lat: f64, lon: f64) -> &'static RegionalBaseline {
    REGIONS
        .iter()
        .find(|r| r.contains(lat, lon))
        .unwrap_or(&GLOBAL_DEFAULT)
}
