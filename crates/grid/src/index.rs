//! HadEX3 climate-extremes index identifiers.

use std::fmt;

/// Annual climate-extremes indices the store knows how to load.
///
/// Each variant corresponds to one HadEX3 archive file. The short names
/// follow the ETCCDI index naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClimateIndex {
    /// Annual maximum daily maximum temperature (°C).
    Txx,
    /// Tropical nights: days with minimum temperature > 20 °C.
    Tr,
    /// Summer days: days with maximum temperature > 25 °C.
    Su,
    /// Warm spell duration index (days).
    Wsdi,
    /// Maximum consecutive dry days (days).
    Cdd,
    /// Annual maximum 1-day precipitation (mm).
    Rx1day,
    /// Annual maximum consecutive 5-day precipitation (mm).
    Rx5day,
}

impl ClimateIndex {
    /// All known indices, in load order.
    pub const ALL: [ClimateIndex; 7] = [
        ClimateIndex::Txx,
        ClimateIndex::Tr,
        ClimateIndex::Su,
        ClimateIndex::Wsdi,
        ClimateIndex::Cdd,
        ClimateIndex::Rx1day,
        ClimateIndex::Rx5day,
    ];

    /// Returns the ETCCDI short name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateIndex::Txx => "txx",
            ClimateIndex::Tr => "tr",
            ClimateIndex::Su => "su",
            ClimateIndex::Wsdi => "wsdi",
            ClimateIndex::Cdd => "cdd",
            ClimateIndex::Rx1day => "rx1day",
            ClimateIndex::Rx5day => "rx5day",
        }
    }

    /// Returns the archive file name for this index.
    pub fn file_name(&self) -> &'static str {
        match self {
            ClimateIndex::Txx => "HadEX3-0-4_txx_ann.nc",
            ClimateIndex::Tr => "HadEX3-0-4_tr_ann.nc",
            ClimateIndex::Su => "HadEX3-0-4_su_ann.nc",
            ClimateIndex::Wsdi => "HadEX3-0-4_wsdi_ann_1961-1990.nc",
            ClimateIndex::Cdd => "HadEX3-0-4_cdd_ann.nc",
            ClimateIndex::Rx1day => "HadEX3-0-4_rx1day_ann.nc",
            ClimateIndex::Rx5day => "HadEX3-0-4_rx5day_ann.nc",
        }
    }
}

impl fmt::Display for ClimateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
