//! Streaming access to the hurricane track archive.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::StormError;

/// Column names expected in the archive header.
const COL_STORM_ID: &str = "SID";
const COL_LAT: &str = "LAT";
const COL_LON: &str = "LON";
const COL_TIME: &str = "ISO_TIME";
const COL_WIND: &str = "USA_WIND";

/// One parsed track point.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackObservation {
    /// Storm identifier shared by all of a storm's track points.
    pub storm_id: String,
    /// Observation latitude (degrees north).
    pub latitude: f64,
    /// Observation longitude (degrees east).
    pub longitude: f64,
    /// Sustained wind speed in knots.
    pub wind_knots: f64,
    /// Observation timestamp as recorded in the archive.
    pub timestamp: String,
}

/// Handle to the on-disk track archive.
///
/// Holds only the path; every traversal re-opens and re-streams the file so
/// concurrent queries never share a cursor.
#[derive(Debug, Clone)]
pub struct TrackArchive {
    path: PathBuf,
}

impl TrackArchive {
    /// Create a handle for the archive at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the archive path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the archive file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Stream every parseable observation through `f`, in file order.
    ///
    /// Records with unparseable numeric fields (including the IBTrACS units
    /// row) are skipped. Returns the number of observations delivered.
    ///
    /// # Errors
    ///
    /// Returns [`StormError::FileNotFound`] if the archive is absent,
    /// [`StormError::MissingColumn`] if the header lacks a required column,
    /// or [`StormError::Csv`] on a malformed stream.
    pub fn for_each_observation<F>(&self, mut f: F) -> Result<usize, StormError>
    where
        F: FnMut(TrackObservation),
    {
        if !self.path.exists() {
            return Err(StormError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let file = File::open(&self.path).map_err(|e| StormError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let reader: Box<dyn Read> = if self.path.extension().is_some_and(|e| e == "gz") {
            Box::new(GzDecoder::new(BufReader::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let col = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| StormError::MissingColumn {
                    name: name.to_string(),
                })
        };
        let sid_idx = col(COL_STORM_ID)?;
        let lat_idx = col(COL_LAT)?;
        let lon_idx = col(COL_LON)?;
        let time_idx = col(COL_TIME)?;
        let wind_idx = col(COL_WIND)?;

        let mut n_parsed = 0usize;
        let mut n_skipped = 0usize;

        for result in rdr.records() {
            let record = result?;
            let parsed = (|| {
                let storm_id = record.get(sid_idx)?.to_string();
                let latitude: f64 = record.get(lat_idx)?.trim().parse().ok()?;
                let longitude: f64 = record.get(lon_idx)?.trim().parse().ok()?;
                let wind_knots: f64 = record.get(wind_idx)?.trim().parse().ok()?;
                let timestamp = record.get(time_idx)?.to_string();
                Some(TrackObservation {
                    storm_id,
                    latitude,
                    longitude,
                    wind_knots,
                    timestamp,
                })
            })();

            match parsed {
                Some(obs) => {
                    n_parsed += 1;
                    f(obs);
                }
                None => n_skipped += 1,
            }
        }

        debug!(n_parsed, n_skipped, "track archive streamed");
        Ok(n_parsed)
    }
}
