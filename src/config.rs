use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Notus configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NotusConfig {
    /// Dataset locations.
    #[serde(default)]
    pub data: DataToml,

    /// Financial projection parameters.
    #[serde(default)]
    pub valuation: ValuationToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default = "default_hadex3_dir")]
    pub hadex3_dir: PathBuf,
    #[serde(default = "default_flood_lookup")]
    pub flood_lookup: PathBuf,
    #[serde(default = "default_hurricane_archive")]
    pub hurricane_archive: PathBuf,
    #[serde(default = "default_country_lookup")]
    pub country_lookup: PathBuf,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            hadex3_dir: default_hadex3_dir(),
            flood_lookup: default_flood_lookup(),
            hurricane_archive: default_hurricane_archive(),
            country_lookup: default_country_lookup(),
        }
    }
}

fn default_hadex3_dir() -> PathBuf {
    PathBuf::from("climate_data/hadex3")
}
fn default_flood_lookup() -> PathBuf {
    PathBuf::from("climate_data/flood/flood_lookup.json")
}
fn default_hurricane_archive() -> PathBuf {
    PathBuf::from("climate_data/hurricane/ibtracs_optimized.csv.gz")
}
fn default_country_lookup() -> PathBuf {
    PathBuf::from("climate_data/country_lookup.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValuationToml {
    #[serde(default = "default_escalation_rate")]
    pub escalation_rate: f64,
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

impl Default for ValuationToml {
    fn default() -> Self {
        Self {
            escalation_rate: default_escalation_rate(),
            discount_rate: default_discount_rate(),
            horizon_years: default_horizon_years(),
        }
    }
}

fn default_escalation_rate() -> f64 {
    0.02
}
fn default_discount_rate() -> f64 {
    0.10
}
fn default_horizon_years() -> u32 {
    30
}

/// Load configuration from `path`, or defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<NotusConfig> {
    if !path.exists() {
        return Ok(NotusConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
