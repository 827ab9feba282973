use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Population-weighted representative point for a country.
#[derive(Debug, Deserialize)]
struct CountryPoint {
    latitude: f64,
    longitude: f64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CountryEntry {
    population_weighted: CountryPoint,
}

/// Resolved country location.
#[derive(Debug)]
pub struct CountryLocation {
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_name: String,
}

/// Resolve a country name to its population-weighted centre via the
/// country lookup collaborator file.
pub fn resolve_country(lookup_path: &Path, country: &str) -> Result<CountryLocation> {
    let text = std::fs::read_to_string(lookup_path).with_context(|| {
        format!(
            "country lookup data not available: {}",
            lookup_path.display()
        )
    })?;

    let lookup: BTreeMap<String, CountryEntry> =
        serde_json::from_str(&text).context("invalid country lookup JSON")?;

    let Some(entry) = lookup.get(country) else {
        let available: Vec<&str> = lookup.keys().take(10).map(String::as_str).collect();
        bail!(
            "country not found: {country} ({} known, e.g. {})",
            lookup.len(),
            available.join(", ")
        );
    };

    Ok(CountryLocation {
        country: country.to_string(),
        latitude: entry.population_weighted.latitude,
        longitude: entry.population_weighted.longitude,
        place_name: entry.population_weighted.name.clone(),
    })
}
