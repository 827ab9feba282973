//! Implementations of the `assess`, `hazard`, and `info` subcommands.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use notus_damage::BuildingType;
use notus_engine::{
    AssessmentRequest, EngineConfig, HazardKind, RiskEngine, ValuationParams,
};

use crate::cli::{AssessArgs, HazardArg, HazardArgs, InfoArgs, LocationArgs};
use crate::config::{NotusConfig, load_config};
use crate::country::{CountryLocation, resolve_country};

/// Run the `assess` subcommand.
pub fn assess(args: AssessArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let (request, country) = build_request(
        &config,
        &args.location,
        args.asset_value,
        &args.building_type,
    )?;
    let engine = build_engine(&config)?;

    let assessment = engine.assess(&request)?;
    let mut value = serde_json::to_value(&assessment)?;
    if let Some(loc) = &country {
        annotate_country(&mut value, loc);
    }

    emit(&value, args.output.as_deref())
}

/// Run the `hazard` subcommand.
pub fn hazard(args: HazardArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let (request, _) = build_request(
        &config,
        &args.location,
        args.asset_value,
        &args.building_type,
    )?;
    let engine = build_engine(&config)?;

    let kind = hazard_kind(args.hazard);
    info!(hazard = %kind, "running single-hazard estimate");
    let estimate = engine.assess_hazard(kind, &request)?;

    emit(&serde_json::to_value(&estimate)?, args.output.as_deref())
}

/// Run the `info` subcommand.
pub fn info_cmd(args: InfoArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let engine = build_engine(&config)?;
    emit(&serde_json::to_value(engine.inventory())?, None)
}

/// Construct the fully-loaded engine from the TOML configuration.
fn build_engine(config: &NotusConfig) -> Result<RiskEngine> {
    let engine_config = EngineConfig {
        hadex3_dir: config.data.hadex3_dir.clone(),
        flood_lookup: config.data.flood_lookup.clone(),
        hurricane_archive: config.data.hurricane_archive.clone(),
    };
    let valuation = ValuationParams::default()
        .with_escalation_rate(config.valuation.escalation_rate)
        .with_discount_rate(config.valuation.discount_rate)
        .with_horizon_years(config.valuation.horizon_years);

    Ok(RiskEngine::load(&engine_config, valuation)?)
}

/// Resolve the location arguments and build a validated request.
fn build_request(
    config: &NotusConfig,
    location: &LocationArgs,
    asset_value: f64,
    building_type: &str,
) -> Result<(AssessmentRequest, Option<CountryLocation>)> {
    let building: BuildingType = building_type
        .parse()
        .with_context(|| format!("valid types: {}", BuildingType::names().join(", ")))?;

    let (latitude, longitude, country) = match (&location.country, location.lat, location.lon) {
        (Some(name), _, _) => {
            let loc = resolve_country(&config.data.country_lookup, name)?;
            info!(
                country = %loc.country,
                place = %loc.place_name,
                "assessing population-weighted centre"
            );
            (loc.latitude, loc.longitude, Some(loc))
        }
        (None, Some(lat), Some(lon)) => (lat, lon, None),
        _ => bail!("provide either --lat and --lon, or --country"),
    };

    let request = AssessmentRequest::new(latitude, longitude, asset_value, building);
    request.validate()?;
    Ok((request, country))
}

fn hazard_kind(arg: HazardArg) -> HazardKind {
    match arg {
        HazardArg::Hurricane => HazardKind::Hurricane,
        HazardArg::Flood => HazardKind::Flood,
        HazardArg::Heat => HazardKind::HeatStress,
        HazardArg::Drought => HazardKind::Drought,
        HazardArg::Precipitation => HazardKind::ExtremePrecipitation,
    }
}

/// Annotate a country-level assessment with its resolution context.
fn annotate_country(value: &mut serde_json::Value, loc: &CountryLocation) {
    value["country"] = serde_json::Value::String(loc.country.clone());
    value["assessment_type"] = serde_json::Value::String("population_weighted".to_string());
    value["location"] = serde_json::json!({
        "name": loc.place_name,
        "latitude": loc.latitude,
        "longitude": loc.longitude,
        "description": format!("Population-weighted center of {}", loc.country),
    });
}

/// Write pretty JSON to `path`, or stdout when no path is given.
fn emit(value: &serde_json::Value, path: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "result written");
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::CountryLocation;

    #[test]
    fn hazard_kind_mapping_is_total() {
        assert_eq!(hazard_kind(HazardArg::Hurricane), HazardKind::Hurricane);
        assert_eq!(hazard_kind(HazardArg::Flood), HazardKind::Flood);
        assert_eq!(hazard_kind(HazardArg::Heat), HazardKind::HeatStress);
        assert_eq!(hazard_kind(HazardArg::Drought), HazardKind::Drought);
        assert_eq!(
            hazard_kind(HazardArg::Precipitation),
            HazardKind::ExtremePrecipitation
        );
    }

    #[test]
    fn country_annotation_replaces_location() {
        let mut value = serde_json::json!({
            "expected_annual_loss": 100.0,
            "location": {"latitude": 1.0, "longitude": 2.0},
        });
        let loc = CountryLocation {
            country: "Germany".to_string(),
            latitude: 50.9,
            longitude: 9.8,
            place_name: "Hesse region".to_string(),
        };

        annotate_country(&mut value, &loc);

        assert_eq!(value["country"], "Germany");
        assert_eq!(value["assessment_type"], "population_weighted");
        assert_eq!(value["location"]["name"], "Hesse region");
        assert_eq!(value["location"]["latitude"], 50.9);
    }
}
