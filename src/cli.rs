use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Notus calibrated climate risk assessment.
#[derive(Parser)]
#[command(
    name = "notus",
    version,
    about = "Multi-hazard climate risk assessment from historical observations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the comprehensive five-hazard assessment.
    Assess(AssessArgs),
    /// Run a single hazard estimator.
    Hazard(HazardArgs),
    /// Report the loaded data inventory.
    Info(InfoArgs),
}

/// Hazards selectable from the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum HazardArg {
    Hurricane,
    Flood,
    Heat,
    Drought,
    Precipitation,
}

/// Location options shared by assessment commands: either an explicit
/// coordinate or a country name resolved through the country lookup.
#[derive(clap::Args)]
pub struct LocationArgs {
    /// Asset latitude in degrees north.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "country")]
    pub lat: Option<f64>,

    /// Asset longitude in degrees east.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "country")]
    pub lon: Option<f64>,

    /// Country name, assessed at its population-weighted centre.
    #[arg(long)]
    pub country: Option<String>,
}

/// Arguments for the `assess` subcommand.
#[derive(clap::Args)]
pub struct AssessArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "notus.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub location: LocationArgs,

    /// Asset replacement value in currency units.
    #[arg(long, default_value_t = 1_000_000.0)]
    pub asset_value: f64,

    /// Building type (wood_frame, concrete, residential, commercial,
    /// industrial).
    #[arg(long, default_value = "wood_frame")]
    pub building_type: String,

    /// Write the JSON result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `hazard` subcommand.
#[derive(clap::Args)]
pub struct HazardArgs {
    /// Hazard to estimate.
    #[arg(value_enum)]
    pub hazard: HazardArg,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "notus.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub location: LocationArgs,

    /// Asset replacement value in currency units.
    #[arg(long, default_value_t = 1_000_000.0)]
    pub asset_value: f64,

    /// Building type (wood_frame, concrete, residential, commercial,
    /// industrial).
    #[arg(long, default_value = "wood_frame")]
    pub building_type: String,

    /// Write the JSON result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "notus.toml")]
    pub config: PathBuf,
}
