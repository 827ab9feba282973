//! Building type classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DamageError;

/// Building construction class accepted by the damage curves.
///
/// Wind curves are defined for [`WoodFrame`](BuildingType::WoodFrame) and
/// [`Concrete`](BuildingType::Concrete); the occupancy classes alias to wood
/// frame. Flood curves are defined for the three occupancy classes; the
/// construction classes alias to residential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    WoodFrame,
    Concrete,
    Residential,
    Commercial,
    Industrial,
}

impl BuildingType {
    /// Returns the snake_case name used in requests and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingType::WoodFrame => "wood_frame",
            BuildingType::Concrete => "concrete",
            BuildingType::Residential => "residential",
            BuildingType::Commercial => "commercial",
            BuildingType::Industrial => "industrial",
        }
    }

    /// All accepted names, in declaration order.
    pub fn names() -> &'static [&'static str] {
        &[
            "wood_frame",
            "concrete",
            "residential",
            "commercial",
            "industrial",
        ]
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildingType {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wood_frame" => Ok(BuildingType::WoodFrame),
            "concrete" => Ok(BuildingType::Concrete),
            "residential" => Ok(BuildingType::Residential),
            "commercial" => Ok(BuildingType::Commercial),
            "industrial" => Ok(BuildingType::Industrial),
            _ => Err(DamageError::UnknownBuildingType {
                name: s.to_string(),
            }),
        }
    }
}
