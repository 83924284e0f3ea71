use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::components::{EngineData, SegmentMasses};
use crate::config::{load_yaml, ConfigError};
use crate::oracle::AircraftDefinition;

/// Built-in aircraft geometries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    BlendedWingBody,
    Conventional,
}

impl FromStr for AircraftType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blended_wing_body" | "bwb" => Ok(Self::BlendedWingBody),
            "conventional" => Ok(Self::Conventional),
            other => Err(ConfigError::ValidationError(format!(
                "unknown aircraft preset '{}'",
                other
            ))),
        }
    }
}

/// Where an aircraft definition comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

impl AircraftSource {
    /// Interprets `arg` as a preset name, falling back to a file path.
    pub fn parse(arg: &str) -> Self {
        match arg.parse::<AircraftType>() {
            Ok(aircraft_type) => Self::Programmed(aircraft_type),
            Err(_) => Self::File(PathBuf::from(arg)),
        }
    }

    /// Creates the aircraft definition for this source.
    ///
    /// # Returns
    /// A `Result` containing the validated definition or an error if the file fails to load.
    pub fn load(&self) -> Result<AircraftDefinition, ConfigError> {
        match self {
            Self::Programmed(AircraftType::BlendedWingBody) => {
                Ok(AircraftDefinition::blended_wing_body())
            }
            Self::Programmed(AircraftType::Conventional) => Ok(AircraftDefinition::conventional()),
            Self::File(path) => AircraftDefinition::from_file(path),
        }
    }
}

/// Inputs of a balance evaluation supplied by the mass estimation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceInput {
    /// Center of gravity the tensor is evaluated about (m).
    pub center_of_gravity: Vector3<f64>,
    pub masses: SegmentMasses,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engines: Option<EngineData>,
}

impl BalanceInput {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let input: Self = load_yaml(path)?;
        let all_masses = input
            .masses
            .fuselages
            .iter()
            .flatten()
            .chain(input.masses.wings.iter().flat_map(|w| {
                w.segments
                    .iter()
                    .chain(w.mirrored.iter().flatten())
            }));
        for &mass in all_masses {
            if !(mass.is_finite() && mass >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "segment masses must be non-negative, got {}",
                    mass
                )));
            }
        }
        Ok(input)
    }
}
