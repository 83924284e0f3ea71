use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{load_yaml, ConfigError};
use crate::utils::{
    DEFAULT_PROFILE_SAMPLES, DEFAULT_SPACING, DEFAULT_WING_CHORD_SUBDIVISIONS,
    MAX_WING_CHORD_SUBDIVISIONS, MIN_PROFILE_SAMPLES, MIN_SPACING,
};

/// How a segment's mass is spread over its sampled nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassDistribution {
    /// Every node of a segment carries the same mass.
    #[default]
    EqualPerPoint,
    /// Nodes carry mass in proportion to the parametric area they represent.
    AreaWeighted,
}

/// Settings of the lumped-masses inertia evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
    /// Maximum distance between nodes (m)
    pub spacing: f64,
    /// Chordwise subdivisions on each wing surface
    pub wing_chord_subdivisions: usize,
    /// Circumferential samples used to measure fuselage cross-sections
    pub profile_samples: usize,
    pub mass_distribution: MassDistribution,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            wing_chord_subdivisions: DEFAULT_WING_CHORD_SUBDIVISIONS,
            profile_samples: DEFAULT_PROFILE_SAMPLES,
            mass_distribution: MassDistribution::EqualPerPoint,
        }
    }
}

impl InertiaConfig {
    pub fn with_spacing(spacing: f64) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = load_yaml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spacing.is_finite() && self.spacing >= MIN_SPACING) {
            return Err(ConfigError::ValidationError(format!(
                "spacing must be at least {} m, got {}",
                MIN_SPACING, self.spacing
            )));
        }
        if self.wing_chord_subdivisions > MAX_WING_CHORD_SUBDIVISIONS {
            return Err(ConfigError::ValidationError(format!(
                "wing_chord_subdivisions must be at most {}, got {}",
                MAX_WING_CHORD_SUBDIVISIONS, self.wing_chord_subdivisions
            )));
        }
        if self.profile_samples < MIN_PROFILE_SAMPLES {
            return Err(ConfigError::ValidationError(format!(
                "profile_samples must be at least {}, got {}",
                MIN_PROFILE_SAMPLES, self.profile_samples
            )));
        }
        Ok(())
    }
}
