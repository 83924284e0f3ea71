use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Engines treated as discrete point masses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineData {
    /// Name of the engine type
    #[serde(default = "default_engine_name")]
    pub name: String,
    /// Mass of a single engine (kg)
    pub mass: f64,
    /// Position of each installed engine (m)
    pub placements: Vec<Vector3<f64>>,
}

fn default_engine_name() -> String {
    "Generic Engine".to_string()
}

impl Default for EngineData {
    fn default() -> Self {
        Self {
            name: default_engine_name(),
            mass: 0.0,
            placements: Vec::new(),
        }
    }
}

impl EngineData {
    /// A single engine at `position`
    pub fn single_engine(mass: f64, position: Vector3<f64>) -> Self {
        Self {
            mass,
            placements: vec![position],
            ..Default::default()
        }
    }

    /// Two engines placed symmetrically about the x-z plane
    pub fn twin_engine(mass: f64, x_offset: f64, y_offset: f64, z_offset: f64) -> Self {
        Self {
            mass,
            placements: vec![
                Vector3::new(x_offset, -y_offset, z_offset),
                Vector3::new(x_offset, y_offset, z_offset),
            ],
            ..Default::default()
        }
    }

    pub fn count(&self) -> usize {
        self.placements.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.mass * self.placements.len() as f64
    }
}
