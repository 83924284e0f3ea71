use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{InertiaTensor, SymmetryPlane};

/// Discrete point masses approximating a continuous mass distribution.
///
/// Built fresh for each inertia evaluation; `points` and `masses` always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LumpedMassCloud {
    points: Vec<Vector3<f64>>,
    masses: Vec<f64>,
}

impl LumpedMassCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spreads `total_mass` over `points` in proportion to `weights`.
    ///
    /// Non-positive total weight falls back to an equal split.
    pub fn from_weighted(points: Vec<Vector3<f64>>, weights: &[f64], total_mass: f64) -> Self {
        let weight_sum: f64 = weights.iter().sum();
        let masses = if weights.len() == points.len() && weight_sum > 0.0 {
            weights
                .iter()
                .map(|w| total_mass * w / weight_sum)
                .collect()
        } else {
            let each = if points.is_empty() {
                0.0
            } else {
                total_mass / points.len() as f64
            };
            vec![each; points.len()]
        };
        Self { points, masses }
    }

    /// Splits `total_mass` equally among `points`.
    pub fn from_equal_split(points: Vec<Vector3<f64>>, total_mass: f64) -> Self {
        Self::from_weighted(points, &[], total_mass)
    }

    pub fn append(&mut self, other: &mut LumpedMassCloud) {
        self.points.append(&mut other.points);
        self.masses.append(&mut other.masses);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn z(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.z).collect()
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// The mirror image of this cloud; empty when `plane` is `None`.
    pub fn mirrored(&self, plane: SymmetryPlane) -> Self {
        if !plane.is_symmetric() {
            return Self::default();
        }
        Self {
            points: self.points.iter().map(|p| plane.mirror(p)).collect(),
            masses: self.masses.clone(),
        }
    }

    pub fn inertia_about(&self, center_of_gravity: &Vector3<f64>) -> InertiaTensor {
        self.points
            .iter()
            .zip(&self.masses)
            .map(|(p, &m)| InertiaTensor::from_point_mass(m, &(p - center_of_gravity)))
            .sum()
    }
}
