use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one component of the aircraft as the geometry oracle knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    Fuselage(usize),
    Wing(usize),
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Fuselage(i) => write!(f, "fuselage {}", i),
            ComponentId::Wing(i) => write!(f, "wing {}", i),
        }
    }
}

/// Reference plane used for projected (planform) areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferencePlane {
    Xy,
    Xz,
    Yz,
}

/// Cartesian axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn component(self, point: &Vector3<f64>) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }
}
