use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mirror plane declared on a component.
///
/// The numeric codes follow the CPACS convention: 0 none, 1 x-y, 2 x-z, 3 y-z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SymmetryPlane {
    #[default]
    None,
    Xy,
    Xz,
    Yz,
}

impl SymmetryPlane {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Xy),
            2 => Some(Self::Xz),
            3 => Some(Self::Yz),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Xy => 1,
            Self::Xz => 2,
            Self::Yz => 3,
        }
    }

    #[inline]
    pub fn is_symmetric(self) -> bool {
        self != Self::None
    }

    /// Number of physical halves this component represents.
    #[inline]
    pub fn multiplicity(self) -> f64 {
        if self.is_symmetric() {
            2.0
        } else {
            1.0
        }
    }

    /// Per-axis sign applied when mirroring a point across the plane.
    pub fn signs(self) -> Vector3<f64> {
        match self {
            Self::None => Vector3::new(1.0, 1.0, 1.0),
            Self::Xy => Vector3::new(1.0, 1.0, -1.0),
            Self::Xz => Vector3::new(1.0, -1.0, 1.0),
            Self::Yz => Vector3::new(-1.0, 1.0, 1.0),
        }
    }

    #[inline]
    pub fn mirror(self, point: &Vector3<f64>) -> Vector3<f64> {
        point.component_mul(&self.signs())
    }
}

impl TryFrom<u8> for SymmetryPlane {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("invalid symmetry plane code {}", code))
    }
}

impl From<SymmetryPlane> for u8 {
    fn from(plane: SymmetryPlane) -> Self {
        plane.code()
    }
}
