use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::components::SymmetryPlane;

/// Symmetric inertia tensor accumulated from discrete point masses (kg·m²).
///
/// Products of inertia are stored as plain sums `Σ m·dx·dy`; the sign
/// convention of the classical inertia matrix is applied by [`to_matrix`].
///
/// [`to_matrix`]: InertiaTensor::to_matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InertiaTensor {
    /// Moment of inertia about the x-axis.
    pub ixx: f64,
    /// Moment of inertia about the y-axis.
    pub iyy: f64,
    /// Moment of inertia about the z-axis.
    pub izz: f64,
    /// Product of inertia between the x and y axes.
    pub ixy: f64,
    /// Product of inertia between the y and z axes.
    pub iyz: f64,
    /// Product of inertia between the x and z axes.
    pub ixz: f64,
}

impl InertiaTensor {
    pub fn new(ixx: f64, iyy: f64, izz: f64, ixy: f64, iyz: f64, ixz: f64) -> Self {
        Self {
            ixx,
            iyy,
            izz,
            ixy,
            iyz,
            ixz,
        }
    }

    /// Contribution of a single point mass at `offset` from the center of gravity.
    pub fn from_point_mass(mass: f64, offset: &Vector3<f64>) -> Self {
        let (dx, dy, dz) = (offset.x, offset.y, offset.z);
        Self {
            ixx: mass * (dy * dy + dz * dz),
            iyy: mass * (dx * dx + dz * dz),
            izz: mass * (dx * dx + dy * dy),
            ixy: mass * dx * dy,
            iyz: mass * dy * dz,
            ixz: mass * dx * dz,
        }
    }

    /// Sum of the diagonal, equal to `2 Σ m r²` for a point cloud.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.ixx + self.iyy + self.izz
    }

    /// The tensor of the mirrored body about a center of gravity lying on `plane`.
    pub fn mirrored(&self, plane: SymmetryPlane) -> Self {
        let s = plane.signs();
        Self {
            ixy: self.ixy * s.x * s.y,
            iyz: self.iyz * s.y * s.z,
            ixz: self.ixz * s.x * s.z,
            ..*self
        }
    }

    /// Classical inertia matrix with negated products of inertia.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.ixx, -self.ixy, -self.ixz, //
            -self.ixy, self.iyy, -self.iyz, //
            -self.ixz, -self.iyz, self.izz,
        )
    }

    pub fn is_finite(&self) -> bool {
        [self.ixx, self.iyy, self.izz, self.ixy, self.iyz, self.ixz]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Add for InertiaTensor {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for InertiaTensor {
    fn add_assign(&mut self, rhs: Self) {
        self.ixx += rhs.ixx;
        self.iyy += rhs.iyy;
        self.izz += rhs.izz;
        self.ixy += rhs.ixy;
        self.iyz += rhs.iyz;
        self.ixz += rhs.ixz;
    }
}

impl Sum for InertiaTensor {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_mass_on_y_axis() {
        let tensor = InertiaTensor::from_point_mass(2.0, &Vector3::new(0.0, 3.0, 0.0));
        assert_relative_eq!(tensor.ixx, 18.0);
        assert_relative_eq!(tensor.iyy, 0.0);
        assert_relative_eq!(tensor.izz, 18.0);
        assert_relative_eq!(tensor.ixy, 0.0);
    }

    #[test]
    fn test_trace_identity() {
        let offset = Vector3::new(1.0, -2.0, 0.5);
        let tensor = InertiaTensor::from_point_mass(4.0, &offset);
        assert_relative_eq!(tensor.trace(), 2.0 * 4.0 * offset.norm_squared());
    }

    #[test]
    fn test_mirrored_xz_flips_xy_and_yz() {
        let tensor = InertiaTensor::from_point_mass(1.0, &Vector3::new(1.0, 2.0, 3.0));
        let mirrored = tensor.mirrored(SymmetryPlane::Xz);
        assert_eq!(mirrored.ixy, -tensor.ixy);
        assert_eq!(mirrored.iyz, -tensor.iyz);
        assert_eq!(mirrored.ixz, tensor.ixz);
        assert_eq!(mirrored.ixx, tensor.ixx);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let tensor = InertiaTensor::new(10.0, 20.0, 30.0, 1.0, 2.0, 3.0);
        let m = tensor.to_matrix();
        assert_eq!(m, m.transpose());
        assert_eq!(m[(0, 1)], -1.0);
    }

    #[test]
    fn test_sum_matches_fold() {
        let parts = vec![
            InertiaTensor::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.0),
            InertiaTensor::new(2.0, 3.0, 4.0, 1.0, -1.0, 0.5),
        ];
        let total: InertiaTensor = parts.into_iter().sum();
        assert_eq!(total, InertiaTensor::new(3.0, 4.0, 5.0, 1.0, -1.0, 0.5));
    }
}
