use nalgebra::Vector3;

use crate::components::{MeanAerodynamicChord, SymmetryPlane};
use crate::oracle::OracleError;
use crate::utils::{ComponentId, ReferencePlane};

/// Query interface of the CAD kernel owning the parametric aircraft shape.
///
/// Implementations are stateful handles: an analysis run borrows one
/// exclusively for its whole duration. Parametric coordinates run over
/// [0, 1]: `eta` along the segment, `xsi` along the chord, `zeta` around
/// the fuselage cross-section.
pub trait GeometryOracle {
    fn fuselage_count(&self) -> usize;
    fn wing_count(&self) -> usize;

    fn symmetry(&self, component: ComponentId) -> Result<SymmetryPlane, OracleError>;
    fn section_count(&self, component: ComponentId) -> Result<usize, OracleError>;
    fn segment_count(&self, component: ComponentId) -> Result<usize, OracleError>;

    /// Inner (start) and outer (end) section of a segment.
    fn segment_sections(
        &self,
        component: ComponentId,
        segment: usize,
    ) -> Result<(usize, usize), OracleError>;

    fn fuselage_point(
        &self,
        fuselage: usize,
        segment: usize,
        eta: f64,
        zeta: f64,
    ) -> Result<Vector3<f64>, OracleError>;

    fn wing_chord_point(
        &self,
        wing: usize,
        segment: usize,
        eta: f64,
        xsi: f64,
    ) -> Result<Vector3<f64>, OracleError>;

    fn wing_upper_point(
        &self,
        wing: usize,
        segment: usize,
        eta: f64,
        xsi: f64,
    ) -> Result<Vector3<f64>, OracleError>;

    fn wing_lower_point(
        &self,
        wing: usize,
        segment: usize,
        eta: f64,
        xsi: f64,
    ) -> Result<Vector3<f64>, OracleError>;

    /// Projected area of one half of the wing on a reference plane.
    fn wing_reference_area(&self, wing: usize, plane: ReferencePlane) -> Result<f64, OracleError>;

    /// Volume of one half of the wing.
    fn wing_volume(&self, wing: usize) -> Result<f64, OracleError>;
    fn wing_segment_volume(&self, wing: usize, segment: usize) -> Result<f64, OracleError>;

    fn wing_mac(&self, wing: usize) -> Result<MeanAerodynamicChord, OracleError>;

    /// Span including the symmetric half.
    fn wing_span(&self, wing: usize) -> Result<f64, OracleError>;

    /// Wetted area of one half of the wing.
    fn wing_surface_area(&self, wing: usize) -> Result<f64, OracleError>;
}

/// Rejects parametric coordinates outside [0, 1].
pub fn check_parameter(name: &'static str, value: f64) -> Result<f64, OracleError> {
    if value.is_finite() && (-1e-12..=1.0 + 1e-12).contains(&value) {
        Ok(value.clamp(0.0, 1.0))
    } else {
        Err(OracleError::InvalidParameter { name, value })
    }
}
