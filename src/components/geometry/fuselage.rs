use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::geometry::SegmentLink;
use crate::components::SymmetryPlane;

/// Read-only geometry snapshot of one fuselage, nose to tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuselageGeometry {
    pub index: usize,
    pub symmetry: SymmetryPlane,
    pub section_count: usize,
    pub segment_count: usize,
    pub chain: Vec<SegmentLink>,
    pub section_order: Vec<usize>,
    /// Centroid of each cross-section.
    pub section_centers: Vec<Vector3<f64>>,
    pub section_perimeters: Vec<f64>,
    /// Lateral extent of each cross-section.
    pub section_widths: Vec<f64>,
    /// Vertical extent of each cross-section.
    pub section_heights: Vec<f64>,
    pub segment_lengths: Vec<f64>,
    pub segment_centers: Vec<Vector3<f64>>,
    pub length: f64,
}

impl FuselageGeometry {
    pub fn max_width(&self) -> f64 {
        self.section_widths.iter().copied().fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftFuseGeometry {
    pub fuselages: Vec<FuselageGeometry>,
}

impl AircraftFuseGeometry {
    pub fn total_length(&self) -> f64 {
        self.fuselages.iter().map(|f| f.length).sum()
    }
}
