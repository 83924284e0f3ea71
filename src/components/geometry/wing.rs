use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::geometry::SegmentLink;
use crate::components::SymmetryPlane;

/// Mean aerodynamic chord: length and leading-edge position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanAerodynamicChord {
    /// MAC length (m).
    pub length: f64,
    /// MAC leading edge x, y, z (m).
    pub position: Vector3<f64>,
}

/// Projected areas of a wing on the three reference planes (m²).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanformAreas {
    pub xy: f64,
    pub xz: f64,
    pub yz: f64,
}

impl PlanformAreas {
    /// A wing is horizontal when its x-y projection dominates both others.
    pub fn is_horizontal(&self) -> bool {
        self.xy > self.xz && self.xy > self.yz
    }
}

/// Read-only geometry snapshot of one wing, in spanwise order.
///
/// Per-section vectors have `segment_count + 1` entries and per-segment
/// vectors `segment_count`, both ordered root to tip along `chain`.
/// Quantities that describe the whole wing (areas, volume, wetted area)
/// already include the symmetric half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingGeometry {
    pub index: usize,
    pub symmetry: SymmetryPlane,
    /// The mirrored half of a symmetric wing, derived without oracle queries.
    pub is_mirror: bool,
    pub is_horizontal: bool,
    pub section_count: usize,
    pub segment_count: usize,
    pub chain: Vec<SegmentLink>,
    /// Section ids in spanwise order, first-seen and deduplicated.
    pub section_order: Vec<usize>,
    /// Quarter-chord point of each section.
    pub section_centers: Vec<Vector3<f64>>,
    pub section_thickness: Vec<f64>,
    pub mean_thickness: f64,
    pub segment_lengths: Vec<f64>,
    /// Midpoint between the bounding section centers of each segment.
    pub segment_centers: Vec<Vector3<f64>>,
    pub segment_volumes: Vec<f64>,
    pub mac: MeanAerodynamicChord,
    pub span: f64,
    pub max_chord: f64,
    pub min_chord: f64,
    pub planform: PlanformAreas,
    pub volume: f64,
    pub wetted_area: f64,
}

impl WingGeometry {
    pub fn root_segment(&self) -> Option<&SegmentLink> {
        self.chain.first()
    }

    pub fn tip_segment(&self) -> Option<&SegmentLink> {
        self.chain.last()
    }

    /// The symmetric counterpart, or `None` for a wing without symmetry.
    pub fn mirrored(&self) -> Option<WingGeometry> {
        if !self.symmetry.is_symmetric() || self.is_mirror {
            return None;
        }
        let plane = self.symmetry;
        Some(WingGeometry {
            is_mirror: true,
            section_centers: self.section_centers.iter().map(|p| plane.mirror(p)).collect(),
            segment_centers: self.segment_centers.iter().map(|p| plane.mirror(p)).collect(),
            mac: MeanAerodynamicChord {
                length: self.mac.length,
                position: plane.mirror(&self.mac.position),
            },
            ..self.clone()
        })
    }
}

/// Geometry of every wing of the aircraft plus the aircraft-level totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftWingGeometry {
    pub wings: Vec<WingGeometry>,
    pub main_wing_index: usize,
    pub main_wing_planform_area: f64,
    pub main_wing_surface: f64,
    pub tail_wings_surface: Vec<f64>,
    pub total_wings_surface: f64,
    pub total_volume: f64,
}

impl AircraftWingGeometry {
    /// Number of wings as defined in the geometry, symmetric halves not counted.
    pub fn defined_count(&self) -> usize {
        self.wings.len()
    }

    /// Number of physical wings, counting symmetric halves separately.
    pub fn physical_count(&self) -> usize {
        self.wings
            .iter()
            .map(|w| if w.symmetry.is_symmetric() { 2 } else { 1 })
            .sum()
    }

    pub fn main_wing(&self) -> Option<&WingGeometry> {
        self.wings.get(self.main_wing_index)
    }

    /// Every wing, each symmetric one immediately followed by its mirror.
    pub fn expanded(&self) -> Vec<WingGeometry> {
        self.wings
            .iter()
            .flat_map(|w| std::iter::once(w.clone()).chain(w.mirrored()))
            .collect()
    }
}
