mod fuselage;
mod wing;

pub use fuselage::{AircraftFuseGeometry, FuselageGeometry};
pub use wing::{AircraftWingGeometry, MeanAerodynamicChord, PlanformAreas, WingGeometry};

use serde::{Deserialize, Serialize};

/// A segment together with the sections it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentLink {
    /// Segment index as known to the geometry oracle.
    pub segment: usize,
    /// Section at the start (inner end) of the segment.
    pub inner: usize,
    /// Section at the end (outer end) of the segment.
    pub outer: usize,
}

impl SegmentLink {
    pub fn new(segment: usize, inner: usize, outer: usize) -> Self {
        Self {
            segment,
            inner,
            outer,
        }
    }
}
