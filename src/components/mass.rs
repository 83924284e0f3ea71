use serde::{Deserialize, Serialize};

/// Supplies the structural mass assigned to each segment of each component.
///
/// Segments are addressed by the oracle's segment index, not by their
/// position in the reordered chain.
pub trait MassBreakdown {
    fn fuselage_segment_mass(&self, fuselage: usize, segment: usize) -> Option<f64>;

    /// Mass of a wing segment; `mirrored` selects the symmetric half.
    fn wing_segment_mass(&self, wing: usize, segment: usize, mirrored: bool) -> Option<f64>;
}

/// Segment masses of one wing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WingSegmentMasses {
    pub segments: Vec<f64>,
    /// Masses of the mirrored half; the primary masses are reused when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirrored: Option<Vec<f64>>,
}

/// Tabulated mass breakdown, as handed over by the mass estimation stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentMasses {
    #[serde(default)]
    pub fuselages: Vec<Vec<f64>>,
    #[serde(default)]
    pub wings: Vec<WingSegmentMasses>,
}

impl MassBreakdown for SegmentMasses {
    fn fuselage_segment_mass(&self, fuselage: usize, segment: usize) -> Option<f64> {
        self.fuselages.get(fuselage)?.get(segment).copied()
    }

    fn wing_segment_mass(&self, wing: usize, segment: usize, mirrored: bool) -> Option<f64> {
        let wing = self.wings.get(wing)?;
        if mirrored {
            if let Some(masses) = &wing.mirrored {
                return masses.get(segment).copied();
            }
        }
        wing.segments.get(segment).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_falls_back_to_primary() {
        let masses = SegmentMasses {
            fuselages: vec![],
            wings: vec![WingSegmentMasses {
                segments: vec![10.0, 20.0],
                mirrored: None,
            }],
        };
        assert_eq!(masses.wing_segment_mass(0, 1, true), Some(20.0));
        assert_eq!(masses.wing_segment_mass(0, 2, false), None);
        assert_eq!(masses.wing_segment_mass(1, 0, false), None);
    }
}
