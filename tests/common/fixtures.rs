use lumped_inertia::components::{EngineData, SegmentMasses, WingSegmentMasses};
use lumped_inertia::oracle::{
    AircraftDefinition, SegmentDefinition, WingDefinition, WingSection,
};
use lumped_inertia::{AnalyticOracle, BalanceInput, SymmetryPlane};
use nalgebra::Vector3;

pub fn conventional_oracle() -> AnalyticOracle {
    AnalyticOracle::new(AircraftDefinition::conventional()).expect("preset is valid")
}

pub fn blended_wing_body_oracle() -> AnalyticOracle {
    AnalyticOracle::new(AircraftDefinition::blended_wing_body()).expect("preset is valid")
}

/// Segment masses matching the conventional preset, indexed by oracle segment.
pub fn conventional_masses() -> SegmentMasses {
    SegmentMasses {
        fuselages: vec![vec![2400.0, 600.0, 900.0, 1800.0]],
        wings: vec![
            WingSegmentMasses {
                segments: vec![3000.0, 1500.0],
                mirrored: None,
            },
            WingSegmentMasses {
                segments: vec![250.0],
                mirrored: None,
            },
            WingSegmentMasses {
                segments: vec![300.0],
                mirrored: None,
            },
        ],
    }
}

pub fn conventional_input() -> BalanceInput {
    BalanceInput {
        center_of_gravity: Vector3::new(15.5, 0.0, 0.0),
        masses: conventional_masses(),
        engines: Some(EngineData::twin_engine(2300.0, 13.0, 5.8, -1.6)),
    }
}

pub fn blended_wing_body_input() -> BalanceInput {
    BalanceInput {
        center_of_gravity: Vector3::new(9.0, 0.0, 0.5),
        masses: SegmentMasses {
            fuselages: vec![],
            wings: vec![
                WingSegmentMasses {
                    segments: vec![900.0, 4000.0, 2500.0],
                    mirrored: None,
                },
                WingSegmentMasses {
                    segments: vec![40.0],
                    mirrored: None,
                },
            ],
        },
        engines: None,
    }
}

/// Straight wing of `sections` equal stations along +y, segments given as
/// `(inner, outer)` pairs in whatever order the caller lists them.
pub fn straight_wing(sections: usize, segments: &[(usize, usize)], symmetry: SymmetryPlane) -> AircraftDefinition {
    AircraftDefinition {
        name: "StraightWing".to_string(),
        fuselages: vec![],
        wings: vec![WingDefinition {
            name: "Wing".to_string(),
            symmetry,
            sections: (0..sections)
                .map(|i| WingSection::new(Vector3::new(0.0, 2.0 * i as f64, 0.0), 1.0, 0.12))
                .collect(),
            segments: segments
                .iter()
                .map(|&(inner, outer)| SegmentDefinition::new(inner, outer))
                .collect(),
        }],
    }
}
