use nalgebra::Vector3;
use tracing::{debug, info, instrument};

use crate::components::{AircraftWingGeometry, PlanformAreas, WingGeometry};
use crate::oracle::GeometryOracle;
use crate::systems::topology::{ordered_chain, section_order};
use crate::utils::{
    distance, midpoint, Axis, BalanceError, ComponentId, ReferencePlane, POINT_EPSILON,
    QUARTER_CHORD, QUARTER_CHORD_REVERSED,
};

/// Quarter-chord center point and thickness of one wing section.
struct SectionSample {
    center: Vector3<f64>,
    thickness: f64,
}

/// Chordwise parameters that land on the quarter chord of the lower and upper surface.
///
/// A surface whose parameterisation starts at the leading edge reaches the
/// quarter chord at 0.25, one starting at the trailing edge at 0.75.
fn quarter_chord_parameters<O: GeometryOracle>(
    oracle: &O,
    wing: usize,
    segment: usize,
) -> Result<(f64, f64), BalanceError> {
    let leading_edge = oracle.wing_chord_point(wing, segment, 0.0, 0.0)?;
    let lower = oracle.wing_lower_point(wing, segment, 0.0, 0.0)?;
    let upper = oracle.wing_upper_point(wing, segment, 0.0, 0.0)?;
    let pick = |p: Vector3<f64>| {
        if distance(&p, &leading_edge) < POINT_EPSILON {
            QUARTER_CHORD
        } else {
            QUARTER_CHORD_REVERSED
        }
    };
    Ok((pick(lower), pick(upper)))
}

fn sample_section<O: GeometryOracle>(
    oracle: &O,
    wing: usize,
    segment: usize,
    eta: f64,
    (lower_xsi, upper_xsi): (f64, f64),
) -> Result<SectionSample, BalanceError> {
    let lower = oracle.wing_lower_point(wing, segment, eta, lower_xsi)?;
    let upper = oracle.wing_upper_point(wing, segment, eta, upper_xsi)?;
    Ok(SectionSample {
        center: midpoint(&lower, &upper),
        thickness: distance(&upper, &lower),
    })
}

fn chord_length<O: GeometryOracle>(
    oracle: &O,
    wing: usize,
    segment: usize,
    eta: f64,
) -> Result<f64, BalanceError> {
    let leading_edge = oracle.wing_chord_point(wing, segment, eta, 0.0)?;
    let trailing_edge = oracle.wing_chord_point(wing, segment, eta, 1.0)?;
    Ok(distance(&leading_edge, &trailing_edge))
}

/// Evaluates the geometry of a single wing.
#[instrument(skip(oracle))]
pub fn analyse_wing<O: GeometryOracle>(oracle: &O, wing: usize) -> Result<WingGeometry, BalanceError> {
    let component = ComponentId::Wing(wing);
    let symmetry = oracle.symmetry(component)?;
    let double = symmetry.multiplicity();
    let section_count = oracle.section_count(component)?;
    let segment_count = oracle.segment_count(component)?;

    let planform = PlanformAreas {
        xy: oracle.wing_reference_area(wing, ReferencePlane::Xy)? * double,
        xz: oracle.wing_reference_area(wing, ReferencePlane::Xz)? * double,
        yz: oracle.wing_reference_area(wing, ReferencePlane::Yz)? * double,
    };
    let is_horizontal = planform.is_horizontal();
    let ranking_axis = if is_horizontal { Axis::Y } else { Axis::Z };

    let chain = ordered_chain(oracle, component, |oracle, segment| {
        let leading_edge = oracle.wing_chord_point(wing, segment, 0.0, 0.0)?;
        Ok(ranking_axis.component(&leading_edge))
    })?;
    let order = section_order(&chain);

    let mut section_centers = Vec::with_capacity(chain.len() + 1);
    let mut section_thickness = Vec::with_capacity(chain.len() + 1);
    let mut segment_volumes = Vec::with_capacity(chain.len());
    let mut tip_parameters = (QUARTER_CHORD, QUARTER_CHORD);
    for link in &chain {
        let parameters = quarter_chord_parameters(oracle, wing, link.segment)?;
        let inner = sample_section(oracle, wing, link.segment, 0.0, parameters)?;
        section_centers.push(inner.center);
        section_thickness.push(inner.thickness);
        segment_volumes.push(oracle.wing_segment_volume(wing, link.segment)? * double);
        tip_parameters = parameters;
    }
    // the chain is non-empty once reordered
    let root = chain[0];
    let tip = chain[chain.len() - 1];
    let outer = sample_section(oracle, wing, tip.segment, 1.0, tip_parameters)?;
    section_centers.push(outer.center);
    section_thickness.push(outer.thickness);

    let segment_lengths: Vec<f64> = section_centers
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .collect();
    let segment_centers: Vec<Vector3<f64>> = section_centers
        .windows(2)
        .map(|pair| midpoint(&pair[0], &pair[1]))
        .collect();
    let mean_thickness =
        section_thickness.iter().sum::<f64>() / section_thickness.len() as f64;

    let geometry = WingGeometry {
        index: wing,
        symmetry,
        is_mirror: false,
        is_horizontal,
        section_count,
        segment_count,
        chain,
        section_order: order,
        section_centers,
        section_thickness,
        mean_thickness,
        segment_lengths,
        segment_centers,
        segment_volumes,
        mac: oracle.wing_mac(wing)?,
        span: oracle.wing_span(wing)?,
        max_chord: chord_length(oracle, wing, root.segment, 0.0)?,
        min_chord: chord_length(oracle, wing, tip.segment, 1.0)?,
        planform,
        volume: oracle.wing_volume(wing)? * double,
        wetted_area: oracle.wing_surface_area(wing)? * double,
    };

    debug!(
        wing,
        symmetry = symmetry.code(),
        horizontal = is_horizontal,
        span = geometry.span,
        mac = geometry.mac.length,
        "wing analysed"
    );
    Ok(geometry)
}

/// Evaluates the geometry of every wing and the aircraft-level wing totals.
#[instrument(skip(oracle))]
pub fn analyse_wings<O: GeometryOracle>(oracle: &O) -> Result<AircraftWingGeometry, BalanceError> {
    let wings = (0..oracle.wing_count())
        .map(|w| analyse_wing(oracle, w))
        .collect::<Result<Vec<_>, _>>()?;

    let mut main_wing_index = 0;
    let mut largest_span = f64::MIN;
    for wing in &wings {
        if wing.span > largest_span {
            largest_span = wing.span;
            main_wing_index = wing.index;
        }
    }

    let mut geometry = AircraftWingGeometry {
        main_wing_index,
        ..Default::default()
    };
    for wing in &wings {
        if wing.index == main_wing_index {
            geometry.main_wing_surface = wing.wetted_area;
            geometry.main_wing_planform_area = wing.planform.xy;
        } else {
            geometry.tail_wings_surface.push(wing.wetted_area);
        }
        geometry.total_wings_surface += wing.wetted_area;
        geometry.total_volume += wing.volume;
    }
    geometry.wings = wings;

    info!(
        wings = geometry.defined_count(),
        physical_wings = geometry.physical_count(),
        main_wing = geometry.main_wing_index,
        main_wing_planform_area = geometry.main_wing_planform_area,
        total_wings_surface = geometry.total_wings_surface,
        total_volume = geometry.total_volume,
        "wing geometry evaluated"
    );
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SymmetryPlane;
    use crate::oracle::{
        AircraftDefinition, AnalyticOracle, SegmentDefinition, WingDefinition, WingSection,
    };
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn bwb() -> AnalyticOracle {
        AnalyticOracle::new(AircraftDefinition::blended_wing_body()).unwrap()
    }

    #[test]
    fn test_bwb_chain_is_spanwise() {
        let geometry = analyse_wing(&bwb(), 0).unwrap();
        let segments: Vec<usize> = geometry.chain.iter().map(|l| l.segment).collect();
        assert_eq!(segments, vec![1, 2, 0]);
        assert_eq!(geometry.section_order, vec![0, 1, 2, 3]);
        assert!(geometry.is_horizontal);
        for pair in geometry.section_centers.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
    }

    #[test]
    fn test_winglet_is_vertical() {
        let geometry = analyse_wing(&bwb(), 1).unwrap();
        assert!(!geometry.is_horizontal);
        assert_eq!(geometry.section_centers.len(), 2);
    }

    #[test]
    fn test_section_center_on_quarter_chord() {
        let geometry = analyse_wing(&bwb(), 0).unwrap();
        // root section: leading edge at the origin, chord 20
        assert_relative_eq!(geometry.section_centers[0], Vector3::new(5.0, 0.0, 0.0), epsilon = 1e-9);
        assert!(geometry.section_thickness[0] > 0.0);
    }

    #[test]
    fn test_segment_lengths_match_centers() {
        let geometry = analyse_wing(&bwb(), 0).unwrap();
        assert_eq!(geometry.segment_lengths.len(), 3);
        for (i, length) in geometry.segment_lengths.iter().enumerate() {
            let reversed = distance(&geometry.section_centers[i + 1], &geometry.section_centers[i]);
            assert_relative_eq!(*length, reversed);
        }
    }

    #[test]
    fn test_symmetric_quantities_doubled() {
        let oracle = bwb();
        let geometry = analyse_wing(&oracle, 0).unwrap();
        assert_relative_eq!(
            geometry.volume,
            2.0 * oracle.wing_volume(0).unwrap(),
            epsilon = 1e-9
        );
        assert_relative_eq!(geometry.max_chord, 20.0, epsilon = 1e-9);
        assert_relative_eq!(geometry.min_chord, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_main_wing_has_largest_span() {
        let oracle = AnalyticOracle::new(AircraftDefinition::conventional()).unwrap();
        let geometry = analyse_wings(&oracle).unwrap();
        assert_eq!(geometry.main_wing_index, 0);
        assert_eq!(geometry.tail_wings_surface.len(), 2);
        assert_eq!(geometry.physical_count(), 5);
        assert_eq!(geometry.expanded().len(), 5);
        let total: f64 = geometry.wings.iter().map(|w| w.wetted_area).sum();
        assert_relative_eq!(geometry.total_wings_surface, total);
    }

    #[test]
    fn test_mirrored_wing_negates_y() {
        let geometry = analyse_wing(&bwb(), 0).unwrap();
        let mirrored = geometry.mirrored().unwrap();
        for (a, b) in geometry.segment_centers.iter().zip(&mirrored.segment_centers) {
            assert_eq!(b.x, a.x);
            assert_eq!(b.y, -a.y);
            assert_eq!(b.z, a.z);
        }
        assert!(mirrored.mirrored().is_none());
    }

    #[test]
    fn test_forked_wing_is_inconsistent() {
        let oracle = AnalyticOracle::new(AircraftDefinition {
            name: "Forked".to_string(),
            fuselages: vec![],
            wings: vec![WingDefinition {
                name: "Forked".to_string(),
                symmetry: SymmetryPlane::None,
                sections: vec![
                    WingSection::new(Vector3::new(0.0, 0.0, 0.0), 2.0, 0.1),
                    WingSection::new(Vector3::new(0.5, 4.0, 0.0), 1.5, 0.1),
                    WingSection::new(Vector3::new(1.0, 8.0, 0.0), 1.0, 0.1),
                    WingSection::new(Vector3::new(1.0, 8.0, 2.0), 1.0, 0.1),
                ],
                segments: vec![
                    SegmentDefinition::new(0, 1),
                    SegmentDefinition::new(1, 2),
                    SegmentDefinition::new(1, 3),
                ],
            }],
        })
        .unwrap();
        assert!(matches!(
            analyse_wing(&oracle, 0),
            Err(BalanceError::GeometryInconsistency { .. })
        ));
    }
}
