mod common;

use approx::assert_relative_eq;
use common::*;
use lumped_inertia::components::{EngineData, SegmentMasses, WingSegmentMasses};
use lumped_inertia::systems::{engine_inertia, wing_segment_nodes};
use lumped_inertia::{
    run_balance, AnalyticOracle, BalanceError, BalanceInput, InertiaConfig, InertiaTensor, MassDistribution,
    SymmetryPlane,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

#[test]
fn test_conventional_balance() {
    let mut oracle = conventional_oracle();
    let input = conventional_input();
    let report = run_balance(&mut oracle, &InertiaConfig::default(), &input).unwrap();
    let inertia = &report.inertia;

    // fuselage once, main wing and tailplane doubled, fin once
    assert_relative_eq!(inertia.fuselages.mass(), 5700.0, epsilon = 1e-6);
    assert_relative_eq!(inertia.wings.mass(), 2.0 * 4500.0 + 2.0 * 250.0 + 300.0, epsilon = 1e-6);

    assert_tensor_valid(&inertia.fuselages.tensor);
    assert_tensor_valid(&inertia.wings.tensor);
    assert_tensor_valid(&inertia.total);
    assert_tensor_eq(
        &inertia.total,
        &(inertia.fuselages.tensor + inertia.wings.tensor + inertia.engines),
        1e-12,
    );

    // a long fuselage and a wide wing: pitch and yaw dominate roll
    assert!(inertia.total.iyy > inertia.total.ixx);
    assert!(inertia.total.izz > inertia.total.ixx);
}

#[test]
fn test_blended_wing_body_is_laterally_symmetric() {
    let mut oracle = blended_wing_body_oracle();
    let report = run_balance(&mut oracle, &InertiaConfig::with_spacing(1.0), &blended_wing_body_input()).unwrap();
    let inertia = &report.inertia;

    assert_eq!(inertia.fuselages.node_count(), 0);
    assert_eq!(inertia.engines, InertiaTensor::default());
    let scale = inertia.total.trace();
    assert!(inertia.total.ixy.abs() < 1e-9 * scale);
    assert!(inertia.total.iyz.abs() < 1e-9 * scale);
    // a flying wing spreads its mass spanwise
    assert!(inertia.total.ixx > inertia.total.iyy);
}

#[test]
fn test_finer_spacing_adds_nodes_but_keeps_mass() {
    let input = conventional_input();
    let coarse = run_balance(&mut conventional_oracle(), &InertiaConfig::with_spacing(2.0), &input).unwrap();
    let fine = run_balance(&mut conventional_oracle(), &InertiaConfig::with_spacing(0.5), &input).unwrap();

    assert!(fine.inertia.node_count() > coarse.inertia.node_count());
    assert_relative_eq!(
        fine.inertia.wings.mass() + fine.inertia.fuselages.mass(),
        coarse.inertia.wings.mass() + coarse.inertia.fuselages.mass(),
        epsilon = 1e-6
    );
    // both discretisations describe the same body
    assert_tensor_eq(&fine.inertia.total, &coarse.inertia.total, 0.1);
}

#[test]
fn test_area_weighted_distribution() {
    let input = conventional_input();
    let config = InertiaConfig {
        mass_distribution: MassDistribution::AreaWeighted,
        ..InertiaConfig::with_spacing(1.0)
    };
    let report = run_balance(&mut conventional_oracle(), &config, &input).unwrap();
    assert_relative_eq!(report.inertia.fuselages.mass(), 5700.0, epsilon = 1e-6);
    assert_tensor_valid(&report.inertia.total);
}

#[test]
fn test_wing_nodes_follow_chord_subdivisions() {
    let oracle = conventional_oracle();
    let wings = lumped_inertia::systems::analyse_wings(&oracle).unwrap();
    let tail = &wings.wings[1];
    let coarse = wing_segment_nodes(&oracle, tail, 0, 1.0, 2).unwrap();
    let fine = wing_segment_nodes(&oracle, tail, 0, 1.0, 8).unwrap();
    let stations = coarse.len() / (2 + 2 * 3);
    assert_eq!(coarse.len(), stations * 8);
    assert_eq!(fine.len(), stations * 20);
}

#[test]
fn test_missing_wing_mass() {
    let mut input = conventional_input();
    input.masses.wings.truncate(2);
    let err = run_balance(&mut conventional_oracle(), &InertiaConfig::default(), &input).unwrap_err();
    assert!(matches!(err, BalanceError::MissingMass { segment: 0, .. }));
    assert_eq!(err.to_string(), "Missing segment mass for wing 2, segment 0");
}

#[test]
fn test_invalid_spacing_rejected() {
    let err = run_balance(
        &mut conventional_oracle(),
        &InertiaConfig::with_spacing(0.0),
        &conventional_input(),
    )
    .unwrap_err();
    assert!(matches!(err, BalanceError::Config(_)));
}

#[test]
fn test_engines_about_their_own_centroid() {
    let engines = EngineData {
        name: "Turbofan".to_string(),
        mass: 1000.0,
        placements: vec![
            Vector3::new(10.0, -4.0, -1.0),
            Vector3::new(10.0, 4.0, -1.0),
            Vector3::new(12.0, -8.0, -0.5),
            Vector3::new(12.0, 8.0, -0.5),
        ],
    };
    let centroid = engines.placements.iter().sum::<Vector3<f64>>() / engines.count() as f64;
    let tensor = engine_inertia(&centroid, &engines);
    assert_relative_eq!(tensor.ixy, 0.0, epsilon = 1e-9);
    assert_relative_eq!(tensor.iyz, 0.0, epsilon = 1e-9);
    // x and z offsets are correlated: outboard engines sit further aft and higher
    assert!(tensor.ixz > 0.0);
    assert_relative_eq!(tensor.ixx, 1000.0 * (2.0 * (16.0 + 0.0625) + 2.0 * (64.0 + 0.0625)), epsilon = 1e-9);
}

#[test]
fn test_single_segment_wing_about_origin() {
    let mut definition = straight_wing(2, &[(0, 1)], SymmetryPlane::None);
    definition.wings[0].sections[1].leading_edge = Vector3::new(0.0, 10.0, 0.0);
    let mut oracle = AnalyticOracle::new(definition).unwrap();
    let input = BalanceInput {
        center_of_gravity: Vector3::zeros(),
        masses: SegmentMasses {
            fuselages: vec![],
            wings: vec![WingSegmentMasses {
                segments: vec![100.0],
                mirrored: None,
            }],
        },
        engines: None,
    };
    let report = run_balance(&mut oracle, &InertiaConfig::with_spacing(1.0), &input).unwrap();
    let wing = &report.inertia.wings;

    assert_relative_eq!(wing.mass(), 100.0, epsilon = 1e-9);
    // two lower-surface ends plus six lower/upper pairs per spanwise station
    assert_eq!(wing.node_count() % 14, 0);
    assert!(wing.node_count() > 14);
    let share = 100.0 / wing.node_count() as f64;
    assert!(wing.cloud.masses().iter().all(|m| (m - share).abs() < 1e-12));

    let second_moment: f64 = wing
        .cloud
        .points()
        .iter()
        .zip(wing.cloud.masses())
        .map(|(p, m)| m * p.norm_squared())
        .sum();
    assert_relative_eq!(wing.tensor.trace(), 2.0 * second_moment, max_relative = 1e-9);
    assert_tensor_eq(&report.inertia.total, &wing.tensor, 1e-12);
    // nodes spread 10 m spanwise and 1 m chordwise: roll inertia dominates pitch
    assert!(wing.tensor.ixx > wing.tensor.iyy);
}
