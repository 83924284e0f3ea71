mod common;

use approx::assert_relative_eq;
use common::*;
use lumped_inertia::config::ConfigError;
use lumped_inertia::{
    run_balance, AircraftSource, AnalyticOracle, BalanceInput, InertiaConfig, MassDistribution,
    SymmetryPlane,
};
use pretty_assertions::assert_eq;

const GLIDER: &str = r#"
name: Glider
wings:
  - name: Wing
    symmetry: 2
    sections:
      - leading_edge: [2.0, 7.5, 0.4]
        chord: 0.5
      - leading_edge: [1.8, 0.0, 0.0]
        chord: 1.0
        thickness: 0.14
      - leading_edge: [1.9, 3.0, 0.1]
        chord: 0.8
    segments:
      - inner: 2
        outer: 0
      - inner: 1
        outer: 2
fuselages:
  - name: Pod
    frames:
      - center: [0.0, 0.0, 0.0]
        width: 0.1
        height: 0.1
      - center: [1.0, 0.0, 0.0]
        width: 0.7
        height: 0.9
      - center: [7.0, 0.0, 0.2]
        width: 0.1
        height: 0.2
    segments:
      - inner: 1
        outer: 2
      - inner: 0
        outer: 1
"#;

const GLIDER_INPUT: &str = r#"
center_of_gravity: [2.1, 0.0, 0.05]
masses:
  fuselages:
    - [40.0, 15.0]
  wings:
    - segments: [12.0, 30.0]
      mirrored: [13.0, 30.0]
"#;

#[test]
fn test_glider_from_yaml() {
    let aircraft = write_text(GLIDER);
    let input = write_text(GLIDER_INPUT);

    let definition = AircraftSource::parse(&aircraft.path().display().to_string())
        .load()
        .unwrap();
    assert_eq!(definition.wings[0].symmetry, SymmetryPlane::Xz);
    assert_relative_eq!(definition.wings[0].sections[0].thickness, 0.12);

    let input = BalanceInput::from_file(input.path()).unwrap();
    let config = InertiaConfig {
        mass_distribution: MassDistribution::AreaWeighted,
        ..InertiaConfig::with_spacing(0.25)
    };
    let mut oracle = AnalyticOracle::new(definition).unwrap();
    let report = run_balance(&mut oracle, &config, &input).unwrap();

    assert_eq!(report.wings.wings[0].section_order, vec![1, 2, 0]);
    assert_eq!(report.fuselages.fuselages[0].section_order, vec![0, 1, 2]);
    assert_relative_eq!(report.inertia.fuselages.mass(), 55.0, epsilon = 1e-9);
    assert_relative_eq!(report.inertia.wings.mass(), 12.0 + 13.0 + 60.0, epsilon = 1e-9);
    assert_tensor_valid(&report.inertia.total);
    // the heavier mirrored tip breaks the lateral symmetry
    assert!(report.inertia.wings.tensor.ixy.abs() > 0.0);
}

#[test]
fn test_inertia_config_round_trip() {
    let config = InertiaConfig {
        spacing: 0.3,
        wing_chord_subdivisions: 7,
        profile_samples: 48,
        mass_distribution: MassDistribution::AreaWeighted,
    };
    let file = write_yaml(&config);
    assert_eq!(InertiaConfig::from_file(file.path()).unwrap(), config);
}

#[test]
fn test_inertia_config_rejects_coarse_profile() {
    let file = write_text("profile_samples: 2\n");
    assert!(matches!(
        InertiaConfig::from_file(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_unknown_symmetry_code_rejected() {
    let file = write_text(&GLIDER.replace("symmetry: 2", "symmetry: 7"));
    assert!(matches!(
        AircraftSource::File(file.path().to_path_buf()).load(),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_segment_referencing_missing_section_rejected() {
    let file = write_text(&GLIDER.replace("inner: 2\n        outer: 0", "inner: 2\n        outer: 5"));
    assert!(matches!(
        AircraftSource::File(file.path().to_path_buf()).load(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_preset_names() {
    for name in ["bwb", "blended_wing_body", "Conventional"] {
        assert!(matches!(AircraftSource::parse(name), AircraftSource::Programmed(_)));
    }
    let definition = AircraftSource::parse("bwb").load().unwrap();
    assert_eq!(definition.wings.len(), 2);
    assert!(definition.fuselages.is_empty());
}
