use std::f64::consts::PI;

/// Golden angle (rad) used for the sunflower-seed spoke packing.
pub const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_79);

/// Fraction of the local radius reached by the outermost interior spoke.
pub const SPOKE_OUTER_FRACTION: f64 = 0.98;

/// Quarter-chord parameter when a surface parameterisation starts at the leading edge.
pub const QUARTER_CHORD: f64 = 0.25;
/// Quarter-chord parameter when a surface parameterisation starts at the trailing edge.
pub const QUARTER_CHORD_REVERSED: f64 = 0.75;

// Analysis defaults
pub const DEFAULT_SPACING: f64 = 0.5; // m
pub const DEFAULT_WING_CHORD_SUBDIVISIONS: usize = 5;
pub const DEFAULT_PROFILE_SAMPLES: usize = 36;
pub const MIN_PROFILE_SAMPLES: usize = 3;
pub const MIN_SPACING: f64 = 1e-3; // m
pub const MAX_WING_CHORD_SUBDIVISIONS: usize = 1_000;

/// Upper bound on subdivisions along one direction of a segment.
pub const MAX_SUBDIVISIONS: usize = 100_000;
/// Upper bound on interior spokes at one fuselage station.
pub const MAX_STATION_SPOKES: usize = 1_000_000;

/// NACA 4-digit section area coefficient, A = k * t/c * c^2.
pub const NACA_SECTION_AREA_COEFF: f64 = 0.685;

/// Tolerance used when comparing oracle points for equality.
pub const POINT_EPSILON: f64 = 1e-9;
