use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

use crate::components::{MeanAerodynamicChord, SymmetryPlane};
use crate::config::{load_yaml, ConfigError};
use crate::oracle::{check_parameter, GeometryOracle, OracleError};
use crate::utils::{
    lerp, lerp_point, quad_area, shoelace_area, ComponentId, ReferencePlane,
    NACA_SECTION_AREA_COEFF,
};

const SURFACE_SPAN_SAMPLES: usize = 8;
const SURFACE_CHORD_SAMPLES: usize = 16;

fn default_thickness() -> f64 {
    0.12
}

/// Airfoil section of a wing: leading edge, chord along +x and thickness ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingSection {
    /// Leading edge position (m).
    pub leading_edge: Vector3<f64>,
    /// Chord length (m).
    pub chord: f64,
    /// Maximum thickness to chord ratio of the NACA 4-digit profile.
    #[serde(default = "default_thickness")]
    pub thickness: f64,
}

impl WingSection {
    pub fn new(leading_edge: Vector3<f64>, chord: f64, thickness: f64) -> Self {
        Self {
            leading_edge,
            chord,
            thickness,
        }
    }

    fn trailing_edge(&self) -> Vector3<f64> {
        self.leading_edge + Vector3::x() * self.chord
    }

    fn section_area(&self) -> f64 {
        NACA_SECTION_AREA_COEFF * self.thickness * self.chord * self.chord
    }
}

/// A segment between two sections, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentDefinition {
    pub inner: usize,
    pub outer: usize,
}

impl SegmentDefinition {
    pub fn new(inner: usize, outer: usize) -> Self {
        Self { inner, outer }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingDefinition {
    pub name: String,
    #[serde(default)]
    pub symmetry: SymmetryPlane,
    pub sections: Vec<WingSection>,
    /// Segments in any order.
    pub segments: Vec<SegmentDefinition>,
}

/// Elliptical fuselage frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuselageFrame {
    pub center: Vector3<f64>,
    /// Lateral extent (m).
    pub width: f64,
    /// Vertical extent (m).
    pub height: f64,
}

impl FuselageFrame {
    pub fn new(center: Vector3<f64>, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuselageDefinition {
    pub name: String,
    #[serde(default)]
    pub symmetry: SymmetryPlane,
    pub frames: Vec<FuselageFrame>,
    pub segments: Vec<SegmentDefinition>,
}

/// Parametric description of an aircraft made of lofted wings and fuselages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftDefinition {
    pub name: String,
    #[serde(default)]
    pub fuselages: Vec<FuselageDefinition>,
    #[serde(default)]
    pub wings: Vec<WingDefinition>,
}

impl AircraftDefinition {
    /// Reads and validates a YAML aircraft definition.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let definition: Self = load_yaml(path)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(msg));

        for wing in &self.wings {
            if wing.segments.is_empty() {
                return invalid(format!("wing '{}' has no segments", wing.name));
            }
            for (i, section) in wing.sections.iter().enumerate() {
                if !(section.chord.is_finite() && section.chord > 0.0) {
                    return invalid(format!(
                        "wing '{}' section {} has non-positive chord",
                        wing.name, i
                    ));
                }
                if !(0.0..1.0).contains(&section.thickness) {
                    return invalid(format!(
                        "wing '{}' section {} thickness ratio must be in [0, 1)",
                        wing.name, i
                    ));
                }
            }
            check_segments(&wing.name, &wing.segments, wing.sections.len())?;
        }

        for fuselage in &self.fuselages {
            if fuselage.segments.is_empty() {
                return invalid(format!("fuselage '{}' has no segments", fuselage.name));
            }
            for (i, frame) in fuselage.frames.iter().enumerate() {
                if frame.width < 0.0 || frame.height < 0.0 {
                    return invalid(format!(
                        "fuselage '{}' frame {} has negative dimensions",
                        fuselage.name, i
                    ));
                }
            }
            check_segments(&fuselage.name, &fuselage.segments, fuselage.frames.len())?;
        }

        Ok(())
    }

    /// Fuselage-less blended wing body with tip winglets.
    ///
    /// The outer wing segments are deliberately listed out of spanwise order.
    pub fn blended_wing_body() -> Self {
        Self {
            name: "BlendedWingBody".to_string(),
            fuselages: Vec::new(),
            wings: vec![
                WingDefinition {
                    name: "MainWing".to_string(),
                    symmetry: SymmetryPlane::Xz,
                    sections: vec![
                        WingSection::new(Vector3::new(0.0, 0.0, 0.0), 20.0, 0.15),
                        WingSection::new(Vector3::new(8.0, 6.0, 0.2), 10.0, 0.12),
                        WingSection::new(Vector3::new(14.0, 12.0, 0.8), 6.0, 0.10),
                        WingSection::new(Vector3::new(18.0, 20.0, 1.5), 2.5, 0.10),
                    ],
                    segments: vec![
                        SegmentDefinition::new(2, 3),
                        SegmentDefinition::new(0, 1),
                        SegmentDefinition::new(1, 2),
                    ],
                },
                WingDefinition {
                    name: "Winglet".to_string(),
                    symmetry: SymmetryPlane::Xz,
                    sections: vec![
                        WingSection::new(Vector3::new(17.9, 20.0, 1.5), 2.4, 0.09),
                        WingSection::new(Vector3::new(19.5, 20.3, 4.0), 1.2, 0.09),
                    ],
                    segments: vec![SegmentDefinition::new(0, 1)],
                },
            ],
        }
    }

    /// Tube and wing transport with a conventional empennage.
    pub fn conventional() -> Self {
        Self {
            name: "Conventional".to_string(),
            fuselages: vec![FuselageDefinition {
                name: "Fuselage".to_string(),
                symmetry: SymmetryPlane::None,
                frames: vec![
                    FuselageFrame::new(Vector3::new(0.0, 0.0, 0.0), 0.2, 0.2),
                    FuselageFrame::new(Vector3::new(3.0, 0.0, 0.2), 3.0, 3.2),
                    FuselageFrame::new(Vector3::new(10.0, 0.0, 0.3), 3.6, 3.8),
                    FuselageFrame::new(Vector3::new(25.0, 0.0, 0.3), 3.6, 3.8),
                    FuselageFrame::new(Vector3::new(35.0, 0.0, 1.2), 0.8, 1.2),
                ],
                segments: vec![
                    SegmentDefinition::new(2, 3),
                    SegmentDefinition::new(0, 1),
                    SegmentDefinition::new(3, 4),
                    SegmentDefinition::new(1, 2),
                ],
            }],
            wings: vec![
                WingDefinition {
                    name: "MainWing".to_string(),
                    symmetry: SymmetryPlane::Xz,
                    sections: vec![
                        WingSection::new(Vector3::new(12.0, 0.0, -1.0), 6.0, 0.14),
                        WingSection::new(Vector3::new(14.0, 6.0, -0.7), 4.0, 0.12),
                        WingSection::new(Vector3::new(17.0, 17.0, 0.0), 1.6, 0.10),
                    ],
                    segments: vec![SegmentDefinition::new(0, 1), SegmentDefinition::new(1, 2)],
                },
                WingDefinition {
                    name: "HorizontalTail".to_string(),
                    symmetry: SymmetryPlane::Xz,
                    sections: vec![
                        WingSection::new(Vector3::new(31.0, 0.0, 0.5), 3.0, 0.10),
                        WingSection::new(Vector3::new(33.0, 6.0, 0.7), 1.4, 0.10),
                    ],
                    segments: vec![SegmentDefinition::new(0, 1)],
                },
                WingDefinition {
                    name: "VerticalTail".to_string(),
                    symmetry: SymmetryPlane::None,
                    sections: vec![
                        WingSection::new(Vector3::new(29.0, 0.0, 1.8), 4.5, 0.10),
                        WingSection::new(Vector3::new(33.5, 0.0, 7.5), 2.0, 0.10),
                    ],
                    segments: vec![SegmentDefinition::new(0, 1)],
                },
            ],
        }
    }
}

fn check_segments(
    name: &str,
    segments: &[SegmentDefinition],
    section_count: usize,
) -> Result<(), ConfigError> {
    for (i, seg) in segments.iter().enumerate() {
        if seg.inner >= section_count || seg.outer >= section_count {
            return Err(ConfigError::ValidationError(format!(
                "'{}' segment {} references a missing section ({} -> {}, {} defined)",
                name, i, seg.inner, seg.outer, section_count
            )));
        }
        if seg.inner == seg.outer {
            return Err(ConfigError::ValidationError(format!(
                "'{}' segment {} starts and ends at section {}",
                name, i, seg.inner
            )));
        }
    }
    Ok(())
}

/// Half thickness of a NACA 4-digit symmetric profile with closed trailing edge,
/// as a fraction of the chord.
fn naca_half_thickness(thickness: f64, xsi: f64) -> f64 {
    let x = xsi.clamp(0.0, 1.0);
    5.0 * thickness
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1036 * x.powi(4))
}

/// In-memory geometry oracle over an [`AircraftDefinition`].
///
/// Wing segments are ruled surfaces between their two airfoil sections;
/// fuselage segments are ruled surfaces between elliptical frames.
#[derive(Debug, Clone)]
pub struct AnalyticOracle {
    definition: AircraftDefinition,
}

impl AnalyticOracle {
    pub fn new(definition: AircraftDefinition) -> Result<Self, ConfigError> {
        definition.validate()?;
        Ok(Self { definition })
    }

    pub fn definition(&self) -> &AircraftDefinition {
        &self.definition
    }

    fn wing(&self, wing: usize) -> Result<&WingDefinition, OracleError> {
        self.definition
            .wings
            .get(wing)
            .ok_or(OracleError::InvalidComponent(ComponentId::Wing(wing)))
    }

    fn fuselage(&self, fuselage: usize) -> Result<&FuselageDefinition, OracleError> {
        self.definition
            .fuselages
            .get(fuselage)
            .ok_or(OracleError::InvalidComponent(ComponentId::Fuselage(fuselage)))
    }

    fn wing_segment(
        &self,
        wing: usize,
        segment: usize,
    ) -> Result<(&WingSection, &WingSection), OracleError> {
        let def = self.wing(wing)?;
        let seg = def.segments.get(segment).ok_or(OracleError::InvalidSegment {
            component: ComponentId::Wing(wing),
            segment,
        })?;
        Ok((&def.sections[seg.inner], &def.sections[seg.outer]))
    }

    fn fuselage_segment(
        &self,
        fuselage: usize,
        segment: usize,
    ) -> Result<(&FuselageFrame, &FuselageFrame), OracleError> {
        let def = self.fuselage(fuselage)?;
        let seg = def.segments.get(segment).ok_or(OracleError::InvalidSegment {
            component: ComponentId::Fuselage(fuselage),
            segment,
        })?;
        Ok((&def.frames[seg.inner], &def.frames[seg.outer]))
    }

    /// Unit normal of the chord plane, pointing up (or to starboard for fins).
    fn thickness_direction(inner: &WingSection, outer: &WingSection) -> Vector3<f64> {
        let span = outer.leading_edge - inner.leading_edge;
        let normal = Vector3::x().cross(&span);
        if normal.norm() < 1e-12 {
            return Vector3::z();
        }
        let normal = normal.normalize();
        if normal.z < -1e-12 || (normal.z.abs() <= 1e-12 && normal.y < 0.0) {
            -normal
        } else {
            normal
        }
    }

    /// Spanwise distance between two sections, ignoring chordwise sweep.
    fn spanwise_distance(inner: &WingSection, outer: &WingSection) -> f64 {
        let delta = outer.leading_edge - inner.leading_edge;
        Vector2::new(delta.y, delta.z).norm()
    }

    fn surface_point(
        &self,
        wing: usize,
        segment: usize,
        eta: f64,
        xsi: f64,
        side: f64,
    ) -> Result<Vector3<f64>, OracleError> {
        let eta = check_parameter("eta", eta)?;
        let xsi = check_parameter("xsi", xsi)?;
        let (inner, outer) = self.wing_segment(wing, segment)?;
        let chord = lerp(inner.chord, outer.chord, eta);
        let thickness = lerp(inner.thickness, outer.thickness, eta);
        let leading_edge = lerp_point(&inner.leading_edge, &outer.leading_edge, eta);
        let normal = Self::thickness_direction(inner, outer);
        Ok(leading_edge
            + Vector3::x() * (xsi * chord)
            + normal * (side * chord * naca_half_thickness(thickness, xsi)))
    }

    fn segment_surface_area(&self, wing: usize, segment: usize) -> Result<f64, OracleError> {
        let chord_stations: Vec<f64> = (0..=SURFACE_CHORD_SAMPLES)
            .map(|k| 0.5 * (1.0 - (PI * k as f64 / SURFACE_CHORD_SAMPLES as f64).cos()))
            .collect();
        let mut area = 0.0;
        for side in [1.0, -1.0] {
            for j in 0..SURFACE_SPAN_SAMPLES {
                let eta0 = j as f64 / SURFACE_SPAN_SAMPLES as f64;
                let eta1 = (j + 1) as f64 / SURFACE_SPAN_SAMPLES as f64;
                for pair in chord_stations.windows(2) {
                    let a = self.surface_point(wing, segment, eta0, pair[0], side)?;
                    let b = self.surface_point(wing, segment, eta1, pair[0], side)?;
                    let c = self.surface_point(wing, segment, eta1, pair[1], side)?;
                    let d = self.surface_point(wing, segment, eta0, pair[1], side)?;
                    area += quad_area(&a, &b, &c, &d);
                }
            }
        }
        Ok(area)
    }
}

impl GeometryOracle for AnalyticOracle {
    fn fuselage_count(&self) -> usize {
        self.definition.fuselages.len()
    }

    fn wing_count(&self) -> usize {
        self.definition.wings.len()
    }

    fn symmetry(&self, component: ComponentId) -> Result<SymmetryPlane, OracleError> {
        match component {
            ComponentId::Fuselage(i) => Ok(self.fuselage(i)?.symmetry),
            ComponentId::Wing(i) => Ok(self.wing(i)?.symmetry),
        }
    }

    fn section_count(&self, component: ComponentId) -> Result<usize, OracleError> {
        match component {
            ComponentId::Fuselage(i) => Ok(self.fuselage(i)?.frames.len()),
            ComponentId::Wing(i) => Ok(self.wing(i)?.sections.len()),
        }
    }

    fn segment_count(&self, component: ComponentId) -> Result<usize, OracleError> {
        match component {
            ComponentId::Fuselage(i) => Ok(self.fuselage(i)?.segments.len()),
            ComponentId::Wing(i) => Ok(self.wing(i)?.segments.len()),
        }
    }

    fn segment_sections(
        &self,
        component: ComponentId,
        segment: usize,
    ) -> Result<(usize, usize), OracleError> {
        let segments = match component {
            ComponentId::Fuselage(i) => &self.fuselage(i)?.segments,
            ComponentId::Wing(i) => &self.wing(i)?.segments,
        };
        segments
            .get(segment)
            .map(|s| (s.inner, s.outer))
            .ok_or(OracleError::InvalidSegment { component, segment })
    }

    fn fuselage_point(
        &self,
        fuselage: usize,
        segment: usize,
        eta: f64,
        zeta: f64,
    ) -> Result<Vector3<f64>, OracleError> {
        let eta = check_parameter("eta", eta)?;
        let zeta = check_parameter("zeta", zeta)?;
        let (inner, outer) = self.fuselage_segment(fuselage, segment)?;
        let center = lerp_point(&inner.center, &outer.center, eta);
        let half_width = 0.5 * lerp(inner.width, outer.width, eta);
        let half_height = 0.5 * lerp(inner.height, outer.height, eta);
        let theta = 2.0 * PI * zeta;
        Ok(center + Vector3::new(0.0, half_width * theta.cos(), half_height * theta.sin()))
    }

    fn wing_chord_point(
        &self,
        wing: usize,
        segment: usize,
        eta: f64,
        xsi: f64,
    ) -> Result<Vector3<f64>, OracleError> {
        self.surface_point(wing, segment, eta, xsi, 0.0)
    }

    fn wing_upper_point(
        &self,
        wing: usize,
        segment: usize,
        eta: f64,
        xsi: f64,
    ) -> Result<Vector3<f64>, OracleError> {
        self.surface_point(wing, segment, eta, xsi, 1.0)
    }

    fn wing_lower_point(
        &self,
        wing: usize,
        segment: usize,
        eta: f64,
        xsi: f64,
    ) -> Result<Vector3<f64>, OracleError> {
        self.surface_point(wing, segment, eta, xsi, -1.0)
    }

    fn wing_reference_area(&self, wing: usize, plane: ReferencePlane) -> Result<f64, OracleError> {
        let def = self.wing(wing)?;
        let project = |p: Vector3<f64>| match plane {
            ReferencePlane::Xy => Vector2::new(p.x, p.y),
            ReferencePlane::Xz => Vector2::new(p.x, p.z),
            ReferencePlane::Yz => Vector2::new(p.y, p.z),
        };
        Ok(def
            .segments
            .iter()
            .map(|seg| {
                let inner = &def.sections[seg.inner];
                let outer = &def.sections[seg.outer];
                let quad = [
                    project(inner.leading_edge),
                    project(outer.leading_edge),
                    project(outer.trailing_edge()),
                    project(inner.trailing_edge()),
                ];
                shoelace_area(&quad).abs()
            })
            .sum())
    }

    fn wing_volume(&self, wing: usize) -> Result<f64, OracleError> {
        let count = self.wing(wing)?.segments.len();
        (0..count).map(|seg| self.wing_segment_volume(wing, seg)).sum()
    }

    fn wing_segment_volume(&self, wing: usize, segment: usize) -> Result<f64, OracleError> {
        let (inner, outer) = self.wing_segment(wing, segment)?;
        let (a0, a1) = (inner.section_area(), outer.section_area());
        let length = Self::spanwise_distance(inner, outer);
        Ok(length * (a0 + a1 + (a0 * a1).sqrt()) / 3.0)
    }

    fn wing_mac(&self, wing: usize) -> Result<MeanAerodynamicChord, OracleError> {
        let def = self.wing(wing)?;
        let mut area = 0.0;
        let mut length = 0.0;
        let mut position = Vector3::zeros();
        for seg in &def.segments {
            let inner = &def.sections[seg.inner];
            let outer = &def.sections[seg.outer];
            let (c1, c2) = (inner.chord, outer.chord);
            let panel_area = 0.5 * Self::spanwise_distance(inner, outer) * (c1 + c2);
            let panel_mac = 2.0 / 3.0 * (c1 * c1 + c1 * c2 + c2 * c2) / (c1 + c2);
            let eta = (c1 + 2.0 * c2) / (3.0 * (c1 + c2));
            area += panel_area;
            length += panel_area * panel_mac;
            position += lerp_point(&inner.leading_edge, &outer.leading_edge, eta) * panel_area;
        }
        if area <= 0.0 {
            return Err(OracleError::Degenerate {
                component: ComponentId::Wing(wing),
                reason: "zero planform area".to_string(),
            });
        }
        Ok(MeanAerodynamicChord {
            length: length / area,
            position: position / area,
        })
    }

    fn wing_span(&self, wing: usize) -> Result<f64, OracleError> {
        let def = self.wing(wing)?;
        let mut points: Vec<Vector3<f64>> = def
            .sections
            .iter()
            .flat_map(|s| [s.leading_edge, s.trailing_edge()])
            .collect();

        let extent = |points: &[Vector3<f64>], axis: usize| {
            let (lo, hi) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
                (lo.min(p[axis]), hi.max(p[axis]))
            });
            hi - lo
        };
        let axis = if extent(&points, 1) >= extent(&points, 2) {
            1
        } else {
            2
        };

        if def.symmetry.is_symmetric() {
            let mirrored: Vec<Vector3<f64>> =
                points.iter().map(|p| def.symmetry.mirror(p)).collect();
            points.extend(mirrored);
        }
        Ok(extent(&points, axis))
    }

    fn wing_surface_area(&self, wing: usize) -> Result<f64, OracleError> {
        let count = self.wing(wing)?.segments.len();
        (0..count)
            .map(|seg| self.segment_surface_area(wing, seg))
            .sum()
    }
}
