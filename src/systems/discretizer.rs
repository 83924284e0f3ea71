//! Sampling of component surfaces into lumped mass nodes.
//!
//! Every node carries a parametric weight; the weights of one segment sum
//! to one. They are only consulted when mass is distributed by area, the
//! default splits segment mass equally among nodes.

use nalgebra::Vector3;
use tracing::debug;

use crate::components::{FuselageGeometry, WingGeometry};
use crate::oracle::GeometryOracle;
use crate::utils::{
    lerp_point, parametric_weights, subdivisions, trapezoid_weights, triangular_number,
    BalanceError, GOLDEN_ANGLE, MAX_STATION_SPOKES, MAX_SUBDIVISIONS, MAX_WING_CHORD_SUBDIVISIONS,
    SPOKE_OUTER_FRACTION,
};

/// Nodes sampled on one segment of a component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentNodes {
    /// Oracle index of the sampled segment.
    pub segment: usize,
    pub points: Vec<Vector3<f64>>,
    pub weights: Vec<f64>,
}

impl SegmentNodes {
    fn new(segment: usize) -> Self {
        Self {
            segment,
            ..Default::default()
        }
    }

    fn push(&mut self, point: Vector3<f64>, weight: f64) {
        self.points.push(point);
        self.weights.push(weight);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn clamped_subdivisions(
    length: f64,
    spacing: f64,
    what: &'static str,
    segment: usize,
) -> Result<usize, BalanceError> {
    let (count, clamped) = subdivisions(length, spacing);
    if clamped {
        debug!(segment, length, spacing, what, "degenerate subdivision count clamped to 1");
    }
    if count > MAX_SUBDIVISIONS {
        return Err(BalanceError::InvalidInput(format!(
            "{} subdivisions of segment {} exceed {} (length {}, spacing {})",
            what, segment, MAX_SUBDIVISIONS, length, spacing
        )));
    }
    Ok(count)
}

/// Relative radii of the interior spokes of a cross-section.
///
/// Square-root spacing gives equal area per spoke; the sequence is shifted
/// so the outermost spoke sits at 0.98 of the local radius and any value
/// pushed below zero is dropped.
pub fn spoke_fractions(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let raw: Vec<f64> = (0..count)
        .map(|i| (i as f64 / count as f64).sqrt())
        .collect();
    let shift = raw[count - 1] - SPOKE_OUTER_FRACTION;
    raw.into_iter()
        .map(|d| d - shift)
        .filter(|d| *d >= 0.0)
        .collect()
}

/// Samples one fuselage segment, addressed by its position in the chain.
///
/// At each longitudinal station the shell is walked once around the
/// circumference, followed by a sunflower pattern of interior spokes
/// centered on the interpolated section centroid.
pub fn fuselage_segment_nodes<O: GeometryOracle>(
    oracle: &O,
    geometry: &FuselageGeometry,
    position: usize,
    spacing: f64,
) -> Result<SegmentNodes, BalanceError> {
    let link = geometry.chain.get(position).ok_or_else(|| {
        BalanceError::InvalidInput(format!(
            "fuselage {} has no segment at chain position {}",
            geometry.index, position
        ))
    })?;
    let segment = link.segment;
    let fuselage = geometry.index;

    let subd_l = clamped_subdivisions(geometry.segment_lengths[position], spacing, "longitudinal", segment)?;
    let subd_c = clamped_subdivisions(geometry.section_perimeters[position], spacing, "circumferential", segment)?;
    let subd_r = clamped_subdivisions(0.5 * geometry.section_widths[position], spacing, "radial", segment)?;

    let spoke_count = subd_r
        .checked_mul(subd_c)
        .filter(|&n| n <= MAX_STATION_SPOKES)
        .ok_or_else(|| {
            BalanceError::InvalidInput(format!(
                "fuselage {} segment {} needs more than {} spokes per station at spacing {}",
                fuselage, segment, MAX_STATION_SPOKES, spacing
            ))
        })?;
    let spokes = spoke_fractions(spoke_count);
    let angles: Vec<f64> = (0..spokes.len()).map(|i| GOLDEN_ANGLE * i as f64).collect();

    let zetas: Vec<f64> = (0..=subd_c).map(|k| k as f64 / subd_c as f64).collect();
    let shell_weights = parametric_weights(&zetas);
    let (shell_share, spoke_share) = if spokes.is_empty() {
        (1.0, 0.0)
    } else {
        (0.5, 0.5 / spokes.len() as f64)
    };

    let inner_center = geometry.section_centers[position];
    let outer_center = geometry.section_centers[position + 1];
    let station_weights = trapezoid_weights(subd_l);

    let mut nodes = SegmentNodes::new(segment);
    for (j, station_weight) in station_weights.iter().enumerate() {
        let eta = j as f64 / subd_l as f64;
        let mut last = inner_center;
        for (zeta, w) in zetas.iter().zip(&shell_weights) {
            last = oracle.fuselage_point(fuselage, segment, eta, *zeta)?;
            nodes.push(last, station_weight * shell_share * w);
        }

        let center = lerp_point(&inner_center, &outer_center, eta);
        let radius = ((last.y - center.y).powi(2) + (last.z - center.z).powi(2)).sqrt();
        for (d, theta) in spokes.iter().zip(&angles) {
            let r = radius * d;
            nodes.push(
                Vector3::new(last.x, center.y + r * theta.cos(), center.z + r * theta.sin()),
                station_weight * spoke_share,
            );
        }
    }

    debug!(fuselage, segment, subd_l, subd_c, subd_r, nodes = nodes.len(), "fuselage segment sampled");
    Ok(nodes)
}

/// Chordwise stations along one surface, clustered towards the leading edge.
///
/// The `k`-th station sits at `T(k) / T(n + 1)` of the chord, `T` being the
/// triangular numbers; a surface parameterised from the trailing edge gets
/// the mirrored positions.
pub fn chordwise_stations(subdivisions: usize, from_leading_edge: bool) -> Vec<f64> {
    let denominator = triangular_number(subdivisions + 1) as f64;
    (0..=subdivisions)
        .map(|k| {
            let xsi = triangular_number(k) as f64 / denominator;
            if from_leading_edge {
                xsi
            } else {
                1.0 - xsi
            }
        })
        .collect()
}

/// Samples one wing segment, addressed by its position in the chain.
///
/// Each spanwise station contributes both ends of the lower surface and
/// a lower/upper pair at every chordwise station. A mirrored half samples
/// the primary surface and reflects every node through its symmetry plane.
pub fn wing_segment_nodes<O: GeometryOracle>(
    oracle: &O,
    geometry: &WingGeometry,
    position: usize,
    spacing: f64,
    chord_subdivisions: usize,
) -> Result<SegmentNodes, BalanceError> {
    let link = geometry.chain.get(position).ok_or_else(|| {
        BalanceError::InvalidInput(format!(
            "wing {} has no segment at chain position {}",
            geometry.index, position
        ))
    })?;
    let segment = link.segment;
    let wing = geometry.index;

    if chord_subdivisions > MAX_WING_CHORD_SUBDIVISIONS {
        return Err(BalanceError::InvalidInput(format!(
            "{} chordwise subdivisions exceed {}",
            chord_subdivisions, MAX_WING_CHORD_SUBDIVISIONS
        )));
    }
    let subd_l = clamped_subdivisions(geometry.segment_lengths[position], spacing, "spanwise", segment)?;
    let station_weights = trapezoid_weights(subd_l);

    let mut nodes = SegmentNodes::new(segment);
    for (j, station_weight) in station_weights.iter().enumerate() {
        let eta = j as f64 / subd_l as f64;
        let start = oracle.wing_lower_point(wing, segment, eta, 0.0)?;
        let end = oracle.wing_lower_point(wing, segment, eta, 1.0)?;
        let stations = chordwise_stations(chord_subdivisions, start.x < end.x);
        let place = |p: Vector3<f64>| {
            if geometry.is_mirror {
                geometry.symmetry.mirror(&p)
            } else {
                p
            }
        };

        let mut lower_params = vec![0.0, 1.0];
        lower_params.extend_from_slice(&stations);
        let lower_weights = parametric_weights(&lower_params);
        let upper_weights = parametric_weights(&stations);
        let half = 0.5 * station_weight;

        nodes.push(place(start), half * lower_weights[0]);
        nodes.push(place(end), half * lower_weights[1]);
        for (k, xsi) in stations.iter().enumerate() {
            let lower = oracle.wing_lower_point(wing, segment, eta, *xsi)?;
            let upper = oracle.wing_upper_point(wing, segment, eta, *xsi)?;
            nodes.push(place(lower), half * lower_weights[k + 2]);
            nodes.push(place(upper), half * upper_weights[k]);
        }
    }

    debug!(wing, segment, subd_l, chord_subdivisions, nodes = nodes.len(), "wing segment sampled");
    Ok(nodes)
}
