use nalgebra::Vector3;
use tracing::{debug, info, instrument};

use crate::components::{AircraftFuseGeometry, FuselageGeometry};
use crate::oracle::GeometryOracle;
use crate::systems::topology::{ordered_chain, section_order};
use crate::utils::{distance, midpoint, BalanceError, ComponentId, MIN_PROFILE_SAMPLES};

/// Cross-section of a fuselage sampled around its circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub centroid: Vector3<f64>,
    pub perimeter: f64,
    pub width: f64,
    pub height: f64,
}

/// Samples the cross-section at `eta` of a fuselage segment at `samples`
/// evenly spaced circumferential stations.
pub fn sample_profile<O: GeometryOracle>(
    oracle: &O,
    fuselage: usize,
    segment: usize,
    eta: f64,
    samples: usize,
) -> Result<ProfileSample, BalanceError> {
    if samples < MIN_PROFILE_SAMPLES {
        return Err(BalanceError::InvalidInput(format!(
            "profile needs at least {} samples, got {}",
            MIN_PROFILE_SAMPLES, samples
        )));
    }
    let points = (0..samples)
        .map(|i| oracle.fuselage_point(fuselage, segment, eta, i as f64 / samples as f64))
        .collect::<Result<Vec<_>, _>>()?;

    let centroid = points.iter().sum::<Vector3<f64>>() / samples as f64;
    let perimeter = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| distance(a, b))
        .sum();

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut z_min, mut z_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &points {
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
        z_min = z_min.min(p.z);
        z_max = z_max.max(p.z);
    }

    Ok(ProfileSample {
        centroid,
        perimeter,
        width: y_max - y_min,
        height: z_max - z_min,
    })
}

/// Evaluates the geometry of one fuselage, ordering its segments nose to tail.
#[instrument(skip(oracle))]
pub fn analyse_fuselage<O: GeometryOracle>(
    oracle: &O,
    fuselage: usize,
    profile_samples: usize,
) -> Result<FuselageGeometry, BalanceError> {
    let component = ComponentId::Fuselage(fuselage);
    let symmetry = oracle.symmetry(component)?;
    let section_count = oracle.section_count(component)?;
    let segment_count = oracle.segment_count(component)?;

    let chain = ordered_chain(oracle, component, |oracle, segment| {
        Ok(sample_profile(oracle, fuselage, segment, 0.0, profile_samples)?
            .centroid
            .x)
    })?;
    let order = section_order(&chain);

    let mut profiles = Vec::with_capacity(chain.len() + 1);
    for link in &chain {
        profiles.push(sample_profile(oracle, fuselage, link.segment, 0.0, profile_samples)?);
    }
    if let Some(tail) = chain.last() {
        profiles.push(sample_profile(oracle, fuselage, tail.segment, 1.0, profile_samples)?);
    }

    let section_centers: Vec<Vector3<f64>> = profiles.iter().map(|p| p.centroid).collect();
    let segment_lengths: Vec<f64> = section_centers
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .collect();
    let segment_centers = section_centers
        .windows(2)
        .map(|pair| midpoint(&pair[0], &pair[1]))
        .collect();
    let length = segment_lengths.iter().sum();

    let geometry = FuselageGeometry {
        index: fuselage,
        symmetry,
        section_count,
        segment_count,
        chain,
        section_order: order,
        section_perimeters: profiles.iter().map(|p| p.perimeter).collect(),
        section_widths: profiles.iter().map(|p| p.width).collect(),
        section_heights: profiles.iter().map(|p| p.height).collect(),
        section_centers,
        segment_lengths,
        segment_centers,
        length,
    };
    debug!(fuselage, length = geometry.length, max_width = geometry.max_width(), "fuselage analysed");
    Ok(geometry)
}

#[instrument(skip(oracle))]
pub fn analyse_fuselages<O: GeometryOracle>(
    oracle: &O,
    profile_samples: usize,
) -> Result<AircraftFuseGeometry, BalanceError> {
    let fuselages = (0..oracle.fuselage_count())
        .map(|f| analyse_fuselage(oracle, f, profile_samples))
        .collect::<Result<Vec<_>, _>>()?;
    let geometry = AircraftFuseGeometry { fuselages };
    info!(
        fuselages = geometry.fuselages.len(),
        total_length = geometry.total_length(),
        "fuselage geometry evaluated"
    );
    Ok(geometry)
}
