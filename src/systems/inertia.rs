use nalgebra::Vector3;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::components::{
    AircraftFuseGeometry, AircraftWingGeometry, EngineData, InertiaTensor, LumpedMassCloud,
    MassBreakdown, SymmetryPlane,
};
use crate::config::{BalanceInput, InertiaConfig, MassDistribution};
use crate::oracle::GeometryOracle;
use crate::systems::discretizer::{fuselage_segment_nodes, wing_segment_nodes, SegmentNodes};
use crate::systems::fuselage_analysis::analyse_fuselages;
use crate::systems::wing_analysis::analyse_wings;
use crate::utils::{BalanceError, ComponentId};

/// Lumped masses of one kind of component and their inertia about the CoG.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentInertia {
    #[serde(skip)]
    pub cloud: LumpedMassCloud,
    pub tensor: InertiaTensor,
}

impl ComponentInertia {
    fn from_cloud(cloud: LumpedMassCloud, center_of_gravity: &Vector3<f64>) -> Self {
        let tensor = cloud.inertia_about(center_of_gravity);
        Self { cloud, tensor }
    }

    pub fn node_count(&self) -> usize {
        self.cloud.len()
    }

    pub fn mass(&self) -> f64 {
        self.cloud.total_mass()
    }
}

/// Inertia contributions handed to the balance aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InertiaReport {
    pub fuselages: ComponentInertia,
    pub wings: ComponentInertia,
    pub engines: InertiaTensor,
    pub total: InertiaTensor,
}

impl InertiaReport {
    pub fn node_count(&self) -> usize {
        self.fuselages.node_count() + self.wings.node_count()
    }
}

/// Geometry and inertia of a complete balance evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    pub wings: AircraftWingGeometry,
    pub fuselages: AircraftFuseGeometry,
    pub inertia: InertiaReport,
}

fn lump(points: Vec<Vector3<f64>>, weights: &[f64], mass: f64, distribution: MassDistribution) -> LumpedMassCloud {
    match distribution {
        MassDistribution::EqualPerPoint => LumpedMassCloud::from_equal_split(points, mass),
        MassDistribution::AreaWeighted => LumpedMassCloud::from_weighted(points, weights, mass),
    }
}

/// Appends the mirror image of `nodes`, carrying `mass`, to `cloud`.
fn append_mirror(
    cloud: &mut LumpedMassCloud,
    nodes: &SegmentNodes,
    plane: SymmetryPlane,
    mass: f64,
    distribution: MassDistribution,
) {
    if !plane.is_symmetric() {
        return;
    }
    let points = nodes.points.iter().map(|p| plane.mirror(p)).collect();
    cloud.append(&mut lump(points, &nodes.weights, mass, distribution));
}

/// Lumped masses of all fuselages.
///
/// Each segment's mass is spread over the nodes sampled on it; a fuselage
/// declaring a symmetry plane gets a mirrored copy carrying the same mass.
#[instrument(skip_all)]
pub fn fuselage_inertia<O, M>(
    config: &InertiaConfig,
    center_of_gravity: &Vector3<f64>,
    masses: &M,
    geometry: &AircraftFuseGeometry,
    oracle: &O,
) -> Result<ComponentInertia, BalanceError>
where
    O: GeometryOracle,
    M: MassBreakdown,
{
    let mut cloud = LumpedMassCloud::new();
    for fuselage in &geometry.fuselages {
        for (position, link) in fuselage.chain.iter().enumerate() {
            let mass = masses
                .fuselage_segment_mass(fuselage.index, link.segment)
                .ok_or_else(|| BalanceError::MissingMass {
                    component: ComponentId::Fuselage(fuselage.index).to_string(),
                    segment: link.segment,
                })?;
            let nodes = fuselage_segment_nodes(oracle, fuselage, position, config.spacing)?;
            let mut half = lump(nodes.points.clone(), &nodes.weights, mass, config.mass_distribution);
            cloud.append(&mut half);
            append_mirror(&mut cloud, &nodes, fuselage.symmetry, mass, config.mass_distribution);
        }
    }

    let result = ComponentInertia::from_cloud(cloud, center_of_gravity);
    info!(
        nodes = result.node_count(),
        mass = result.mass(),
        ixx = result.tensor.ixx,
        iyy = result.tensor.iyy,
        izz = result.tensor.izz,
        "fuselage inertia evaluated"
    );
    Ok(result)
}

/// Lumped masses of all wings, mirrored halves included.
#[instrument(skip_all)]
pub fn wing_inertia<O, M>(
    config: &InertiaConfig,
    center_of_gravity: &Vector3<f64>,
    masses: &M,
    geometry: &AircraftWingGeometry,
    oracle: &O,
) -> Result<ComponentInertia, BalanceError>
where
    O: GeometryOracle,
    M: MassBreakdown,
{
    let mut cloud = LumpedMassCloud::new();
    for wing in &geometry.wings {
        let component = ComponentId::Wing(wing.index);
        for (position, link) in wing.chain.iter().enumerate() {
            let missing = || BalanceError::MissingMass {
                component: component.to_string(),
                segment: link.segment,
            };
            let mass = masses
                .wing_segment_mass(wing.index, link.segment, wing.is_mirror)
                .ok_or_else(missing)?;
            let nodes = wing_segment_nodes(
                oracle,
                wing,
                position,
                config.spacing,
                config.wing_chord_subdivisions,
            )?;

            let mut half = lump(nodes.points.clone(), &nodes.weights, mass, config.mass_distribution);
            cloud.append(&mut half);
            if wing.symmetry.is_symmetric() && !wing.is_mirror {
                let mirrored_mass = masses
                    .wing_segment_mass(wing.index, link.segment, true)
                    .ok_or_else(missing)?;
                append_mirror(&mut cloud, &nodes, wing.symmetry, mirrored_mass, config.mass_distribution);
            }
        }
    }

    let result = ComponentInertia::from_cloud(cloud, center_of_gravity);
    info!(
        nodes = result.node_count(),
        mass = result.mass(),
        ixx = result.tensor.ixx,
        iyy = result.tensor.iyy,
        izz = result.tensor.izz,
        "wing inertia evaluated"
    );
    Ok(result)
}

/// Inertia of the engines as point masses about the CoG.
pub fn engine_inertia(center_of_gravity: &Vector3<f64>, engines: &EngineData) -> InertiaTensor {
    engines
        .placements
        .iter()
        .map(|p| InertiaTensor::from_point_mass(engines.mass, &(p - center_of_gravity)))
        .sum()
}

/// Inertia of fuselages, wings and engines, and their sum.
#[instrument(skip_all)]
pub fn aircraft_inertia<O, M>(
    oracle: &O,
    config: &InertiaConfig,
    center_of_gravity: &Vector3<f64>,
    masses: &M,
    fuselages: &AircraftFuseGeometry,
    wings: &AircraftWingGeometry,
    engines: Option<&EngineData>,
) -> Result<InertiaReport, BalanceError>
where
    O: GeometryOracle,
    M: MassBreakdown,
{
    let fuselages = fuselage_inertia(config, center_of_gravity, masses, fuselages, oracle)?;
    let wings = wing_inertia(config, center_of_gravity, masses, wings, oracle)?;
    let engines = engines
        .map(|e| engine_inertia(center_of_gravity, e))
        .unwrap_or_default();

    let total = fuselages.tensor + wings.tensor + engines;
    if !total.is_finite() {
        warn!(?total, "inertia tensor has non-finite entries");
    }
    info!(
        ixx = total.ixx,
        iyy = total.iyy,
        izz = total.izz,
        ixy = total.ixy,
        iyz = total.iyz,
        ixz = total.ixz,
        "aircraft inertia evaluated"
    );
    Ok(InertiaReport {
        fuselages,
        wings,
        engines,
        total,
    })
}

/// Runs geometry analysis and the inertia evaluation on one aircraft.
///
/// The oracle is held exclusively for the whole run.
pub fn run_balance<O: GeometryOracle>(
    oracle: &mut O,
    config: &InertiaConfig,
    input: &BalanceInput,
) -> Result<BalanceReport, BalanceError> {
    config.validate()?;
    let oracle = &*oracle;
    let wings = analyse_wings(oracle)?;
    let fuselages = analyse_fuselages(oracle, config.profile_samples)?;
    let inertia = aircraft_inertia(
        oracle,
        config,
        &input.center_of_gravity,
        &input.masses,
        &fuselages,
        &wings,
        input.engines.as_ref(),
    )?;
    Ok(BalanceReport {
        wings,
        fuselages,
        inertia,
    })
}
