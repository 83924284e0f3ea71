pub mod engine;
pub mod geometry;
pub mod inertia;
pub mod mass;
pub mod point_cloud;
pub mod symmetry;

pub use engine::EngineData;
pub use geometry::{
    AircraftFuseGeometry, AircraftWingGeometry, FuselageGeometry, MeanAerodynamicChord,
    PlanformAreas, SegmentLink, WingGeometry,
};
pub use inertia::InertiaTensor;
pub use mass::{MassBreakdown, SegmentMasses, WingSegmentMasses};
pub use point_cloud::LumpedMassCloud;
pub use symmetry::SymmetryPlane;
