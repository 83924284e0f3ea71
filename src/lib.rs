pub mod components;
pub mod config;
pub mod oracle;
pub mod systems;
pub mod utils;

pub use components::{InertiaTensor, LumpedMassCloud, SegmentMasses, SymmetryPlane};
pub use config::{AircraftSource, BalanceInput, InertiaConfig, MassDistribution};
pub use oracle::{AnalyticOracle, GeometryOracle};
pub use systems::{run_balance, BalanceReport};
pub use utils::BalanceError;
