pub mod aircraft;
pub mod inertia;
pub mod loader;

pub use aircraft::{AircraftSource, AircraftType, BalanceInput};
pub use inertia::{InertiaConfig, MassDistribution};
pub use loader::{load_yaml, ConfigError};
