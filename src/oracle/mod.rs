pub mod analytic;
pub mod error;
pub mod traits;

pub use analytic::{
    AircraftDefinition, AnalyticOracle, FuselageDefinition, FuselageFrame, SegmentDefinition,
    WingDefinition, WingSection,
};
pub use error::OracleError;
pub use traits::{check_parameter, GeometryOracle};
