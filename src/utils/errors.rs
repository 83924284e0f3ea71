use thiserror::Error;

use crate::config::ConfigError;
use crate::oracle::OracleError;
use crate::systems::topology::TopologyError;

#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Geometry inconsistency in {component}: {source}")]
    GeometryInconsistency {
        component: String,
        #[source]
        source: TopologyError,
    },

    #[error("Oracle query failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing segment mass for {component}, segment {segment}")]
    MissingMass { component: String, segment: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
