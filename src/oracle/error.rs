use thiserror::Error;

use crate::utils::ComponentId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("No such component: {0}")]
    InvalidComponent(ComponentId),

    #[error("No segment {segment} on {component}")]
    InvalidSegment { component: ComponentId, segment: usize },

    #[error("Parametric coordinate {name}={value} outside [0, 1]")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Degenerate geometry on {component}: {reason}")]
    Degenerate {
        component: ComponentId,
        reason: String,
    },
}
