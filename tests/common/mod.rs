mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_point_eq, assert_tensor_eq, assert_tensor_valid};

pub use fixtures::*;
pub use helpers::*;
