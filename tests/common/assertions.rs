use approx::assert_relative_eq;
use lumped_inertia::InertiaTensor;
use nalgebra::Vector3;

/// Assert that an inertia tensor is physically plausible
#[track_caller]
pub fn assert_tensor_valid(tensor: &InertiaTensor) {
    assert!(tensor.is_finite(), "Inertia tensor contains non-finite values");

    // Moments of inertia are non-negative
    assert!(tensor.ixx >= 0.0, "Ixx must be non-negative");
    assert!(tensor.iyy >= 0.0, "Iyy must be non-negative");
    assert!(tensor.izz >= 0.0, "Izz must be non-negative");

    // Triangle inequality of the principal moments
    let slack = 1e-9 * tensor.trace().max(1.0);
    assert!(tensor.ixx + tensor.iyy + slack >= tensor.izz, "Izz violates triangle inequality");
    assert!(tensor.iyy + tensor.izz + slack >= tensor.ixx, "Ixx violates triangle inequality");
    assert!(tensor.izz + tensor.ixx + slack >= tensor.iyy, "Iyy violates triangle inequality");
}

/// Assert that two tensors are approximately equal, entry by entry
#[track_caller]
pub fn assert_tensor_eq(actual: &InertiaTensor, expected: &InertiaTensor, max_relative: f64) {
    let pairs = [
        (actual.ixx, expected.ixx, "ixx"),
        (actual.iyy, expected.iyy, "iyy"),
        (actual.izz, expected.izz, "izz"),
        (actual.ixy, expected.ixy, "ixy"),
        (actual.iyz, expected.iyz, "iyz"),
        (actual.ixz, expected.ixz, "ixz"),
    ];
    let scale = expected.trace().abs().max(1.0);
    for (a, e, name) in pairs {
        assert!(
            (a - e).abs() <= max_relative * scale,
            "{} differs: {} vs {}",
            name,
            a,
            e
        );
    }
}

/// Assert that two points are approximately equal
#[track_caller]
pub fn assert_point_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
