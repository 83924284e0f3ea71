use nalgebra::{Vector2, Vector3};

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Linear interpolation between two points
#[inline]
pub fn lerp_point(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

#[inline]
pub fn midpoint(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    (a + b) * 0.5
}

#[inline]
pub fn distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a - b).norm()
}

/// Sum of the integers `0..=n`.
#[inline]
pub fn triangular_number(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Number of subdivisions needed so that no interval exceeds `spacing`.
///
/// Returns the count and whether it had to be clamped up to one
/// (zero-length or non-finite input).
pub fn subdivisions(length: f64, spacing: f64) -> (usize, bool) {
    let raw = (length / spacing).ceil();
    if raw.is_finite() && raw >= 1.0 {
        (raw as usize, false)
    } else {
        (1, true)
    }
}

/// Trapezoid-rule weights for `n + 1` evenly spaced stations on [0, 1].
pub fn trapezoid_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![1.0];
    }
    let step = 1.0 / n as f64;
    (0..=n)
        .map(|i| if i == 0 || i == n { 0.5 * step } else { step })
        .collect()
}

/// Voronoi interval lengths on [0, 1] for a set of parametric positions.
///
/// Each distinct value owns the interval between the midpoints to its
/// neighbours; repeated values split their interval equally.
pub fn parametric_weights(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut unique: Vec<f64> = values.to_vec();
    unique.sort_by(|a, b| a.total_cmp(b));
    unique.dedup_by(|a, b| (*a - *b).abs() < 1e-12);

    let owned: Vec<f64> = (0..unique.len())
        .map(|i| {
            let lo = if i == 0 {
                0.0
            } else {
                0.5 * (unique[i - 1] + unique[i])
            };
            let hi = if i + 1 == unique.len() {
                1.0
            } else {
                0.5 * (unique[i] + unique[i + 1])
            };
            (hi - lo).max(0.0)
        })
        .collect();

    let slot = |v: f64| {
        unique
            .iter()
            .position(|u| (u - v).abs() < 1e-12)
            .unwrap_or(0)
    };

    let mut multiplicity = vec![0usize; unique.len()];
    for &v in values {
        multiplicity[slot(v)] += 1;
    }

    values
        .iter()
        .map(|&v| {
            let i = slot(v);
            owned[i] / multiplicity[i] as f64
        })
        .collect()
}

/// Signed area of a closed planar polygon.
pub fn shoelace_area(vertices: &[Vector2<f64>]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    0.5 * twice
}

/// Area of the (possibly non-planar) quad `a b c d`, split along `a c`.
pub fn quad_area(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>, d: &Vector3<f64>) -> f64 {
    0.5 * ((b - a).cross(&(c - a)).norm() + (c - a).cross(&(d - a)).norm())
}
