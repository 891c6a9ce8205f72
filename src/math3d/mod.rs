//! Homogeneous tuple and fixed-size matrix algebra
//!
//! The building blocks every other module consumes:
//! - `Tuple`: one 4-component value readable as point/vector, color, or array
//! - `Matrix`: 4x4 storage with 2/3/4 dimension gating, cofactor-expansion
//!   determinant and inverse-by-adjugate
//! - Transform builders (translation, scaling, rotation, shearing)

mod matrix;
mod transform;
mod tuple;

pub use matrix::*;
pub use transform::*;
pub use tuple::*;

/// Scalar type for all geometry.
pub type Float = f64;

/// Geometric comparison tolerance.
pub const EPSILON: Float = 1e-3;

/// Compare two scalars within a tolerance.
pub fn approx_eq(a: Float, b: Float, tolerance: Float) -> bool {
    (a - b).abs() < tolerance
}

pub fn rad2deg(angle: Float) -> Float {
    180.0 * angle / std::f64::consts::PI
}

pub fn deg2rad(angle: Float) -> Float {
    std::f64::consts::PI * angle / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversion() {
        assert!(approx_eq(deg2rad(180.0), std::f64::consts::PI, EPSILON));
        assert!(approx_eq(rad2deg(std::f64::consts::PI / 2.0), 90.0, EPSILON));
    }
}
