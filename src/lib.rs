//! Glint: software rasterization playground
//!
//! A small 3D-math and scan-conversion kernel:
//! - Homogeneous tuple / 4x4 matrix algebra (determinant, cofactor, inverse)
//! - Perspective projection and screen-space remapping
//! - Edge-function triangle fill with barycentric color gradients
//! - Catmull-Rom splines evaluated from a global parameter
//! - RON scene files and PNG output for the demo binaries

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod math3d;
pub mod render;
pub mod scene;
pub mod spline;
