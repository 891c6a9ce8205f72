//! Perspective projection and screen-space mapping
//!
//! The projection matrix stores depth in the w channel, so the
//! perspective divide built into the matrix-tuple multiply normalizes
//! x, y, z on the way out. The screen matrix remaps NDC [-1, 1] to
//! pixel coordinates with (0, 0) at the upper left.

use crate::math3d::{Float, Matrix};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("field of view {0} rad is outside (0, pi)")]
    InvalidFov(Float),
    #[error("far plane {z_far} must lie beyond near plane {z_near}")]
    InvalidPlanes { z_near: Float, z_far: Float },
}

/// Projection configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projection {
    pub width: Float,
    pub height: Float,
    /// Field of view in radians.
    pub fov: Float,
    pub z_near: Float,
    pub z_far: Float,
}

impl Projection {
    pub fn new(
        width: Float,
        height: Float,
        fov: Float,
        z_near: Float,
        z_far: Float,
    ) -> Result<Self, ProjectionError> {
        if fov <= 0.0 || fov >= std::f64::consts::PI {
            return Err(ProjectionError::InvalidFov(fov));
        }
        if z_far <= z_near {
            return Err(ProjectionError::InvalidPlanes { z_near, z_far });
        }
        Ok(Self {
            width,
            height,
            fov,
            z_near,
            z_far,
        })
    }

    /// Perspective projection matrix. After multiplying a point, the
    /// incoming z sits in w and depth relative to the near/far planes
    /// sits in z.
    pub fn projection_matrix(&self) -> Matrix {
        let mut m = Matrix::zero();
        let one_over_tan_half = 1.0 / (self.fov / 2.0).tan();

        m.set(0, 0, (self.height / self.width) * one_over_tan_half);
        m.set(1, 1, one_over_tan_half);
        m.set(2, 2, self.z_far / (self.z_far - self.z_near));
        m.set(2, 3, -(self.z_far * self.z_near) / (self.z_far - self.z_near));
        m.set(3, 2, 1.0);
        m
    }

    /// NDC-to-pixel matrix: [-1, 1] maps to [0, width-1] x [0, height-1],
    /// centered on the middle of the screen.
    pub fn screen_matrix(&self) -> Matrix {
        let mut m = Matrix::identity();
        let x_max = self.width - 1.0;
        let y_max = self.height - 1.0;

        m.set(0, 0, x_max / 2.0);
        m.set(0, 3, x_max / 2.0);
        m.set(1, 1, y_max / 2.0);
        m.set(1, 3, y_max / 2.0);
        m
    }

    /// Combined per-vertex conversion: screen mapping after projection.
    pub fn conversion_matrix(&self) -> Matrix {
        self.screen_matrix() * self.projection_matrix()
    }
}
