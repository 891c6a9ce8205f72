//! Transform builders
//!
//! Translation, scaling, axis rotations, shearing, and the combined
//! translate-scale-rotate constructor, plus rotate-around-a-pivot
//! helpers for single vertices.

use super::{Float, Matrix, Tuple};

pub fn translation(x: Float, y: Float, z: Float) -> Matrix {
    let mut m = Matrix::identity();
    m.set(0, 3, x);
    m.set(1, 3, y);
    m.set(2, 3, z);
    m
}

pub fn scaling(x: Float, y: Float, z: Float) -> Matrix {
    let mut m = Matrix::identity();
    m.set(0, 0, x);
    m.set(1, 1, y);
    m.set(2, 2, z);
    m
}

/// Rotation about the x axis; a positive angle turns +y toward -z.
pub fn rotate_x(alfa: Float) -> Matrix {
    let mut m = Matrix::identity();
    m.set(1, 1, alfa.cos());
    m.set(1, 2, alfa.sin());
    m.set(2, 1, -alfa.sin());
    m.set(2, 2, alfa.cos());
    m
}

/// Rotation about the y axis; a positive angle turns +z toward -x.
pub fn rotate_y(alfa: Float) -> Matrix {
    let mut m = Matrix::identity();
    m.set(0, 0, alfa.cos());
    m.set(0, 2, -alfa.sin());
    m.set(2, 0, alfa.sin());
    m.set(2, 2, alfa.cos());
    m
}

/// Rotation about the z axis; a positive angle turns +x toward +y.
pub fn rotate_z(alfa: Float) -> Matrix {
    let mut m = Matrix::identity();
    m.set(0, 0, alfa.cos());
    m.set(0, 1, -alfa.sin());
    m.set(1, 0, alfa.sin());
    m.set(1, 1, alfa.cos());
    m
}

/// Shear each coordinate in proportion to the other two.
pub fn shearing(xy: Float, xz: Float, yx: Float, yz: Float, zx: Float, zy: Float) -> Matrix {
    let mut m = Matrix::identity();
    m.set(0, 1, xy);
    m.set(0, 2, xz);
    m.set(1, 0, yx);
    m.set(1, 2, yz);
    m.set(2, 0, zx);
    m.set(2, 1, zy);
    m
}

/// Combined transform: translation * scaling * Rx * Ry * Rz.
#[allow(clippy::too_many_arguments)]
pub fn translate_scale_rotate(
    trans_x: Float,
    trans_y: Float,
    trans_z: Float,
    scale_x: Float,
    scale_y: Float,
    scale_z: Float,
    alfa_x: Float,
    alfa_y: Float,
    alfa_z: Float,
) -> Matrix {
    translation(trans_x, trans_y, trans_z)
        * scaling(scale_x, scale_y, scale_z)
        * rotate_x(alfa_x)
        * rotate_y(alfa_y)
        * rotate_z(alfa_z)
}

/// Rotate a vertex about the x axis through an arbitrary pivot:
/// translate to the pivot's local origin, rotate, translate back.
pub fn rotate_x_about(reference: Tuple, vertice: Tuple, alfa: Float) -> Tuple {
    let local = vertice - reference;
    rotate_x(alfa) * local + reference
}

pub fn rotate_y_about(reference: Tuple, vertice: Tuple, alfa: Float) -> Tuple {
    let local = vertice - reference;
    rotate_y(alfa) * local + reference
}

pub fn rotate_z_about(reference: Tuple, vertice: Tuple, alfa: Float) -> Tuple {
    let local = vertice - reference;
    rotate_z(alfa) * local + reference
}
