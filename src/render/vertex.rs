//! Screen-space vertices and edge functions
//!
//! The 2D half of the rasterizer: signed edge tests after Pineda's
//! parallel polygon scan-conversion, plus the rotation/length helpers
//! the line and circle drawing build on.

use crate::math3d::{Float, EPSILON};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// An (x, y) pair in screen space.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vertex2 {
    pub x: Float,
    pub y: Float,
}

impl Vertex2 {
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    pub fn approx_eq(self, other: Vertex2) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }
}

impl Add for Vertex2 {
    type Output = Vertex2;
    fn add(self, other: Vertex2) -> Vertex2 {
        Vertex2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vertex2 {
    type Output = Vertex2;
    fn sub(self, other: Vertex2) -> Vertex2 {
        Vertex2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<Float> for Vertex2 {
    type Output = Vertex2;
    fn mul(self, s: Float) -> Vertex2 {
        Vertex2::new(self.x * s, self.y * s)
    }
}

impl Mul<Vertex2> for Float {
    type Output = Vertex2;
    fn mul(self, v: Vertex2) -> Vertex2 {
        v * self
    }
}

/// Which side of a directed edge a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeSide {
    On,
    Left,
    Right,
}

/// The vector from a to b.
pub fn vector(a: Vertex2, b: Vertex2) -> Vertex2 {
    b - a
}

/// 2D cross product: the z component the two vectors would produce in 3D.
/// The sign tells which way the implied normal points.
pub fn cross(a: Vertex2, b: Vertex2) -> Float {
    a.x * b.y - a.y * b.x
}

/// Cross product of AB and AP: twice the signed area of triangle ABP.
pub fn edge_cross(a: Vertex2, b: Vertex2, p: Vertex2) -> Float {
    cross(vector(a, b), vector(a, p))
}

/// Classify point p against the directed edge v0 -> v1.
pub fn edge_side(p: Vertex2, v0: Vertex2, v1: Vertex2) -> EdgeSide {
    let delta = v1 - v0;
    let e = (p.x - v0.x) * delta.y - (p.y - v0.y) * delta.x;

    if e > 0.0 {
        EdgeSide::Right
    } else if e < 0.0 {
        EdgeSide::Left
    } else {
        EdgeSide::On
    }
}

/// Point-in-triangle by edge classification; On counts as inside.
/// Logically equivalent to requiring all three edge crosses >= 0.
pub fn is_inside(p: Vertex2, v0: Vertex2, v1: Vertex2, v2: Vertex2) -> bool {
    let e1 = edge_side(p, v1, v0);
    let e2 = edge_side(p, v2, v1);
    let e3 = edge_side(p, v0, v2);

    e1 != EdgeSide::Left && e2 != EdgeSide::Left && e3 != EdgeSide::Left
}

/// Min/max vertex pair enclosing a triangle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vertex2,
    pub max: Vertex2,
}

pub fn bounding_box(v0: Vertex2, v1: Vertex2, v2: Vertex2) -> BoundingBox {
    BoundingBox {
        min: Vertex2::new(v0.x.min(v1.x).min(v2.x), v0.y.min(v1.y).min(v2.y)),
        max: Vertex2::new(v0.x.max(v1.x).max(v2.x), v0.y.max(v1.y).max(v2.y)),
    }
}

/// The vertex with the lower y value.
pub fn min_y(v0: Vertex2, v1: Vertex2) -> Vertex2 {
    if v0.y <= v1.y {
        v0
    } else {
        v1
    }
}

pub fn max_y(v0: Vertex2, v1: Vertex2) -> Vertex2 {
    if v0.y <= v1.y {
        v1
    } else {
        v0
    }
}

/// Rotate about the origin; positive angles turn counter-clockwise.
pub fn rotate(v: Vertex2, angle: Float) -> Vertex2 {
    Vertex2::new(
        v.x * angle.cos() - v.y * angle.sin(),
        v.x * angle.sin() + v.y * angle.cos(),
    )
}

/// Rotate around a reference vertex: move to local coordinates,
/// rotate, move back.
pub fn rotate_about(reference: Vertex2, v: Vertex2, angle: Float) -> Vertex2 {
    reference + rotate(v - reference, angle)
}

/// Euclidean distance between two vertices.
pub fn length(v0: Vertex2, v1: Vertex2) -> Float {
    let v = v1 - v0;
    (v.x * v.x + v.y * v.y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math3d::{approx_eq, deg2rad};

    #[test]
    fn test_edge_side_law() {
        let v0 = Vertex2::new(0.0, 0.0);
        let v1 = Vertex2::new(1.0, 0.0);

        assert_eq!(edge_side(Vertex2::new(1.0, 1.0), v0, v1), EdgeSide::Left);
        assert_eq!(edge_side(Vertex2::new(1.0, -1.0), v0, v1), EdgeSide::Right);
        assert_eq!(edge_side(Vertex2::new(0.5, 0.0), v0, v1), EdgeSide::On);
        assert_eq!(edge_side(Vertex2::new(7.0, 0.0), v0, v1), EdgeSide::On);
    }

    #[test]
    fn test_edge_cross_is_twice_signed_area() {
        let area = edge_cross(
            Vertex2::new(0.0, 0.0),
            Vertex2::new(1.0, 0.0),
            Vertex2::new(0.0, 1.0),
        ) / 2.0;
        assert!(approx_eq(area, 0.5, EPSILON));
    }

    #[test]
    fn test_barycentric_partition_of_unity() {
        let v0 = Vertex2::new(0.0, 0.0);
        let v1 = Vertex2::new(1.0, 1.0);
        let v2 = Vertex2::new(1.0, 0.0);
        let p = Vertex2::new(0.75, 0.5);

        let area = edge_cross(v0, v1, v2);
        let alfa = edge_cross(v1, v2, p) / area;
        let beta = edge_cross(v0, v1, p) / area;
        let gamma = edge_cross(v2, v0, p) / area;
        assert!(approx_eq(alfa + beta + gamma, 1.0, EPSILON));
    }

    #[test]
    fn test_sign_test_agrees_with_classification() {
        let p = Vertex2::new(0.75, 0.5);
        for (v0, v1, v2) in [
            // Counter-clockwise: p is inside.
            (
                Vertex2::new(0.0, 0.0),
                Vertex2::new(1.0, 0.0),
                Vertex2::new(1.0, 1.0),
            ),
            // Clockwise winding flips every sign.
            (
                Vertex2::new(0.0, 0.0),
                Vertex2::new(1.0, 1.0),
                Vertex2::new(1.0, 0.0),
            ),
        ] {
            let w0 = edge_cross(v1, v2, p);
            let w1 = edge_cross(v0, v1, p);
            let w2 = edge_cross(v2, v0, p);
            let sign_inside = w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0;
            assert_eq!(sign_inside, is_inside(p, v0, v1, v2));
        }
    }

    #[test]
    fn test_point_on_edge_counts_as_inside() {
        let v0 = Vertex2::new(0.0, 0.0);
        let v1 = Vertex2::new(2.0, 0.0);
        let v2 = Vertex2::new(2.0, 2.0);
        assert!(is_inside(Vertex2::new(1.0, 0.0), v0, v1, v2));
    }

    #[test]
    fn test_bounding_box() {
        let bb = bounding_box(
            Vertex2::new(3.0, 1.0),
            Vertex2::new(-1.0, 4.0),
            Vertex2::new(2.0, -2.0),
        );
        assert!(bb.min.approx_eq(Vertex2::new(-1.0, -2.0)));
        assert!(bb.max.approx_eq(Vertex2::new(3.0, 4.0)));
        assert!(bb.min.x <= bb.max.x && bb.min.y <= bb.max.y);
    }

    #[test]
    fn test_min_max_y_order_by_y() {
        let low = Vertex2::new(9.0, 1.0);
        let high = Vertex2::new(-9.0, 5.0);
        assert!(min_y(low, high).approx_eq(low));
        assert!(min_y(high, low).approx_eq(low));
        assert!(max_y(low, high).approx_eq(high));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(Vertex2::new(1.0, 0.0), deg2rad(90.0));
        assert!(r.approx_eq(Vertex2::new(0.0, 1.0)));
    }

    #[test]
    fn test_rotate_about_reference() {
        let reference = Vertex2::new(1.0, 1.0);
        let r = rotate_about(reference, Vertex2::new(2.0, 1.0), deg2rad(90.0));
        assert!(r.approx_eq(Vertex2::new(1.0, 2.0)));
    }

    #[test]
    fn test_length() {
        let d = length(Vertex2::new(1.0, 1.0), Vertex2::new(4.0, 5.0));
        assert!(approx_eq(d, 5.0, EPSILON));
    }
}
