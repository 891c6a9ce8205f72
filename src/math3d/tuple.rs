//! Four-component homogeneous value
//!
//! One set of bits, three readings: an (x, y, z, w) point or vector,
//! an (r, g, b, intensity) color, or a plain 4-element array via `Index`.
//! w == 1 marks a point, w == 0 a vector.

use super::{approx_eq, Float, EPSILON};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tuple {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub w: Float,
}

impl Tuple {
    pub fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }

    /// A point: w == 1.
    pub fn point(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// A vector: w == 0.
    pub fn vector(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    /// A color through the (r, g, b, intensity) lens; intensity starts at 0.
    pub fn color(r: Float, g: Float, b: Float) -> Self {
        Self { x: r, y: g, z: b, w: 0.0 }
    }

    /// Reinterpret as a point by forcing w to 1.
    pub fn as_point(mut self) -> Self {
        self.w = 1.0;
        self
    }

    /// Reinterpret as a vector by forcing w to 0.
    pub fn as_vector(mut self) -> Self {
        self.w = 0.0;
        self
    }

    pub fn r(&self) -> Float {
        self.x
    }

    pub fn g(&self) -> Float {
        self.y
    }

    pub fn b(&self) -> Float {
        self.z
    }

    /// Color intensity: 1 at max, 0 at pitch black.
    pub fn intensity(&self) -> Float {
        self.w
    }

    pub fn is_point(&self) -> bool {
        self.w != 0.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Sum of products over all four components, w included.
    /// Zero out w first when a pure 3-vector dot is wanted.
    pub fn dot(self, other: Tuple) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// 3D cross product; w is ignored and the result is a vector.
    pub fn cross(self, other: Tuple) -> Tuple {
        Tuple::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared 4-component Euclidean norm, w included.
    pub fn mag_squared(self) -> Float {
        self.dot(self)
    }

    /// 4-component Euclidean norm. For a point (w == 1) this is the
    /// origin-augmented norm, not the 3D length; convert to a vector
    /// before normalizing a geometric direction.
    pub fn mag(self) -> Float {
        self.mag_squared().sqrt()
    }

    /// Divide by the magnitude; w is carried through unchanged.
    pub fn normalize(self) -> Tuple {
        self / self.mag()
    }

    /// Elementwise sine of x, y, z; w unchanged.
    pub fn sin(self) -> Tuple {
        Tuple {
            x: self.x.sin(),
            y: self.y.sin(),
            z: self.z.sin(),
            w: self.w,
        }
    }

    pub fn approx_eq(self, other: Tuple) -> bool {
        approx_eq(self.x, other.x, EPSILON)
            && approx_eq(self.y, other.y, EPSILON)
            && approx_eq(self.z, other.z, EPSILON)
            && approx_eq(self.w, other.w, EPSILON)
    }
}

impl Add for Tuple {
    type Output = Tuple;
    fn add(self, other: Tuple) -> Tuple {
        Tuple {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl Sub for Tuple {
    type Output = Tuple;
    fn sub(self, other: Tuple) -> Tuple {
        // point - point yields a vector: w is forced to 0 when both
        // operands carry a nonzero w.
        let w = if self.w != 0.0 && other.w != 0.0 {
            0.0
        } else {
            self.w - other.w
        };
        Tuple {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w,
        }
    }
}

impl Neg for Tuple {
    type Output = Tuple;
    fn neg(self) -> Tuple {
        Tuple {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Mul<Float> for Tuple {
    type Output = Tuple;
    /// Scalar multiply scales all four components, w included.
    fn mul(self, s: Float) -> Tuple {
        Tuple {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }
}

impl Mul<Tuple> for Float {
    type Output = Tuple;
    fn mul(self, t: Tuple) -> Tuple {
        t * self
    }
}

impl Mul for Tuple {
    type Output = Tuple;
    /// Componentwise multiply over all four components (color blend).
    fn mul(self, other: Tuple) -> Tuple {
        Tuple {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
            w: self.w * other.w,
        }
    }
}

impl Div<Float> for Tuple {
    type Output = Tuple;
    /// Scalar divide of x, y, z; w is carried through unchanged.
    fn div(self, s: Float) -> Tuple {
        Tuple {
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
            w: self.w,
        }
    }
}

impl Div for Tuple {
    type Output = Tuple;
    /// Componentwise divide of x, y, z; w is taken from the left side.
    fn div(self, other: Tuple) -> Tuple {
        Tuple {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
            w: self.w,
        }
    }
}

impl Index<usize> for Tuple {
    type Output = Float;
    fn index(&self, i: usize) -> &Float {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("tuple index {} out of range", i),
        }
    }
}

impl IndexMut<usize> for Tuple {
    fn index_mut(&mut self, i: usize) -> &mut Float {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("tuple index {} out of range", i),
        }
    }
}
