//! Catmull-Rom spline evaluator
//!
//! Each run of four consecutive control points compiles into one 4x4
//! coefficient matrix (basis x points). Evaluation maps a global
//! parameter t in [0, 1] onto a segment index and a local u, then
//! multiplies the basis vector [1, u, u^2, u^3] against the segment's
//! matrix. The curve passes through every interior control point.

use crate::math3d::{Float, Matrix, Tuple, EPSILON};
use serde::{Deserialize, Serialize};

/// The fixed Catmull-Rom basis.
pub fn basis_matrix() -> Matrix {
    Matrix::from_rows([
        Tuple::new(0.0, 1.0, 0.0, 0.0),
        Tuple::new(-0.5, 0.0, 0.5, 0.0),
        Tuple::new(1.0, -2.5, 2.0, -0.5),
        Tuple::new(-0.5, 1.5, -1.5, 0.5),
    ])
}

/// Coefficient matrix for one segment: each row is the basis-weighted
/// combination of the four control points. Stays valid until any of
/// the points move.
pub fn segment_matrix(basis: &Matrix, p0: Tuple, p1: Tuple, p2: Tuple, p3: Tuple) -> Matrix {
    let mut m = Matrix::zero();
    for row in 0..4 {
        let b = basis.rows[row];
        m.rows[row] = p0 * b.x + p1 * b.y + p2 * b.z + p3 * b.w;
    }
    m
}

/// Point on a segment at local parameter u in [0, 1]:
/// [1, u, u^2, u^3] x coefficient matrix.
pub fn eval_segment(u: Float, m: &Matrix) -> Tuple {
    let u_squared = u * u;
    let basis_vector = Tuple::new(1.0, u, u_squared, u_squared * u);
    basis_vector * *m
}

/// One evaluated spline sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplinePoint {
    pub p: Tuple,
    /// Source color for gradient rendering; defaults to white.
    pub color: Tuple,
    /// The global parameter this sample was evaluated at.
    pub t: Float,
    /// Index of the segment the sample came from.
    pub segment: usize,
}

impl Default for SplinePoint {
    fn default() -> Self {
        Self {
            p: Tuple::default(),
            color: Tuple::new(1.0, 1.0, 1.0, 0.0),
            t: 0.0,
            segment: 0,
        }
    }
}

/// A Catmull-Rom spline over a control-point path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatmullRom {
    /// The input path plus one synthesized point at each end.
    pub ctrl_points: Vec<Tuple>,
    /// One coefficient matrix per four-point window.
    pub segments: Vec<Matrix>,
    /// Pre-sampled output, filled by the caller or `square_wave`.
    pub points: Vec<SplinePoint>,
}

impl CatmullRom {
    /// Build the spline from at least two control points; fewer yield
    /// an empty spline that evaluates to the default sample.
    ///
    /// The end extensions mirror a third of the boundary segment
    /// vectors, so N input points become N + 2 stored control points
    /// and N - 1 segments.
    pub fn new(ctrl_points: &[Tuple]) -> Self {
        if ctrl_points.len() < 2 {
            return Self::default();
        }

        let mut cp = Vec::with_capacity(ctrl_points.len() + 2);
        cp.extend_from_slice(ctrl_points);

        let begin = cp[0] + (cp[1] - cp[0]) * (-1.0 / 3.0);
        cp.insert(0, begin);

        let last = cp[cp.len() - 1];
        let penultimate = cp[cp.len() - 2];
        cp.push(last + (penultimate - last) * (-1.0 / 3.0));

        let basis = basis_matrix();
        let mut segments = Vec::with_capacity(cp.len() - 3);
        for idx in 0..cp.len() - 3 {
            segments.push(segment_matrix(
                &basis,
                cp[idx],
                cp[idx + 1],
                cp[idx + 2],
                cp[idx + 3],
            ));
        }

        log::debug!(
            "catmull-rom: {} control points, {} segments",
            cp.len(),
            segments.len()
        );

        Self {
            ctrl_points: cp,
            segments,
            points: Vec::new(),
        }
    }

    /// Sample the spline at global t in [0, 1]. Out-of-range t or an
    /// empty spline yields the default sample; check before use.
    pub fn value_at(&self, t: Float) -> SplinePoint {
        if t < 0.0 || t > 1.0 || self.segments.is_empty() {
            return SplinePoint::default();
        }

        let t_spaced = 1.0 / self.segments.len() as Float;

        // The epsilon guards the floor at segment boundaries; without it
        // t values landing exactly on a boundary round into the next
        // segment.
        let segment = if t < t_spaced - EPSILON {
            0
        } else {
            ((t - EPSILON) / t_spaced).floor() as usize
        };

        let t_start = t_spaced * segment as Float;
        let u = (t - t_start) / t_spaced;

        SplinePoint {
            p: eval_segment(u, &self.segments[segment]),
            t,
            segment,
            ..Default::default()
        }
    }

    /// The square-wave demo path: six points tracing the start of a
    /// square wave, pre-sampled at one-thousandth steps.
    pub fn square_wave(x_offs: Float, y_offs: Float, z_offs: Float) -> Self {
        let path = [
            Tuple::point(-1.0 + x_offs, y_offs, z_offs),
            Tuple::point(x_offs, y_offs, z_offs),
            Tuple::point(x_offs, -1.0 + y_offs, z_offs),
            Tuple::point(1.0 + x_offs, -1.0 + y_offs, z_offs),
            Tuple::point(1.0 + x_offs, y_offs, z_offs),
            Tuple::point(2.0 + x_offs, y_offs, z_offs),
        ];

        let mut spline = Self::new(&path);
        let mut t: Float = 0.0;
        while t < 1.0 {
            let sample = spline.value_at(t);
            spline.points.push(sample);
            t += 0.001;
        }
        spline
    }
}
