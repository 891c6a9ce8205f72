//! Piecewise parametric curves
//!
//! Catmull-Rom splines compiled into one coefficient matrix per
//! segment, evaluated from a single global parameter.

mod catmull_rom;

pub use catmull_rom::*;
