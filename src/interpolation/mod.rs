//! Interpolation over 2D control points.

pub mod cubic_spline;
pub use cubic_spline::{build_system, CubicSegment, CubicSpline};

use crate::error::SplineError;

/// A control point `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

pub trait Interpolator {
    /// evaluates single point
    fn eval(&self, x: f64) -> Result<f64, SplineError>;

    /// evaluates many points; fails if any point fails
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, SplineError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
