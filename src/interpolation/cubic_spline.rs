//! Natural cubic spline fitted through a dense linear system.
//!
//! For `n` points there are `m = n - 1` segments, each a cubic
//! `a·x³ + b·x² + c·x + d` in absolute `x`, giving `4m` unknowns. The system
//! collects, in order:
//!
//! - interpolation rows: every segment touching a point passes through it
//!   (`2m` rows),
//! - first-derivative continuity at each interior knot (`m - 1` rows),
//! - second-derivative continuity at each interior knot (`m - 1` rows),
//! - natural boundary rows: zero curvature at both end points (2 rows).
//!
//! The square system is solved with [`gaussian_elimination_with`].
//! Coefficients are stored per segment as `[a, b, c, d]`, segment `k`
//! occupying `[4k, 4k + 4)`.

use crate::config::SolveOptions;
use crate::error::SplineError;
use crate::interpolation::{Interpolator, Point};
use crate::matrix::Matrix;
use crate::solver::gaussian_elimination_with;
use log::{debug, warn};

/// One cubic piece `a·x³ + b·x² + c·x + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicSegment {
    fn from_slice(coeffs: &[f64]) -> Self {
        Self { a: coeffs[0], b: coeffs[1], c: coeffs[2], d: coeffs[3] }
    }

    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// First derivative.
    #[inline]
    pub fn slope(&self, x: f64) -> f64 {
        (3.0 * self.a * x + 2.0 * self.b) * x + self.c
    }

    /// Second derivative.
    #[inline]
    pub fn curvature(&self, x: f64) -> f64 {
        6.0 * self.a * x + 2.0 * self.b
    }
}

struct SystemBuilder {
    a: Matrix,
    b: Vec<f64>,
    next: usize,
}

impl SystemBuilder {
    fn new(size: usize) -> Self {
        Self { a: Matrix::zeros(size, size), b: Vec::with_capacity(size), next: 0 }
    }

    /// Append a row whose non-zero entries start at segment `seg`'s columns.
    fn push(&mut self, seg: usize, vals: &[f64], rhs: f64) {
        for (k, &v) in vals.iter().enumerate() {
            self.a[(self.next, 4 * seg + k)] = v;
        }
        self.b.push(rhs);
        self.next += 1;
    }
}

/// Build the `(A, b)` system whose solution holds the spline coefficients.
///
/// # Errors
/// [`SplineError::InsufficientPoints`] for fewer than 2 points.
pub fn build_system(points: &[Point]) -> Result<(Matrix, Vec<f64>), SplineError> {
    let n = points.len();
    if n < 2 {
        return Err(SplineError::InsufficientPoints { got: n });
    }
    let m = n - 1;
    let mut sys = SystemBuilder::new(4 * m);

    // interpolation
    for (i, p) in points.iter().enumerate() {
        let row = [p.x * p.x * p.x, p.x * p.x, p.x, 1.0];
        sys.push(i.saturating_sub(1), &row, p.y);
        if i > 0 && i < m {
            sys.push(i, &row, p.y);
        }
    }

    // slope continuity
    for (i, p) in points.iter().enumerate().take(m).skip(1) {
        let x = p.x;
        sys.push(i - 1, &[3.0 * x * x, 2.0 * x, 1.0, 0.0, -3.0 * x * x, -2.0 * x, -1.0, 0.0], 0.0);
    }

    // curvature continuity
    for (i, p) in points.iter().enumerate().take(m).skip(1) {
        let x = p.x;
        sys.push(i - 1, &[6.0 * x, 2.0, 0.0, 0.0, -6.0 * x, -2.0, 0.0, 0.0], 0.0);
    }

    // natural ends
    sys.push(0, &[6.0 * points[0].x, 2.0, 0.0, 0.0], 0.0);
    sys.push(m - 1, &[6.0 * points[m].x, 2.0, 0.0, 0.0], 0.0);

    debug_assert_eq!(sys.next, 4 * m);
    Ok((sys.a, sys.b))
}

/// A natural cubic spline through ordered control points.
///
/// Coefficients are computed once, at construction or by [`CubicSpline::refit`].
/// Editing the points through [`CubicSpline::points_mut`] leaves the fitted
/// coefficients in place until the next refit.
///
/// Points are expected sorted by `x`; this is not checked. Duplicate `x`
/// values make the system singular and leave the spline unfitted.
#[derive(Debug, Clone, Default)]
pub struct CubicSpline {
    points: Vec<Point>,
    coefficients: Option<Vec<f64>>,
    opts: SolveOptions,
}

impl CubicSpline {
    /// Fit a spline through `points`.
    ///
    /// A failed fit is logged and leaves [`CubicSpline::coefficients`] empty;
    /// use [`CubicSpline::try_new`] to get the error instead.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self::with_options(points, SolveOptions::default())
    }

    /// As [`CubicSpline::new`] with explicit solver options.
    pub fn with_options(points: impl Into<Vec<Point>>, opts: SolveOptions) -> Self {
        let mut spline = Self { points: points.into(), coefficients: None, opts };
        if spline.points.len() >= 2 {
            let _ = spline.refit();
        }
        spline
    }

    /// Fit a spline through `points`, failing if the system cannot be solved.
    pub fn try_new(points: impl Into<Vec<Point>>) -> Result<Self, SplineError> {
        let mut spline = Self { points: points.into(), coefficients: None, opts: SolveOptions::default() };
        spline.refit()?;
        Ok(spline)
    }

    /// Recompute the coefficients from the current points.
    ///
    /// On failure the previous coefficients are discarded.
    pub fn refit(&mut self) -> Result<(), SplineError> {
        self.coefficients = None;
        let fitted = build_system(&self.points).and_then(|(a, b)| {
            gaussian_elimination_with(&a, &b, &self.opts).map_err(SplineError::from)
        });
        match fitted {
            Ok(coeffs) => {
                debug!("fitted cubic spline: {} segments", coeffs.len() / 4);
                self.coefficients = Some(coeffs);
                Ok(())
            }
            Err(err) => {
                warn!("cubic spline fit over {} points failed: {err}", self.points.len());
                Err(err)
            }
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access to the control points. Call [`CubicSpline::refit`]
    /// afterwards to update the curve.
    pub fn points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.points
    }

    /// Fitted coefficients, four per segment, if the last fit succeeded.
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.coefficients.as_deref()
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Coefficients of segment `k`, if fitted.
    pub fn segment(&self, k: usize) -> Option<CubicSegment> {
        let start = k.checked_mul(4)?;
        self.coefficients
            .as_deref()?
            .get(start..start.checked_add(4)?)
            .map(CubicSegment::from_slice)
    }

    pub fn x_min(&self) -> Option<f64> {
        self.points.iter().map(|p| p.x).reduce(f64::min)
    }

    pub fn x_max(&self) -> Option<f64> {
        self.points.iter().map(|p| p.x).reduce(f64::max)
    }

    /// Index of the first segment whose end points bracket `x`.
    ///
    /// A shared knot resolves to the earlier segment.
    pub fn locate(&self, x: f64) -> Result<usize, SplineError> {
        if self.points.len() < 2 {
            return Err(SplineError::InsufficientPoints { got: self.points.len() });
        }
        self.points
            .windows(2)
            .position(|w| w[0].x <= x && x <= w[1].x)
            .ok_or_else(|| SplineError::OutOfRange {
                x,
                x_min: self.x_min().unwrap_or(f64::NAN),
                x_max: self.x_max().unwrap_or(f64::NAN),
            })
    }

    fn segment_at(&self, x: f64) -> Result<CubicSegment, SplineError> {
        let k = self.locate(x)?;
        self.segment(k).ok_or(SplineError::NotFitted { segment: k })
    }

    /// Spline value at `x`.
    ///
    /// # Errors
    /// - [`SplineError::InsufficientPoints`] with fewer than 2 points.
    /// - [`SplineError::OutOfRange`] if no segment brackets `x`.
    /// - [`SplineError::NotFitted`] if the located segment has no coefficients.
    pub fn evaluate(&self, x: f64) -> Result<f64, SplineError> {
        Ok(self.segment_at(x)?.value(x))
    }

    /// First derivative at `x`; same failure modes as [`CubicSpline::evaluate`].
    pub fn slope(&self, x: f64) -> Result<f64, SplineError> {
        Ok(self.segment_at(x)?.slope(x))
    }

    /// Second derivative at `x`; same failure modes as [`CubicSpline::evaluate`].
    pub fn curvature(&self, x: f64) -> Result<f64, SplineError> {
        Ok(self.segment_at(x)?.curvature(x))
    }
}

impl Interpolator for CubicSpline {
    fn eval(&self, x: f64) -> Result<f64, SplineError> {
        self.evaluate(x)
    }

    /// Evaluates `xs` in parallel; fails if any point fails.
    #[cfg(feature = "rayon")]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, SplineError> {
        use rayon::prelude::*;
        xs.par_iter().map(|&xq| self.evaluate(xq)).collect()
    }
}
