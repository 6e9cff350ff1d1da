//! Gaussian elimination with partial pivoting.
//!
//! The system `A x = b` is solved on the augmented matrix `[A | b]`. At each
//! column the remaining row with the largest pivot magnitude is swapped into
//! place and normalized so the pivot becomes 1, then eliminated from the
//! rows below. Back substitution needs no division because every pivot row
//! is already normalized.
//!
//! # Usage
//! - Use [`gaussian_elimination`] for a one-off solve.
//! - Use [`GaussSolver`] where a [`LinearSolver`] is expected, or to carry
//!   non-default [`SolveOptions`].
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.4

use crate::config::SolveOptions;
use crate::core::wrappers::residual_norm;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use log::{debug, trace};

/// Build `[A | b]`: `a` with `b` appended as an extra column.
///
/// # Errors
/// [`LinalgError::SizeMismatch`] if `b.len() != a.rows()`.
pub fn augment(a: &Matrix, b: &[f64]) -> Result<Matrix> {
    if b.len() != a.rows() {
        return Err(LinalgError::SizeMismatch { rows: a.rows(), len: b.len() });
    }
    let cols = a.cols() + 1;
    let mut aug = Matrix::zeros(a.rows(), cols);
    for (r, &br) in b.iter().enumerate() {
        let row = aug.row_slice_mut(r);
        row[..cols - 1].copy_from_slice(a.row_slice(r));
        row[cols - 1] = br;
    }
    Ok(aug)
}

/// Solve `A x = b` with the default pivot tolerance.
///
/// # Errors
/// - [`LinalgError::SizeMismatch`] if `b.len() != a.rows()`.
/// - [`LinalgError::NotSquare`] if `a` is not square.
/// - [`LinalgError::ZeroPivot`] if no pivot of usable magnitude exists.
pub fn gaussian_elimination(a: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
    gaussian_elimination_with(a, b, &SolveOptions::default())
}

/// Solve `A x = b` using `opts.pivot_tol` as the singularity threshold.
pub fn gaussian_elimination_with(a: &Matrix, b: &[f64], opts: &SolveOptions) -> Result<Vec<f64>> {
    if b.len() != a.rows() {
        debug!("matrix has {} rows but right-hand side has {} entries", a.rows(), b.len());
        return Err(LinalgError::SizeMismatch { rows: a.rows(), len: b.len() });
    }
    if !a.is_square() {
        debug!("{}x{} system: equations do not match unknowns", a.rows(), a.cols());
        return Err(LinalgError::NotSquare { rows: a.rows(), cols: a.cols() });
    }

    let n = a.rows();
    let mut aug = augment(a, b)?;

    for i in 0..n {
        let (pivot_row, max_abs) = (i..n)
            .map(|r| (r, aug[(r, i)].abs()))
            .fold((i, -1.0), |best, cand| if cand.1 > best.1 { cand } else { best });

        if max_abs < opts.pivot_tol {
            debug!("no unique solution: best pivot {max_abs:e} in column {i}");
            return Err(LinalgError::ZeroPivot(i));
        }

        if pivot_row != i {
            trace!("swap rows {i} and {pivot_row}");
            aug.swap_rows(i, pivot_row);
        }

        let pivot = aug[(i, i)];
        aug.row_slice_mut(i).iter_mut().for_each(|v| *v /= pivot);
        let pivot_vals = aug.row(i);

        for r in i + 1..n {
            let factor = aug[(r, i)];
            if factor == 0.0 {
                continue;
            }
            for (v, p) in aug.row_slice_mut(r).iter_mut().zip(&pivot_vals) {
                *v -= p * factor;
            }
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let row = aug.row_slice(i);
        x[i] = row[n] - (i + 1..n).map(|j| row[j] * x[j]).sum::<f64>();
    }
    Ok(x)
}

/// Elimination solver usable through [`LinearSolver`].
#[derive(Debug, Clone, Default)]
pub struct GaussSolver {
    opts: SolveOptions,
}

impl GaussSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: SolveOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &SolveOptions {
        &self.opts
    }
}

impl LinearSolver<Matrix, Vec<f64>> for GaussSolver {
    type Error = LinalgError;
    type Scalar = f64;

    /// Solve Ax = b by elimination.
    ///
    /// # Arguments
    /// * `a` - Square system matrix
    /// * `b` - Right-hand side vector
    /// * `x` - On input: ignored; on output: solution vector (untouched on error)
    ///
    /// # Returns
    /// * `Ok(SolveStats)` with the final residual `||b - A x||_2`
    fn solve(&mut self, a: &Matrix, b: &Vec<f64>, x: &mut Vec<f64>) -> Result<SolveStats<f64>> {
        let sol = gaussian_elimination_with(a, b, &self.opts)?;
        let res = residual_norm(a, &sol, b);
        *x = sol;
        Ok(SolveStats::direct(res))
    }
}
