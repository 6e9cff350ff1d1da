//! Determinant, adjugate and inverse by cofactor (Laplace) expansion.
//!
//! Every routine recurses on owned `(n-1) × (n-1)` minors, so the cost grows
//! factorially with `n`. This is meant for the small systems the spline
//! builder and demonstration code produce; use [`crate::solver`] for solving.

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

impl Matrix {
    fn require_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare { rows: self.rows(), cols: self.cols() });
        }
        Ok(self.rows())
    }

    /// The matrix with row `row` and column `col` removed.
    ///
    /// # Panics
    /// Panics if the matrix has a single row or column, or the indices are
    /// out of range.
    pub fn minor(&self, row: usize, col: usize) -> Matrix {
        assert!(self.rows() > 1 && self.cols() > 1, "minor of a single row/column matrix");
        assert!(row < self.rows() && col < self.cols(), "minor ({row}, {col}) out of range");
        let mut out = Matrix::zeros(self.rows() - 1, self.cols() - 1);
        for (i, r) in (0..self.rows()).filter(|&r| r != row).enumerate() {
            let src = self.row_slice(r);
            let dst = out.row_slice_mut(i);
            dst[..col].copy_from_slice(&src[..col]);
            dst[col..].copy_from_slice(&src[col + 1..]);
        }
        out
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// # Errors
    /// [`LinalgError::NotSquare`] for non-square matrices.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        Ok(laplace(self))
    }

    /// Classical adjugate: the transpose of the signed cofactor matrix, so that
    /// `M · adj(M) = det(M) · I`.
    ///
    /// # Errors
    /// [`LinalgError::NotSquare`] for non-square matrices.
    pub fn adjugate(&self) -> Result<Matrix> {
        let n = self.require_square()?;
        if n == 1 {
            return Ok(Matrix::identity(1));
        }
        let mut cof = Matrix::zeros(n, n);
        for r in 0..n {
            for c in 0..n {
                let sign = if (r + c) % 2 == 0 { 1.0 } else { -1.0 };
                cof[(r, c)] = sign * laplace(&self.minor(r, c));
            }
        }
        Ok(cof.transpose())
    }

    /// `adj(M) / det(M)`.
    ///
    /// There is no singularity guard: a tiny or zero determinant still
    /// divides, giving large or non-finite entries. Check `determinant()`
    /// first when that matters.
    ///
    /// # Errors
    /// [`LinalgError::NotSquare`] for non-square matrices.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        Ok((1.0 / det) * &self.adjugate()?)
    }
}

/// Determinant of a square matrix.
fn laplace(m: &Matrix) -> f64 {
    match m.rows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(1, 0)] * m[(0, 1)],
        n => {
            let mut det = 0.0;
            let mut sign = 1.0;
            for c in 0..n {
                let a = m[(0, c)];
                if a != 0.0 {
                    det += sign * a * laplace(&m.minor(0, c));
                }
                sign = -sign;
            }
            det
        }
    }
}
