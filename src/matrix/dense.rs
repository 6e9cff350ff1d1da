//! Dense row-major matrix of `f64`.
//!
//! `Matrix` owns a flat buffer of `rows * cols` values. Element and row
//! accessors are bounds-checked with assertions: an out-of-range index is a
//! programming error, not a recoverable condition. Shape-dependent
//! arithmetic (`checked_add`, `checked_sub`, `checked_mul`) reports
//! mismatches through [`LinalgError`] instead.

use crate::config::EPSILON;
use crate::error::{LinalgError, Result};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A dense `rows × cols` matrix stored row-major.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Matrix dimensions must be non-zero");
        Self { rows, cols, values: vec![0.0; rows * cols] }
    }

    /// Create an `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.values[i * n + i] = 1.0;
        }
        m
    }

    /// Build from a rectangular sequence of rows.
    ///
    /// # Errors
    /// - [`LinalgError::Empty`] if there are no rows or the first row is empty.
    /// - [`LinalgError::Jagged`] if any row length differs from the first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(LinalgError::Empty);
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(LinalgError::Empty);
        }
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(LinalgError::Jagged { row, expected: cols, got: r.len() });
            }
            values.extend_from_slice(r);
        }
        Ok(Self { rows: rows.len(), cols, values })
    }

    /// Build from row-major data.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::Empty);
        }
        if data.len() != rows * cols {
            return Err(LinalgError::LengthMismatch { rows, cols, got: data.len() });
        }
        Ok(Self { rows, cols, values: data.to_vec() })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn offset(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        r * self.cols + c
    }

    /// Element at `(r, c)`.
    ///
    /// # Panics
    /// Panics if the index is out of range.
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.values[self.offset(r, c)]
    }

    /// Overwrite the element at `(r, c)`.
    ///
    /// # Panics
    /// Panics if the index is out of range.
    pub fn set(&mut self, r: usize, c: usize, v: f64) {
        let idx = self.offset(r, c);
        self.values[idx] = v;
    }

    /// Copy of row `r`.
    pub fn row(&self, r: usize) -> Vec<f64> {
        self.row_slice(r).to_vec()
    }

    pub(crate) fn row_slice(&self, r: usize) -> &[f64] {
        assert!(r < self.rows, "row {r} out of range for {} rows", self.rows);
        &self.values[r * self.cols..(r + 1) * self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, r: usize) -> &mut [f64] {
        assert!(r < self.rows, "row {r} out of range for {} rows", self.rows);
        let cols = self.cols;
        &mut self.values[r * cols..(r + 1) * cols]
    }

    /// Replace row `r` with `values`.
    ///
    /// # Panics
    /// Panics if `r` is out of range or `values.len() != cols`.
    pub fn set_row(&mut self, r: usize, values: &[f64]) {
        assert_eq!(values.len(), self.cols, "Row length does not match column count");
        self.row_slice_mut(r).copy_from_slice(values);
    }

    /// Exchange rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.rows && b < self.rows, "row swap ({a}, {b}) out of range");
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.values.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                t.values[c * self.rows + r] = self.values[r * self.cols + c];
            }
        }
        t
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|v| v * scalar).collect(),
        }
    }

    fn zip_with(&self, rhs: &Self, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(LinalgError::DimensionMismatch {
                op,
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }
        let values = self.values.iter().zip(&rhs.values).map(|(&a, &b)| f(a, b)).collect();
        Ok(Self { rows: self.rows, cols: self.cols, values })
    }

    /// Element-wise sum; fails if the shapes differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    /// Element-wise difference; fails if the shapes differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }

    /// Matrix product `self · rhs`; fails unless `self.cols == rhs.rows`.
    ///
    /// With the `rayon` feature each output row is computed in parallel.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                op: "multiply",
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        let inner = self.cols;
        let fill_row = |i: usize, row: &mut [f64]| {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (0..inner).map(|k| self.values[i * inner + k] * rhs.values[k * rhs.cols + j]).sum();
            }
        };
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            out.values
                .par_chunks_mut(rhs.cols)
                .enumerate()
                .for_each(|(i, row)| fill_row(i, row));
        }
        #[cfg(not(feature = "rayon"))]
        {
            out.values
                .chunks_mut(rhs.cols)
                .enumerate()
                .for_each(|(i, row)| fill_row(i, row));
        }
        Ok(out)
    }

    /// `true` if both matrices share a shape and every element pair differs by
    /// less than `accuracy`.
    pub fn approx_eq(&self, other: &Self, accuracy: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.values.iter().zip(&other.values).all(|(a, b)| (a - b).abs() < accuracy)
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Flat row-major copy.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Nested copy, one `Vec` per row.
    pub fn to_2d(&self) -> Vec<Vec<f64>> {
        self.values.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;
    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

/// Approximate equality within [`EPSILON`].
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.values[self.offset(r, c)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        let idx = self.offset(r, c);
        &mut self.values[idx]
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

impl Add for &Matrix {
    type Output = Result<Matrix>;
    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        self.checked_add(rhs)
    }
}

impl Sub for &Matrix {
    type Output = Result<Matrix>;
    fn sub(self, rhs: &Matrix) -> Result<Matrix> {
        self.checked_sub(rhs)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;
    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        self.checked_mul(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.values.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
