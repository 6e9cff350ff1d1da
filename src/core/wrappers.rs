//! Trait implementations for [`Matrix`] and vector helpers.
//!
//! This module wires the dense `Matrix` into the core traits so solvers can
//! form products and residuals generically. The Euclidean norm uses Rayon
//! parallel iterators when the `rayon` feature is enabled.

use crate::core::traits::{MatShape, MatVec};
use crate::matrix::Matrix;

/// Computes `y = A * x` for a dense matrix.
impl MatVec<Vec<f64>> for Matrix {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        assert_eq!(self.rows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.cols(), x.len(), "Input vector x has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self.row_slice(i).iter().zip(x).map(|(a, b)| a * b).sum();
        }
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows()
    }
    fn ncols(&self) -> usize {
        self.cols()
    }
}

/// Euclidean norm `||x||_2`.
pub fn norm2(x: &[f64]) -> f64 {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter().map(|xi| xi * xi).sum::<f64>().sqrt()
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter().map(|xi| xi * xi).sum::<f64>().sqrt()
    }
}

/// Residual norm `||b - A x||_2`.
pub fn residual_norm<M: MatVec<Vec<f64>> + MatShape>(a: &M, x: &[f64], b: &[f64]) -> f64 {
    let mut ax = vec![0.0; a.nrows()];
    a.matvec(&x.to_vec(), &mut ax);
    let r: Vec<f64> = b.iter().zip(&ax).map(|(bi, axi)| bi - axi).collect();
    norm2(&r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matvec_dense() {
        let a = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mut y = vec![0.0; 2];
        a.matvec(&vec![1.0, 1.0, 1.0], &mut y);
        assert_eq!(y, vec![6.0, 15.0]);
        assert!(!a.is_square());
        assert_eq!((a.nrows(), a.ncols()), (2, 3));
    }

    #[test]
    fn residual_of_exact_solution_is_zero() {
        let a = Matrix::identity(3);
        let x = [1.0, -2.0, 3.0];
        assert_eq!(residual_norm(&a, &x, &x), 0.0);
        assert!((norm2(&[3.0, 4.0]) - 5.0).abs() < 1e-15);
    }
}
