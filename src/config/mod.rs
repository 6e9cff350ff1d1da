//! Tolerances and solver options.
//!
//! Matrix equality and the elimination pivot test share the same fixed
//! threshold. It is not scaled by the matrix norm, so a borderline system
//! passes or fails the same way regardless of its magnitude.

pub mod options;
pub use options::SolveOptions;

/// Element-wise accuracy used by `Matrix` equality.
pub const EPSILON: f64 = 1e-10;

/// Smallest pivot magnitude accepted by Gaussian elimination.
pub const PIVOT_TOL: f64 = 1e-10;
