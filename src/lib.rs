//! denspline: dense linear algebra and natural cubic splines
//!
//! This crate provides a row-major `Matrix` with cofactor-based determinant, adjugate
//! and inverse, a Gaussian-elimination solver with partial pivoting, and a natural
//! cubic spline whose coefficients come from solving one dense system.
//!
//! ```
//! use denspline::{CubicSpline, Point};
//!
//! let spline = CubicSpline::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 0.0),
//! ]);
//! assert!((spline.evaluate(0.5).unwrap() - 0.6875).abs() < 1e-9);
//! assert!(spline.evaluate(3.0).is_err());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod interpolation;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use interpolation::*;
pub use matrix::*;
pub use solver::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
