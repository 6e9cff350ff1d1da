//! API options for the elimination solver.
//!
//! This module provides the `SolveOptions` struct, which carries the pivot
//! tolerance used by Gaussian elimination. The default reproduces the fixed
//! `PIVOT_TOL` threshold; callers may loosen or tighten it for borderline
//! systems through the validating setter.

use crate::config::PIVOT_TOL;
use crate::error::LinalgError;

/// Solver parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Pivots with magnitude below this value mark the system singular
    pub pivot_tol: f64,
}

impl SolveOptions {
    pub fn new() -> Self {
        Self { pivot_tol: PIVOT_TOL }
    }

    /// Replace the pivot tolerance.
    ///
    /// # Errors
    /// [`LinalgError::InvalidTolerance`] if `tol` is non-finite or `<= 0`.
    pub fn with_pivot_tol(mut self, tol: f64) -> Result<Self, LinalgError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(LinalgError::InvalidTolerance(tol));
        }
        self.pivot_tol = tol;
        Ok(self)
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_fixed_threshold() {
        assert_eq!(SolveOptions::default().pivot_tol, 1e-10);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(
            SolveOptions::new().with_pivot_tol(0.0),
            Err(LinalgError::InvalidTolerance(0.0))
        );
        assert!(SolveOptions::new().with_pivot_tol(f64::NAN).is_err());
        assert!(SolveOptions::new().with_pivot_tol(-1e-3).is_err());
        let opts = SolveOptions::new().with_pivot_tol(1e-6).unwrap();
        assert_eq!(opts.pivot_tol, 1e-6);
    }
}
