//! Direct solver interfaces.

use crate::utils::convergence::SolveStats;

/// Common interface for dense solvers.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd + From<f64>;
    /// Solve A·x = b, writing result into `x`.
    /// Returns solve stats (including the final residual).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V,
    ) -> Result<SolveStats<Self::Scalar>, Self::Error>;
}

pub mod gauss;
pub use gauss::{augment, gaussian_elimination, gaussian_elimination_with, GaussSolver};
