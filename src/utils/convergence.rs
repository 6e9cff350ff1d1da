//! Solve statistics reported by solvers.

/// Outcome of a solve.
///
/// Direct solvers finish in a single pass, so `iterations` is always 1 and
/// `final_residual` is the Euclidean norm of `b - A x` for the returned `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy> SolveStats<T> {
    /// Stats for a one-pass direct solve.
    pub fn direct(final_residual: T) -> Self {
        Self { iterations: 1, final_residual, converged: true }
    }
}
