//! Utilities shared by the solvers.

pub mod convergence;
pub use convergence::SolveStats;
