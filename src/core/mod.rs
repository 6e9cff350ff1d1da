//! Core traits and their implementations for the dense matrix.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, MatVec};
