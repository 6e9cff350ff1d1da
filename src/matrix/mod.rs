//! Matrix module: the dense matrix value type and its cofactor routines.

pub mod dense;
pub use dense::Matrix;
pub mod cofactor;
