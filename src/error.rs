use thiserror::Error;

// Unified error types for denspline

/// Failures of matrix construction, arithmetic and linear solves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("empty matrix: at least one row and one column are required")]
    Empty,
    #[error("jagged input: row {row} has {got} columns, expected {expected}")]
    Jagged { row: usize, expected: usize, got: usize },
    #[error("data length {got} does not match {rows}x{cols}")]
    LengthMismatch { rows: usize, cols: usize, got: usize },
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix is not square ({rows}x{cols}): equations do not match unknowns")]
    NotSquare { rows: usize, cols: usize },
    #[error("size mismatch: matrix has {rows} rows, right-hand side has {len} entries")]
    SizeMismatch { rows: usize, len: usize },
    #[error("no unique solution: pivot in column {0} below tolerance")]
    ZeroPivot(usize),
    #[error("invalid tolerance {0}: must be finite and > 0")]
    InvalidTolerance(f64),
}

/// Failures of spline fitting and evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },
    #[error("spline has no coefficients for segment {segment}")]
    NotFitted { segment: usize },
    #[error("evaluation point {x} outside [{x_min}, {x_max}]")]
    OutOfRange { x: f64, x_min: f64, x_max: f64 },
    #[error("spline fit failed: {0}")]
    Fit(#[from] LinalgError),
}

/// Shorthand for results of the linear-algebra layer.
pub type Result<T, E = LinalgError> = std::result::Result<T, E>;
