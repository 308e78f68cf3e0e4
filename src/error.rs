use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors surfaced by vector and line/plane operations. All are
/// fail-fast value errors reported to the immediate caller; nothing is
/// retried or recovered internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("coordinates must be nonempty")]
    EmptyCoordinates,

    #[error("coordinate {value:?} is not a decimal number")]
    InvalidCoordinate { value: String },

    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("direction of a zero-magnitude vector is undefined")]
    ZeroMagnitude,

    #[error("cross product requires dimension 3, got {dimension}")]
    DimensionNotThree { dimension: usize },
}
