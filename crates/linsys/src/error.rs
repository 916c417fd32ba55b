//! Error type shared by every fallible operation in the crate.

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LinsysError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LinsysError {
    /// A vector (or system) was built from an empty sequence.
    #[error("the coordinates must be nonempty")]
    EmptyInput,

    /// Operands or rows live in different dimensions.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Normalization or an angle was requested for the zero vector.
    #[error("cannot normalize the zero vector")]
    ZeroVector,

    /// Projection onto a zero basis vector.
    #[error("no unique parallel component")]
    NoUniqueComponent,

    /// Cross product outside of two or three dimensions.
    #[error("only defined in two or three dimensions, got {0}")]
    DimensionUnsupported(usize),

    #[error("row {row} out of range for a system of {len} equations")]
    RowOutOfRange { row: usize, len: usize },

    /// Scaling a row by zero would erase the equation.
    #[error("cannot multiply a row by a zero coefficient")]
    ZeroCoefficient,
}
