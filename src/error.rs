//! Error types for braid representation and braid-word operations.

use thiserror::Error;

/// Result type for braid operations
pub type Result<T> = std::result::Result<T, BraidError>;

/// Errors raised by the representation engine and the braid-word algebra.
///
/// All of these are precondition violations: nothing inside the crate retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BraidError {
    /// Exchange or basis index outside its valid range
    #[error("index {index} is out of range (max {max})")]
    InvalidIndex { index: usize, max: usize },

    /// The two states of an amplitude query have different label counts
    #[error("fusion states have different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Weave input that cannot be expanded
    #[error("malformed weave: {0}")]
    MalformedWeave(String),

    /// `uncouple_all` met a generator other than σ₁ or σ₂
    #[error("unexpected generator σ_{0} in a two-generator weave")]
    UnexpectedGenerator(usize),

    /// Braid word whose index and power sequences differ in length
    #[error("braid word has {sigma} generators but {power} powers")]
    WordLengthMismatch { sigma: usize, power: usize },

    /// Matrix Evaluator referenced an (index, power) pair absent from the table
    #[error("no generator σ_{index}^{power} in the table")]
    MissingGenerator { index: usize, power: i32 },

    /// Generator matrix without an inverse
    #[error("generator σ_{0} is singular")]
    SingularGenerator(usize),

    /// Two matrices that should share a dimension do not
    #[error("matrix dimensions differ ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// Matrix that should be square is not
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Register shape that cannot hold a fusion space
    #[error("invalid register: {0}")]
    InvalidRegister(String),
}
