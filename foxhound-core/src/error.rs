//! Structural faults raised by the rules engine
//!
//! These signal a caller bug or corrupted data (bad dimension, malformed
//! roster, malformed label, unknown role symbol). Rule-violating moves are
//! not errors: they are reported as `false` by the legality checks.

use thiserror::Error;

/// Error types for engine preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Given dimension must be between {min} and {max} but is: {dim}")]
    DimensionOutOfRange { dim: i32, min: i8, max: i8 },

    #[error("Given roster is invalid for dimension {dim}: {reason}")]
    InvalidRoster { dim: i8, reason: String },

    #[error("Invalid board coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid figure type: {0}")]
    InvalidRole(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
