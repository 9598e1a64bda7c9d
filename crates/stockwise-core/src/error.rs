//! Error types for stockwise

use thiserror::Error;

/// Main error type for sourcing operations
#[derive(Debug, Error)]
pub enum SourcingError {
    /// A required criterion weight was absent from map-shaped input
    #[error("Missing weight for criterion `{0}`")]
    MissingWeight(String),

    /// Map-shaped weight input carried a key outside the four criteria
    #[error("Unknown weight key `{0}`")]
    UnknownWeight(String),

    /// Product key sets disagree between stock, demand, or metric inputs
    #[error("Product key-set mismatch: {0}")]
    ProductMismatch(String),

    /// Two entities of the same kind share an identifier
    #[error("Duplicate {kind} id `{id}`")]
    DuplicateEntity { kind: &'static str, id: String },

    /// A stock, demand, priority, weight, or metric value was negative
    #[error("Negative {kind} for {subject}: {value}")]
    Negative {
        kind: &'static str,
        subject: String,
        value: f64,
    },

    /// A priority, weight, or metric value was NaN or infinite
    #[error("Non-finite {kind} for {subject}")]
    NonFinite {
        kind: &'static str,
        subject: String,
    },

    /// A metric tensor's value count disagrees with its declared dimensions
    #[error("Metric `{name}` has {actual} values, expected {expected}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A metric tensor's dimensions disagree with the entity counts
    #[error("Metric `{name}` has shape {actual:?}, expected {expected:?}")]
    WrongDimensions {
        name: String,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    /// Invalid operation for the current pipeline state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for sourcing operations
pub type Result<T> = std::result::Result<T, SourcingError>;
