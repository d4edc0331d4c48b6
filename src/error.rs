//! Error types for the structural model

use thiserror::Error;

/// Main error type for model operations
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Node {0} not found in model")]
    NodeNotFound(u32),

    #[error("Node ID {0} already exists")]
    NodeIdExists(u32),

    #[error("Duplicate node at ({x}, {y}, {z}) - coincides with node {existing_id}")]
    DuplicateNode {
        x: f64,
        y: f64,
        z: f64,
        existing_id: u32,
    },

    #[error("Maximum number of nodes ({0}) exceeded")]
    NodeLimitExceeded(usize),

    #[error("Unknown {quantity} unit code '{code}'")]
    UnknownUnit {
        quantity: &'static str,
        code: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
