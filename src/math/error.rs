// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IfsError {
    #[error("Transform set is empty: at least one affine map is required")]
    InvalidTransformSet,

    #[error("Invalid iteration count: expected a non-negative value, got {iterations}")]
    InvalidIterationCount { iterations: i64 },

    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error(
        "Resource exhaustion while building generation {generation}: could not allocate {requested} vertices"
    )]
    ResourceExhaustion { generation: u32, requested: usize },

    #[error("Run cancelled after {completed_rounds} completed rounds")]
    Cancelled { completed_rounds: u32 },
}

pub type IfsResult<T> = Result<T, IfsError>;
