//! Error handling for the candidate scorer
//!
//! Scoring itself never fails on bad candidate data; these errors cover
//! construction, weight validation, task joins and the CLI's file/config I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Scoring task failed: {0}")]
    Task(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ScorerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScorerError {
    fn from(err: anyhow::Error) -> Self {
        ScorerError::InvalidInput(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ScorerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ScorerError::Task(err.to_string())
    }
}
