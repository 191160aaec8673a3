use thiserror::Error;

use crate::ports::RepositoryError;
use crate::qris::GenerationError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => AppError::NotFound(what),
            other => AppError::Repository(other),
        }
    }
}

impl AppError {
    /// Stable identifier for callers that branch on the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::InvalidPayload(_) => "invalid_payload",
            AppError::Generation(GenerationError::InvalidPayload(_)) => "invalid_payload",
            AppError::Generation(_) => "generation_precondition",
            AppError::NotConfigured(_) => "not_configured",
            AppError::NotFound(_) => "not_found",
            AppError::Repository(_) => "storage",
        }
    }

    /// Process exit code: 2 for problems with the caller's input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Repository(_) => 1,
            _ => 2,
        }
    }
}
