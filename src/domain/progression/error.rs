use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ProgressionServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("progression not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ProgressionServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ProgressionServiceError::Invalid(msg),
            AppError::NotFound(_) => ProgressionServiceError::NotFound,
            _ => ProgressionServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ProgressionServiceError> for AppError {
    fn from(err: ProgressionServiceError) -> Self {
        match err {
            ProgressionServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ProgressionServiceError::NotFound => {
                AppError::NotFound("Progression not found".to_string())
            }
            ProgressionServiceError::Dependency(msg) => AppError::Internal(msg),
            ProgressionServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
