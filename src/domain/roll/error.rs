use crate::domain::usage::UsageServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum RollServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("premium required: {0}")]
    PremiumRequired(String),
    #[error("roll limit reached")]
    LimitReached,
    #[error("user not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<UsageServiceError> for RollServiceError {
    fn from(err: UsageServiceError) -> Self {
        match err {
            UsageServiceError::NotFound => RollServiceError::NotFound,
            other => RollServiceError::Dependency(other.to_string()),
        }
    }
}

impl From<RollServiceError> for AppError {
    fn from(err: RollServiceError) -> Self {
        match err {
            RollServiceError::PremiumRequired(msg) => AppError::PaymentRequired(msg),
            RollServiceError::LimitReached => AppError::RollLimitReached,
            RollServiceError::NotFound => AppError::NotFound("User not found".to_string()),
            RollServiceError::Dependency(msg) => AppError::Internal(msg),
            RollServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
