use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum UsageServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("user not found")]
    NotFound,
    #[error("ad rewards are disabled")]
    AdRewardsDisabled,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for UsageServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => UsageServiceError::NotFound,
            _ => UsageServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<UsageServiceError> for AppError {
    fn from(err: UsageServiceError) -> Self {
        match err {
            UsageServiceError::NotFound => AppError::NotFound("User not found".to_string()),
            UsageServiceError::AdRewardsDisabled => {
                AppError::ServiceUnavailable("Ad rewards are currently disabled".to_string())
            }
            UsageServiceError::Dependency(msg) => AppError::Internal(msg),
            UsageServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
