use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ReferralServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("user not found")]
    NotFound,
    #[error("could not find a free referral code after {0} attempts")]
    CodeSpaceExhausted(usize),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ReferralServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ReferralServiceError::Invalid(msg),
            AppError::NotFound(_) => ReferralServiceError::NotFound,
            _ => ReferralServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ReferralServiceError> for AppError {
    fn from(err: ReferralServiceError) -> Self {
        match err {
            ReferralServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ReferralServiceError::NotFound => AppError::NotFound("User not found".to_string()),
            ReferralServiceError::CodeSpaceExhausted(attempts) => AppError::Internal(format!(
                "Failed to generate a unique referral code after {} attempts",
                attempts
            )),
            ReferralServiceError::Dependency(msg) => AppError::Internal(msg),
            ReferralServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
