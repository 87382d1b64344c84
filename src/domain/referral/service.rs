use super::error::ReferralServiceError;
use super::model::{
    generate_referral_code, ReferralApplication, ReferralCodeResponse, ReferralDashboard,
    SettlementReport, MAX_CODE_ATTEMPTS,
};
use crate::domain::user::User;
use crate::error::AppError;
use crate::infrastructure::db::is_unique_violation;
use crate::infrastructure::repositories::{ReferralRepository, UserRepository};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const REFERRAL_CODE_PATTERN: &str = r"^[A-Za-z0-9]{1,20}$";

/// Produces candidate referral codes
pub type CodeSource = Arc<dyn Fn() -> String + Send + Sync>;

pub struct ReferralService {
    referral_repo: Arc<ReferralRepository>,
    user_repo: Arc<UserRepository>,
    code_source: CodeSource,
}

impl ReferralService {
    pub fn new(referral_repo: Arc<ReferralRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            referral_repo,
            user_repo,
            code_source: Arc::new(|| generate_referral_code(&mut rand::thread_rng())),
        }
    }

    /// Replaces the random code source, e.g. with a seeded or scripted one
    pub fn with_code_source(mut self, code_source: CodeSource) -> Self {
        self.code_source = code_source;
        self
    }
}

#[async_trait]
pub trait ReferralServiceApi: Send + Sync {
    /// Returns the account's code, creating one on first use.
    async fn generate_code(&self, user_id: Uuid) -> Result<ReferralCodeResponse, ReferralServiceError>;

    async fn apply_code(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<ReferralApplication, ReferralServiceError>;

    /// Grants one month of subscription to referrers whose referee is
    /// subscribed. Each reward is granted at most once.
    async fn settle_rewards(&self) -> Result<SettlementReport, ReferralServiceError>;

    async fn dashboard(&self, user_id: Uuid) -> Result<ReferralDashboard, ReferralServiceError>;
}

#[async_trait]
impl ReferralServiceApi for ReferralService {
    async fn generate_code(&self, user_id: Uuid) -> Result<ReferralCodeResponse, ReferralServiceError> {
        let user = self.find_user(user_id).await?;
        if let Some(code) = user.referral_code {
            return Ok(existing_code(code));
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = (self.code_source)();

            match self.referral_repo.assign_referral_code(user_id, &code).await {
                Ok(true) => {
                    tracing::info!(user_id = %user_id, attempt, "Referral code generated");
                    return Ok(ReferralCodeResponse {
                        referral_code: code,
                        message: "Referral code generated successfully!".to_string(),
                    });
                }
                Ok(false) => {
                    // A concurrent request assigned a code first
                    let user = self.find_user(user_id).await?;
                    return user.referral_code.map(existing_code).ok_or_else(|| {
                        ReferralServiceError::Dependency(
                            "Referral code vanished after concurrent assignment".to_string(),
                        )
                    });
                }
                Err(AppError::Database(e)) if is_unique_violation(&e) => {
                    tracing::warn!(user_id = %user_id, attempt, "Referral code collision, retrying");
                }
                Err(e) => return Err(ReferralServiceError::Dependency(e.to_string())),
            }
        }

        tracing::error!(
            user_id = %user_id,
            attempts = MAX_CODE_ATTEMPTS,
            "Referral code space exhausted"
        );
        Err(ReferralServiceError::CodeSpaceExhausted(MAX_CODE_ATTEMPTS))
    }

    async fn apply_code(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<ReferralApplication, ReferralServiceError> {
        let pattern = regex::Regex::new(REFERRAL_CODE_PATTERN)
            .map_err(|e| ReferralServiceError::Other(e.into()))?;
        if !pattern.is_match(code) {
            return Err(ReferralServiceError::Invalid(
                "Referral code must be 1 to 20 letters or digits".to_string(),
            ));
        }
        let code = code.to_uppercase();

        let referrer = match self
            .referral_repo
            .find_user_by_referral_code(&code)
            .await
            .map_err(|e| ReferralServiceError::Dependency(e.to_string()))?
        {
            Some(referrer) => referrer,
            None => return Ok(ReferralApplication::InvalidCode),
        };

        if referrer.id == user_id {
            return Ok(ReferralApplication::SelfReferral);
        }

        let user = self.find_user(user_id).await?;
        if user.referred_by.is_some() {
            return Ok(ReferralApplication::AlreadyReferred);
        }

        match self
            .referral_repo
            .apply_referral(user_id, referrer.id, &code)
            .await
        {
            Ok(Some(referral)) => {
                tracing::info!(
                    referee = %user_id,
                    referrer = %referrer.id,
                    "Referral code applied"
                );
                Ok(ReferralApplication::Applied(referral))
            }
            Ok(None) => Ok(ReferralApplication::AlreadyReferred),
            Err(AppError::Database(e)) if is_unique_violation(&e) => {
                Ok(ReferralApplication::AlreadyReferred)
            }
            Err(e) => Err(ReferralServiceError::Dependency(e.to_string())),
        }
    }

    async fn settle_rewards(&self) -> Result<SettlementReport, ReferralServiceError> {
        let pending = self
            .referral_repo
            .find_pending_rewards()
            .await
            .map_err(|e| ReferralServiceError::Dependency(e.to_string()))?;

        let mut report = SettlementReport::default();

        for referral in pending {
            match self.referral_repo.grant_reward(&referral).await {
                Ok(true) => {
                    tracing::info!(
                        referral_id = %referral.id,
                        referrer = %referral.referrer_user_id,
                        "Referral reward granted"
                    );
                    report.processed += 1;
                }
                Ok(false) => report.skipped += 1,
                Err(e) => {
                    tracing::error!(referral_id = %referral.id, error = %e, "Referral reward failed");
                    report.errors.push(format!("referral {}: {}", referral.id, e));
                }
            }
        }

        Ok(report)
    }

    async fn dashboard(&self, user_id: Uuid) -> Result<ReferralDashboard, ReferralServiceError> {
        let user = self.find_user(user_id).await?;
        let referrals = self
            .referral_repo
            .find_by_referrer(user_id)
            .await
            .map_err(|e| ReferralServiceError::Dependency(e.to_string()))?;

        let rewards_pending = referrals.iter().filter(|r| !r.reward_granted).count();

        Ok(ReferralDashboard {
            referral_code: user.referral_code,
            total_referred: referrals.len(),
            rewards_pending,
            rewards_earned: user.referral_rewards_earned,
            referrals,
        })
    }
}

impl ReferralService {
    async fn find_user(&self, user_id: Uuid) -> Result<User, ReferralServiceError> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| ReferralServiceError::Dependency(e.to_string()))?
            .ok_or(ReferralServiceError::NotFound)
    }
}

fn existing_code(code: String) -> ReferralCodeResponse {
    ReferralCodeResponse {
        referral_code: code,
        message: "You already have a referral code".to_string(),
    }
}
