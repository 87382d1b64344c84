use super::error::UsageServiceError;
use super::model::{
    AdRewardOutcome, Entitlement, RollOutcome, RollSource, UsageAccount, UsageStatus,
};
use crate::infrastructure::repositories::UsageRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct UsageService {
    usage_repo: Arc<UsageRepository>,
    daily_ad_cap: i32,
    ad_rewards_enabled: bool,
}

impl UsageService {
    pub fn new(usage_repo: Arc<UsageRepository>, daily_ad_cap: i32, ad_rewards_enabled: bool) -> Self {
        Self {
            usage_repo,
            daily_ad_cap,
            ad_rewards_enabled,
        }
    }

    pub fn daily_ad_cap(&self) -> i32 {
        self.daily_ad_cap
    }
}

#[async_trait]
pub trait UsageServiceApi: Send + Sync {
    async fn entitlement(&self, user_id: Uuid) -> Result<Entitlement, UsageServiceError>;

    async fn can_roll(&self, user_id: Uuid) -> Result<bool, UsageServiceError>;

    /// Spends one roll: the base allowance first, then an extra token.
    async fn consume_roll(&self, user_id: Uuid) -> Result<RollOutcome, UsageServiceError>;

    async fn grant_ad_token(&self, user_id: Uuid) -> Result<AdRewardOutcome, UsageServiceError>;

    async fn usage_status(&self, user_id: Uuid) -> Result<UsageStatus, UsageServiceError>;
}

#[async_trait]
impl UsageServiceApi for UsageService {
    async fn entitlement(&self, user_id: Uuid) -> Result<Entitlement, UsageServiceError> {
        let account = self.find_account(user_id).await?;
        Ok(account.entitlement(Utc::now()))
    }

    async fn can_roll(&self, user_id: Uuid) -> Result<bool, UsageServiceError> {
        let now = Utc::now();
        let account = self.find_account(user_id).await?;
        Ok(account.can_roll(now.date_naive(), now))
    }

    async fn consume_roll(&self, user_id: Uuid) -> Result<RollOutcome, UsageServiceError> {
        let now = Utc::now();
        let today = now.date_naive();
        let account = self.find_account(user_id).await?;

        if account.entitlement(now).is_unlimited() {
            return Ok(RollOutcome::Unlimited);
        }

        if self
            .usage_repo
            .reset_rolls_if_new_day(user_id, today)
            .await
            .map_err(|e| UsageServiceError::Dependency(e.to_string()))?
        {
            tracing::info!(user_id = %user_id, date = %today, "Daily roll counter reset");
        }

        if let Some(account) = self
            .usage_repo
            .consume_base_roll(user_id)
            .await
            .map_err(|e| UsageServiceError::Dependency(e.to_string()))?
        {
            tracing::info!(
                user_id = %user_id,
                rolls_used = account.dice_rolls_used,
                rolls_limit = account.dice_rolls_limit,
                "Roll consumed from base allowance"
            );
            return Ok(RollOutcome::Consumed {
                source: RollSource::BaseAllowance,
                account,
            });
        }

        if let Some(account) = self
            .usage_repo
            .consume_extra_token(user_id)
            .await
            .map_err(|e| UsageServiceError::Dependency(e.to_string()))?
        {
            tracing::info!(
                user_id = %user_id,
                tokens_left = account.extra_roll_tokens,
                "Roll consumed from extra token"
            );
            return Ok(RollOutcome::Consumed {
                source: RollSource::ExtraToken,
                account,
            });
        }

        tracing::info!(user_id = %user_id, "Roll denied, allowance exhausted");
        Ok(RollOutcome::Denied)
    }

    async fn grant_ad_token(&self, user_id: Uuid) -> Result<AdRewardOutcome, UsageServiceError> {
        if !self.ad_rewards_enabled {
            return Err(UsageServiceError::AdRewardsDisabled);
        }

        // Surfaces a missing account as 404 rather than a cap denial
        self.find_account(user_id).await?;

        let today = Utc::now().date_naive();
        let granted = self
            .usage_repo
            .grant_ad_token(user_id, today, self.daily_ad_cap)
            .await
            .map_err(|e| UsageServiceError::Dependency(e.to_string()))?;

        match granted {
            Some(account) => {
                tracing::info!(
                    user_id = %user_id,
                    ads_watched_today = account.ads_watched_today,
                    tokens = account.extra_roll_tokens,
                    "Ad reward granted"
                );
                Ok(AdRewardOutcome::Granted(account))
            }
            None => {
                tracing::info!(user_id = %user_id, cap = self.daily_ad_cap, "Daily ad cap reached");
                Ok(AdRewardOutcome::DailyCapReached)
            }
        }
    }

    async fn usage_status(&self, user_id: Uuid) -> Result<UsageStatus, UsageServiceError> {
        let now = Utc::now();
        let account = self.find_account(user_id).await?;
        Ok(account.status(now.date_naive(), now, self.daily_ad_cap))
    }
}

impl UsageService {
    async fn find_account(&self, user_id: Uuid) -> Result<UsageAccount, UsageServiceError> {
        self.usage_repo
            .find_account(user_id)
            .await
            .map_err(|e| UsageServiceError::Dependency(e.to_string()))?
            .ok_or(UsageServiceError::NotFound)
    }
}
