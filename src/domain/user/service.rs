use super::error::UserServiceError;
use super::{MeResponse, SubscriptionStatusResponse, User};
use crate::domain::usage::UsageAccount;
use crate::infrastructure::repositories::UserRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    user_repo: Arc<UserRepository>,
    daily_ad_cap: i32,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, daily_ad_cap: i32) -> Self {
        Self {
            user_repo,
            daily_ad_cap,
        }
    }
}

#[async_trait]
pub trait UserServiceApi: Send + Sync {
    /// Profile with subscription and usage info
    async fn get_user_profile(&self, user_id: Uuid) -> Result<MeResponse, UserServiceError>;

    async fn subscription_status(
        &self,
        user_id: Uuid,
    ) -> Result<SubscriptionStatusResponse, UserServiceError>;
}

#[async_trait]
impl UserServiceApi for UserService {
    async fn get_user_profile(&self, user_id: Uuid) -> Result<MeResponse, UserServiceError> {
        let user = self.find_user(user_id).await?;
        let now = Utc::now();
        let usage = UsageAccount::from(&user).status(now.date_naive(), now, self.daily_ad_cap);

        Ok(MeResponse {
            id: user.id,
            subscription: SubscriptionStatusResponse::for_user(&user, now),
            is_demo: user.is_demo,
            referral_code: user.referral_code,
            email: user.email,
            usage,
            created_at: user.created_at,
        })
    }

    async fn subscription_status(
        &self,
        user_id: Uuid,
    ) -> Result<SubscriptionStatusResponse, UserServiceError> {
        let user = self.find_user(user_id).await?;
        Ok(SubscriptionStatusResponse::for_user(&user, Utc::now()))
    }
}

impl UserService {
    async fn find_user(&self, user_id: Uuid) -> Result<User, UserServiceError> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| UserServiceError::Dependency(e.to_string()))?
            .ok_or(UserServiceError::NotFound)
    }
}
