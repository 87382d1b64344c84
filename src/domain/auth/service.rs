use super::{error::AuthServiceError, DemoSessionResponse, JwtManager};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::UserRepository;
use std::sync::Arc;
use uuid::Uuid;

const DEMO_EMAIL_DOMAIN: &str = "demo.chorddice.app";

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, config: Arc<Config>) -> Self {
        Self { user_repo, config }
    }

    /// Creates a throwaway demo account and signs a token for it. Demo
    /// accounts carry unlimited entitlements.
    pub async fn create_demo_session(&self) -> Result<DemoSessionResponse, AuthServiceError> {
        if !self.config.demo_mode_enabled {
            return Err(AuthServiceError::DemoDisabled);
        }

        let email = format!("demo-{}@{}", Uuid::new_v4().simple(), DEMO_EMAIL_DOMAIN);
        let user = self
            .user_repo
            .create(&email, true, self.config.base_rolls_limit)
            .await
            .map_err(|e| AuthServiceError::Dependency(e.to_string()))?;

        let jwt_manager = JwtManager::new(
            self.config.jwt_secret.clone(),
            self.config.jwt_expiration_hours,
        );
        let token = jwt_manager.generate_token(user.id, &user.email)?;

        tracing::info!(user_id = %user.id, "Demo session created");

        Ok(DemoSessionResponse {
            token,
            user_id: user.id,
            expires_in: jwt_manager.expires_in_seconds(),
        })
    }
}
