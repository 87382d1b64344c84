use axum::{extract::State, Extension, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    domain::usage::{AdRewardOutcome, UsageService, UsageServiceApi, UsageStatus, WatchAdResponse},
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub struct UsageController {
    usage_service: Arc<UsageService>,
}

impl UsageController {
    pub fn new(usage_service: Arc<UsageService>) -> Self {
        Self { usage_service }
    }

    /// GET /api/usage/status
    pub async fn status(
        State(controller): State<Arc<UsageController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<UsageStatus>> {
        let status = controller
            .usage_service
            .usage_status(auth_user.user_id)
            .await?;
        Ok(Json(status))
    }

    /// POST /api/usage/watch-ad - Grant one extra roll for a watched ad
    pub async fn watch_ad(
        State(controller): State<Arc<UsageController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<WatchAdResponse>> {
        let daily_ad_cap = controller.usage_service.daily_ad_cap();

        match controller
            .usage_service
            .grant_ad_token(auth_user.user_id)
            .await?
        {
            AdRewardOutcome::Granted(account) => Ok(Json(WatchAdResponse {
                success: true,
                extra_roll_tokens: account.extra_roll_tokens,
                ads_watched_today: account.ads_watched_today,
                ads_remaining_today: (daily_ad_cap - account.ads_watched_today).max(0),
                remaining_rolls: account.remaining_rolls(Utc::now().date_naive()),
            })),
            AdRewardOutcome::DailyCapReached => Err(AppError::RateLimitExceeded(format!(
                "Daily ad limit of {} reached. Come back tomorrow or upgrade to premium.",
                daily_ad_cap
            ))),
        }
    }
}
