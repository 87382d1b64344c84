use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    domain::referral::{
        ApplyReferralRequest, ApplyReferralResponse, ReferralApplication, ReferralCodeResponse,
        ReferralDashboard, ReferralService, ReferralServiceApi,
    },
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub struct ReferralController {
    referral_service: Arc<ReferralService>,
}

impl ReferralController {
    pub fn new(referral_service: Arc<ReferralService>) -> Self {
        Self { referral_service }
    }

    /// GET /api/referrals/dashboard
    pub async fn dashboard(
        State(controller): State<Arc<ReferralController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<ReferralDashboard>> {
        let dashboard = controller
            .referral_service
            .dashboard(auth_user.user_id)
            .await?;
        Ok(Json(dashboard))
    }

    /// POST /api/referrals/generate-code
    pub async fn generate_code(
        State(controller): State<Arc<ReferralController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<ReferralCodeResponse>> {
        let response = controller
            .referral_service
            .generate_code(auth_user.user_id)
            .await?;
        Ok(Json(response))
    }

    /// POST /api/referrals/apply
    pub async fn apply(
        State(controller): State<Arc<ReferralController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<ApplyReferralRequest>,
    ) -> AppResult<Json<ApplyReferralResponse>> {
        let application = controller
            .referral_service
            .apply_code(auth_user.user_id, &request.referral_code)
            .await?;

        match application {
            ReferralApplication::Applied(_) => Ok(Json(ApplyReferralResponse {
                success: true,
                message: application.message().to_string(),
            })),
            denied => Err(AppError::BadRequest(denied.message().to_string())),
        }
    }
}
