use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    domain::roll::{RollRequest, RollResponse, RollService, RollServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct RollController {
    roll_service: Arc<RollService>,
}

impl RollController {
    pub fn new(roll_service: Arc<RollService>) -> Self {
        Self { roll_service }
    }

    /// POST /api/roll - Spend a roll and generate chords
    pub async fn roll(
        State(controller): State<Arc<RollController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<RollRequest>,
    ) -> AppResult<Json<RollResponse>> {
        let response = controller
            .roll_service
            .roll(auth_user.user_id, request)
            .await?;
        Ok(Json(response))
    }
}
