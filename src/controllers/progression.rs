use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::progression::{
    CreateProgressionRequest, ListProgressionsQuery, ProgressionResponse,
    UpdateProgressionRequest,
};
use crate::{
    domain::progression::{ProgressionService, ProgressionServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct ProgressionController {
    progression_service: Arc<ProgressionService>,
}

impl ProgressionController {
    pub fn new(progression_service: Arc<ProgressionService>) -> Self {
        Self { progression_service }
    }

    /// GET /api/progressions - List saved progressions, optionally favorites only
    pub async fn list(
        State(controller): State<Arc<ProgressionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Query(query): Query<ListProgressionsQuery>,
    ) -> AppResult<Json<Vec<ProgressionResponse>>> {
        let progressions = controller
            .progression_service
            .list(auth_user.user_id, query.favorites)
            .await?;
        Ok(Json(progressions))
    }

    /// POST /api/progressions
    pub async fn create(
        State(controller): State<Arc<ProgressionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<CreateProgressionRequest>,
    ) -> AppResult<(StatusCode, Json<ProgressionResponse>)> {
        let progression = controller
            .progression_service
            .create(auth_user.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(progression)))
    }

    /// GET /api/progressions/{id}
    pub async fn get(
        State(controller): State<Arc<ProgressionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(progression_id): Path<Uuid>,
    ) -> AppResult<Json<ProgressionResponse>> {
        let progression = controller
            .progression_service
            .get(auth_user.user_id, progression_id)
            .await?;
        Ok(Json(progression))
    }

    /// PATCH /api/progressions/{id} - Toggle favorite
    pub async fn update(
        State(controller): State<Arc<ProgressionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(progression_id): Path<Uuid>,
        Json(request): Json<UpdateProgressionRequest>,
    ) -> AppResult<Json<ProgressionResponse>> {
        let progression = controller
            .progression_service
            .set_favorite(auth_user.user_id, progression_id, request.is_favorite)
            .await?;
        Ok(Json(progression))
    }

    /// DELETE /api/progressions/{id}
    pub async fn delete(
        State(controller): State<Arc<ProgressionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(progression_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller
            .progression_service
            .delete(auth_user.user_id, progression_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
