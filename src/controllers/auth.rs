use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::domain::auth::{AuthService, DemoSessionResponse};
use crate::error::AppResult;

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// POST /auth/demo - Start a demo session
    pub async fn create_demo_session(
        State(controller): State<Arc<AuthController>>,
    ) -> AppResult<(StatusCode, Json<DemoSessionResponse>)> {
        let response = controller.auth_service.create_demo_session().await?;
        Ok((StatusCode::CREATED, Json(response)))
    }
}
