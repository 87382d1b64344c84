use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::{
    domain::auth::JwtManager, error::AppError, infrastructure::repositories::UserRepository,
};
use uuid::Uuid;

/// Account context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_demo: bool,
}

/// Bearer token authentication for `/api` routes
pub async fn auth_middleware(
    State((user_repo, config)): State<(Arc<UserRepository>, Arc<Config>)>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let jwt_manager = JwtManager::new(config.jwt_secret.clone(), config.jwt_expiration_hours);
    let (user_id, email) = jwt_manager.extract_identity(token)?;

    let user = match user_repo.find_by_id(user_id).await? {
        Some(user) => user,
        None => {
            let user = user_repo
                .provision(user_id, &email, config.base_rolls_limit)
                .await?
                .ok_or_else(|| {
                    AppError::Unauthorized("Email already registered to another account".to_string())
                })?;
            tracing::info!(user_id = %user.id, "Free account provisioned on first sign-in");
            user
        }
    };

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        email: user.email,
        is_demo: user.is_demo,
    });

    Ok(next.run(request).await)
}
