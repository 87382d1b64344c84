use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    auth::AuthController, genre, health, progression::ProgressionController,
    referral::ReferralController, roll::RollController, usage::UsageController,
    user::UserController,
};
use crate::domain::{
    auth::AuthService, progression::ProgressionService, referral::ReferralService,
    roll::RollService, usage::UsageService, user::UserService,
};
use crate::infrastructure::auth::{auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::repositories::{
    ProgressionRepository, ReferralRepository, UsageRepository, UserRepository,
};

/// Wire repositories, services and controllers and build the full router
pub fn build_router(pool: Arc<DbPool>, config: Arc<Config>) -> Router {
    // 1. Repositories
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let usage_repo = Arc::new(UsageRepository::new(pool.clone()));
    let referral_repo = Arc::new(ReferralRepository::new(pool.clone()));
    let progression_repo = Arc::new(ProgressionRepository::new(pool.clone()));

    // 2. Services
    let auth_service = Arc::new(AuthService::new(user_repo.clone(), config.clone()));
    let usage_service = Arc::new(UsageService::new(
        usage_repo,
        config.daily_ad_cap,
        config.ad_rewards_enabled,
    ));
    let roll_service = Arc::new(RollService::new(usage_service.clone()));
    let referral_service = Arc::new(ReferralService::new(referral_repo, user_repo.clone()));
    let progression_service = Arc::new(ProgressionService::new(progression_repo));
    let user_service = Arc::new(UserService::new(user_repo.clone(), config.daily_ad_cap));

    // 3. Controllers
    let auth_controller = Arc::new(AuthController::new(auth_service));
    let roll_controller = Arc::new(RollController::new(roll_service));
    let usage_controller = Arc::new(UsageController::new(usage_service));
    let referral_controller = Arc::new(ReferralController::new(referral_service));
    let progression_controller = Arc::new(ProgressionController::new(progression_service));
    let user_controller = Arc::new(UserController::new(user_service));

    let auth_layer = || {
        middleware::from_fn_with_state((user_repo.clone(), config.clone()), auth_middleware)
    };

    // Public routes
    let auth_routes = Router::new()
        .route("/auth/demo", post(AuthController::create_demo_session))
        .with_state(auth_controller);

    let genre_routes = Router::new()
        .route("/api/genres", get(genre::list_genres))
        .layer(auth_layer());

    let roll_routes = Router::new()
        .route("/api/roll", post(RollController::roll))
        .with_state(roll_controller)
        .layer(auth_layer());

    let usage_routes = Router::new()
        .route("/api/usage/status", get(UsageController::status))
        .route("/api/usage/watch-ad", post(UsageController::watch_ad))
        .with_state(usage_controller)
        .layer(auth_layer());

    let user_routes = Router::new()
        .route("/api/me", get(UserController::get_me))
        .route(
            "/api/subscription/status",
            get(UserController::subscription_status),
        )
        .with_state(user_controller)
        .layer(auth_layer());

    let referral_routes = Router::new()
        .route("/api/referrals/dashboard", get(ReferralController::dashboard))
        .route(
            "/api/referrals/generate-code",
            post(ReferralController::generate_code),
        )
        .route("/api/referrals/apply", post(ReferralController::apply))
        .with_state(referral_controller)
        .layer(auth_layer());

    let progression_routes = Router::new()
        .route(
            "/api/progressions",
            get(ProgressionController::list).post(ProgressionController::create),
        )
        .route(
            "/api/progressions/:id",
            get(ProgressionController::get)
                .patch(ProgressionController::update)
                .delete(ProgressionController::delete),
        )
        .with_state(progression_controller)
        .layer(auth_layer());

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(auth_routes)
        .merge(genre_routes)
        .merge(roll_routes)
        .merge(usage_routes)
        .merge(user_routes)
        .merge(referral_routes)
        .merge(progression_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, config.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
