use chorddice_backend::domain::referral::ReferralService;
use chorddice_backend::domain::usage::UsageService;
use chorddice_backend::infrastructure::config::{Config, Environment, LogFormat};
use chorddice_backend::infrastructure::http::build_router;
use chorddice_backend::infrastructure::repositories::{
    ReferralRepository, UsageRepository, UserRepository,
};
use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;
use uuid::Uuid;

pub mod api_client;
pub mod assertions;
pub mod db_pool;
pub mod fixtures;

use api_client::TestClient;
use db_pool::{DatabasePool, PooledDatabase};
use fixtures::TestFixtures;

static DOCKER: Lazy<Cli> = Lazy::new(Cli::default);

// Shared PostgreSQL container for all tests
static SHARED_CONTAINER: Lazy<SharedContainer> = Lazy::new(SharedContainer::new);

static DB_POOL: Lazy<DatabasePool> = Lazy::new(|| DatabasePool::new(SHARED_CONTAINER.port));

struct SharedContainer {
    _container: Container<'static, Postgres>,
    port: u16,
}

impl SharedContainer {
    fn new() -> Self {
        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        println!("🐳 Started shared PostgreSQL container on port {}", port);

        Self {
            _container: container,
            port,
        }
    }
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-testing-only";

pub fn test_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration_hours: 1,
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        base_rolls_limit: 5,
        daily_ad_cap: 5,
        ad_rewards_enabled: true,
        demo_mode_enabled: true,
    }
}

pub struct TestContext {
    pub client: TestClient,
    pub pool: PgPool,
    pub config: Config,
    pub fixtures: TestFixtures,
    _db: PooledDatabase,
}

impl TestContext {
    /// A ledger service over this test's database, for driving the ledger
    /// without going through HTTP
    pub fn usage_service(&self, ad_rewards_enabled: bool) -> UsageService {
        let pool = Arc::new(self.pool.clone());
        UsageService::new(
            Arc::new(UsageRepository::new(pool)),
            self.config.daily_ad_cap,
            ad_rewards_enabled,
        )
    }

    pub fn referral_service(&self) -> ReferralService {
        let pool = Arc::new(self.pool.clone());
        ReferralService::new(
            Arc::new(ReferralRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool)),
        )
    }

    pub fn token_for(&self, user_id: &Uuid) -> String {
        generate_test_jwt(user_id, &self.config.jwt_secret)
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let pooled_db = DB_POOL
                .get_database()
                .await
                .expect("Failed to get database from pool");

            let config = test_config(&pooled_db.database_url);

            let app = build_router(
                Arc::new(pooled_db.pool.clone()),
                Arc::new(config.clone()),
            );

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            let client = TestClient::new(&base_url);
            let fixtures = TestFixtures::new(pooled_db.pool.clone());

            Self {
                client,
                pool: pooled_db.pool.clone(),
                config,
                fixtures,
                _db: pooled_db,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // The leased database is recycled when PooledDatabase drops
        }
    }
}

// Helper to generate valid JWT tokens for testing
pub fn generate_test_jwt(user_id: &Uuid, secret: &str) -> String {
    generate_test_jwt_with_email(user_id, "player@example.com", secret)
}

pub fn generate_test_jwt_with_email(user_id: &Uuid, email: &str, secret: &str) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        sub: String,
        email: String,
        exp: i64,
        iat: i64,
    }

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: (now + chrono::Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
