use chorddice_backend::infrastructure::config::Config;
use chorddice_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use chorddice_backend::infrastructure::http::start_http_server;
use chorddice_backend::infrastructure::logging::init_logging;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting ChordDice Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        base_rolls_limit = config.base_rolls_limit,
        daily_ad_cap = config.daily_ad_cap,
        ad_rewards_enabled = config.ad_rewards_enabled,
        demo_mode_enabled = config.demo_mode_enabled,
        "Usage ledger configuration"
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    start_http_server(Arc::new(pool), Arc::new(config)).await?;

    Ok(())
}
