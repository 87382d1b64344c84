//! One-shot referral reward settlement, meant to run from a scheduler.

use chorddice_backend::domain::referral::{ReferralService, ReferralServiceApi};
use chorddice_backend::infrastructure::config::Config;
use chorddice_backend::infrastructure::db::create_pool;
use chorddice_backend::infrastructure::logging::init_logging;
use chorddice_backend::infrastructure::repositories::{ReferralRepository, UserRepository};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_logging(&config);

    let pool = Arc::new(create_pool(&config.database_url).await?);
    let referral_service = ReferralService::new(
        Arc::new(ReferralRepository::new(pool.clone())),
        Arc::new(UserRepository::new(pool)),
    );

    let report = referral_service.settle_rewards().await?;

    tracing::info!(
        processed = report.processed,
        skipped = report.skipped,
        failed = report.errors.len(),
        "Referral settlement finished"
    );

    if report.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        for error in &report.errors {
            tracing::error!(%error, "Referral settlement error");
        }
        Ok(ExitCode::FAILURE)
    }
}
