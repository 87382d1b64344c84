pub mod error;
pub mod model;
pub mod service;

pub use error::UsageServiceError;
pub use model::{
    AdRewardOutcome, Entitlement, RollOutcome, RollSource, UsageAccount, UsageStatus,
};
pub use service::{UsageService, UsageServiceApi};

use serde::{Deserialize, Serialize};

/// Response for POST /api/usage/watch-ad
#[derive(Debug, Serialize, Deserialize)]
pub struct WatchAdResponse {
    pub success: bool,
    pub extra_roll_tokens: i32,
    pub ads_watched_today: i32,
    pub ads_remaining_today: i32,
    pub remaining_rolls: i32,
}
