use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub is_demo: bool,
    pub subscription_status: SubscriptionStatus,
    pub subscription_expires_at: Option<DateTime<Utc>>,
    pub dice_rolls_used: i32,
    pub dice_rolls_limit: i32,
    pub rolls_reset_date: Option<NaiveDate>,
    pub extra_roll_tokens: i32,
    pub ads_watched_today: i32,
    pub ads_watch_date: Option<NaiveDate>,
    pub total_ads_watched: i32,
    pub referral_code: Option<String>,
    pub referred_by: Option<String>,
    pub referral_rewards_earned: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Free => write!(f, "free"),
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Expired => write!(f, "expired"),
            SubscriptionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A subscription counts only while its status is active and it has not
/// expired yet.
pub fn subscription_active(
    status: SubscriptionStatus,
    expires_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    status == SubscriptionStatus::Active && expires_at.map_or(false, |expiry| expiry > now)
}

impl User {
    pub fn has_active_subscription(&self, now: DateTime<Utc>) -> bool {
        subscription_active(self.subscription_status, self.subscription_expires_at, now)
    }
}
