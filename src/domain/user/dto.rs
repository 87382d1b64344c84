use super::{SubscriptionStatus, User};
use crate::domain::usage::UsageStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for GET /api/me
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub email: String,
    pub is_demo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    pub subscription: SubscriptionStatusResponse,
    pub usage: UsageStatus,
    pub created_at: DateTime<Utc>,
}

/// Response for GET /api/subscription/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionStatusResponse {
    pub has_active_subscription: bool,
    pub status: SubscriptionStatus,
    pub expires_at: Option<DateTime<Utc>>,
}

impl SubscriptionStatusResponse {
    pub fn for_user(user: &User, now: DateTime<Utc>) -> Self {
        Self {
            has_active_subscription: user.has_active_subscription(now),
            status: user.subscription_status,
            expires_at: user.subscription_expires_at,
        }
    }
}
