use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const REFERRAL_CODE_LENGTH: usize = 8;
pub const REFERRAL_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Unique-constraint conflicts tolerated before giving up on a new code
pub const MAX_CODE_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Referral {
    pub id: Uuid,
    pub referrer_user_id: Uuid,
    pub referee_user_id: Uuid,
    pub referral_code: String,
    pub signup_date: DateTime<Utc>,
    pub reward_granted: bool,
    pub reward_granted_at: Option<DateTime<Utc>>,
}

/// Result of applying someone else's code to an account
#[derive(Debug, Clone)]
pub enum ReferralApplication {
    Applied(Referral),
    InvalidCode,
    SelfReferral,
    AlreadyReferred,
}

impl ReferralApplication {
    pub fn message(&self) -> &'static str {
        match self {
            ReferralApplication::Applied(_) => "Referral code applied successfully!",
            ReferralApplication::InvalidCode => "Invalid referral code",
            ReferralApplication::SelfReferral => "You cannot refer yourself",
            ReferralApplication::AlreadyReferred => "You have already used a referral code",
        }
    }
}

/// Outcome of one settlement run
#[derive(Debug, Default, Clone, Serialize)]
pub struct SettlementReport {
    pub processed: usize,
    /// Rewards another run claimed first
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Response for GET /api/referrals/dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralDashboard {
    pub referral_code: Option<String>,
    pub referrals: Vec<Referral>,
    pub total_referred: usize,
    pub rewards_pending: usize,
    pub rewards_earned: i32,
}

/// Response for POST /api/referrals/generate-code
#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralCodeResponse {
    pub referral_code: String,
    pub message: String,
}

/// Request for POST /api/referrals/apply
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyReferralRequest {
    pub referral_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyReferralResponse {
    pub success: bool,
    pub message: String,
}

pub fn generate_referral_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..REFERRAL_CODE_LENGTH)
        .map(|_| REFERRAL_CODE_ALPHABET[rng.gen_range(0..REFERRAL_CODE_ALPHABET.len())] as char)
        .collect()
}
