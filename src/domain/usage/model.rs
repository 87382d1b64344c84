use crate::domain::user::{model::subscription_active, SubscriptionStatus, User};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Roll and ad counters of one account, as stored on its `users` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UsageAccount {
    pub id: Uuid,
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
}

/// What an account may do regardless of its counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entitlement {
    /// Preset unlimited account handed out for demo sessions
    Demo,
    Subscribed,
    Free,
}

impl Entitlement {
    pub fn resolve(
        is_demo: bool,
        status: SubscriptionStatus,
        expires_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        if is_demo {
            Entitlement::Demo
        } else if subscription_active(status, expires_at, now) {
            Entitlement::Subscribed
        } else {
            Entitlement::Free
        }
    }

    /// Unlimited accounts skip roll accounting and may use premium features
    pub fn is_unlimited(&self) -> bool {
        !matches!(self, Entitlement::Free)
    }
}

/// A stored day stamp is stale when missing or earlier than `today`.
pub fn is_new_day(stamp: Option<NaiveDate>, today: NaiveDate) -> bool {
    stamp.map_or(true, |day| day < today)
}

impl UsageAccount {
    pub fn entitlement(&self, now: DateTime<Utc>) -> Entitlement {
        Entitlement::resolve(
            self.is_demo,
            self.subscription_status,
            self.subscription_expires_at,
            now,
        )
    }

    /// Rolls used today, counting a stale reset date as zero
    pub fn effective_rolls_used(&self, today: NaiveDate) -> i32 {
        if is_new_day(self.rolls_reset_date, today) {
            0
        } else {
            self.dice_rolls_used
        }
    }

    pub fn effective_ads_watched(&self, today: NaiveDate) -> i32 {
        if is_new_day(self.ads_watch_date, today) {
            0
        } else {
            self.ads_watched_today
        }
    }

    /// Rolls still available today: the unused base allowance plus tokens.
    pub fn remaining_rolls(&self, today: NaiveDate) -> i32 {
        (self.dice_rolls_limit - self.effective_rolls_used(today)).max(0) + self.extra_roll_tokens
    }

    /// Matches `consume_roll`: a free base slot first, otherwise one extra token.
    pub fn can_roll(&self, today: NaiveDate, now: DateTime<Utc>) -> bool {
        if self.entitlement(now).is_unlimited() {
            return true;
        }
        self.effective_rolls_used(today) < self.dice_rolls_limit || self.extra_roll_tokens > 0
    }

    pub fn status(&self, today: NaiveDate, now: DateTime<Utc>, daily_ad_cap: i32) -> UsageStatus {
        let entitlement = self.entitlement(now);
        UsageStatus {
            dice_rolls_used: self.effective_rolls_used(today),
            dice_rolls_limit: self.dice_rolls_limit,
            extra_roll_tokens: self.extra_roll_tokens,
            total_available_rolls: self.dice_rolls_limit + self.extra_roll_tokens,
            remaining_rolls: self.remaining_rolls(today),
            ads_watched_today: self.effective_ads_watched(today),
            daily_ad_cap,
            can_roll: self.can_roll(today, now),
            unlimited: entitlement.is_unlimited(),
            entitlement,
        }
    }
}

impl From<&User> for UsageAccount {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            is_demo: user.is_demo,
            subscription_status: user.subscription_status,
            subscription_expires_at: user.subscription_expires_at,
            dice_rolls_used: user.dice_rolls_used,
            dice_rolls_limit: user.dice_rolls_limit,
            rolls_reset_date: user.rolls_reset_date,
            extra_roll_tokens: user.extra_roll_tokens,
            ads_watched_today: user.ads_watched_today,
            ads_watch_date: user.ads_watch_date,
            total_ads_watched: user.total_ads_watched,
        }
    }
}

/// Response for GET /api/usage/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageStatus {
    pub dice_rolls_used: i32,
    pub dice_rolls_limit: i32,
    pub extra_roll_tokens: i32,
    pub total_available_rolls: i32,
    pub remaining_rolls: i32,
    pub ads_watched_today: i32,
    pub daily_ad_cap: i32,
    pub can_roll: bool,
    pub unlimited: bool,
    pub entitlement: Entitlement,
}

/// Which allowance paid for a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollSource {
    BaseAllowance,
    ExtraToken,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RollOutcome {
    /// Demo or subscribed account; nothing was recorded
    Unlimited,
    Consumed {
        source: RollSource,
        account: UsageAccount,
    },
    Denied,
}

impl RollOutcome {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, RollOutcome::Denied)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdRewardOutcome {
    Granted(UsageAccount),
    DailyCapReached,
}
