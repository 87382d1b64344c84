use crate::domain::usage::UsageAccount;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

/// Columns of `users` that make up a [`UsageAccount`]
const USAGE_COLUMNS: &str = "id, is_demo, subscription_status, subscription_expires_at, \
     dice_rolls_used, dice_rolls_limit, rolls_reset_date, extra_roll_tokens, \
     ads_watched_today, ads_watch_date, total_ads_watched";

/// Roll and ad counters. Every mutation is a single conditional UPDATE; an
/// empty result means the guard did not hold and nothing changed.
pub struct UsageRepository {
    pool: Arc<DbPool>,
}

impl UsageRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn find_account(&self, user_id: Uuid) -> AppResult<Option<UsageAccount>> {
        let pool = self.pool.as_ref();
        let account = sqlx::query_as::<_, UsageAccount>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USAGE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Zeroes the roll counter when the stored reset date is missing or
    /// before `today`. Returns whether a reset happened.
    pub async fn reset_rolls_if_new_day(&self, user_id: Uuid, today: NaiveDate) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            UPDATE users
            SET dice_rolls_used = 0, rolls_reset_date = $2, updated_at = NOW()
            WHERE id = $1 AND (rolls_reset_date IS NULL OR rolls_reset_date < $2)
            "#,
        )
        .bind(user_id)
        .bind(today)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn consume_base_roll(&self, user_id: Uuid) -> AppResult<Option<UsageAccount>> {
        let pool = self.pool.as_ref();
        let account = sqlx::query_as::<_, UsageAccount>(&format!(
            r#"
            UPDATE users
            SET dice_rolls_used = dice_rolls_used + 1, updated_at = NOW()
            WHERE id = $1 AND dice_rolls_used < dice_rolls_limit
            RETURNING {}
            "#,
            USAGE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    pub async fn consume_extra_token(&self, user_id: Uuid) -> AppResult<Option<UsageAccount>> {
        let pool = self.pool.as_ref();
        let account = sqlx::query_as::<_, UsageAccount>(&format!(
            r#"
            UPDATE users
            SET dice_rolls_used = dice_rolls_used + 1,
                extra_roll_tokens = extra_roll_tokens - 1,
                updated_at = NOW()
            WHERE id = $1
              AND dice_rolls_used >= dice_rolls_limit
              AND extra_roll_tokens > 0
            RETURNING {}
            "#,
            USAGE_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Adds one extra roll token unless today's ad count already reached
    /// `daily_cap`. A stale watch date restarts the daily count at one.
    pub async fn grant_ad_token(
        &self,
        user_id: Uuid,
        today: NaiveDate,
        daily_cap: i32,
    ) -> AppResult<Option<UsageAccount>> {
        let pool = self.pool.as_ref();
        let account = sqlx::query_as::<_, UsageAccount>(&format!(
            r#"
            UPDATE users
            SET extra_roll_tokens = extra_roll_tokens + 1,
                ads_watched_today = CASE
                    WHEN ads_watch_date IS NULL OR ads_watch_date < $2 THEN 1
                    ELSE ads_watched_today + 1
                END,
                ads_watch_date = $2,
                total_ads_watched = total_ads_watched + 1,
                updated_at = NOW()
            WHERE id = $1
              AND (ads_watch_date IS NULL OR ads_watch_date < $2 OR ads_watched_today < $3)
            RETURNING {}
            "#,
            USAGE_COLUMNS
        ))
        .bind(user_id)
        .bind(today)
        .bind(daily_cap)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }
}
