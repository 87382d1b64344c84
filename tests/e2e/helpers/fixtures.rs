use anyhow::Result;
use chorddice_backend::domain::referral::Referral;
use chorddice_backend::domain::user::User;
use chrono::{Duration, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct TestFixtures {
    pool: PgPool,
}

#[allow(dead_code)]
impl TestFixtures {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Free account with a fresh daily allowance of 5 rolls
    pub async fn create_user(&self, email: &str) -> Result<User> {
        self.insert_user(email, false, "free", None).await
    }

    pub async fn create_subscribed_user(&self, email: &str) -> Result<User> {
        self.insert_user(email, false, "active", Some(Utc::now() + Duration::days(30)))
            .await
    }

    pub async fn create_demo_user(&self, email: &str) -> Result<User> {
        self.insert_user(email, true, "free", None).await
    }

    async fn insert_user(
        &self,
        email: &str,
        is_demo: bool,
        status: &str,
        expires_at: Option<chrono::DateTime<Utc>>,
    ) -> Result<User> {
        let today = Utc::now().date_naive();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                id, email, is_demo, subscription_status, subscription_expires_at,
                dice_rolls_used, dice_rolls_limit, rolls_reset_date,
                extra_roll_tokens, ads_watched_today, ads_watch_date
            )
            VALUES ($1, $2, $3, $4, $5, 0, 5, $6, 0, 0, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(is_demo)
        .bind(status)
        .bind(expires_at)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn set_rolls(
        &self,
        user_id: Uuid,
        used: i32,
        tokens: i32,
        reset_date: Option<NaiveDate>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET dice_rolls_used = $2, extra_roll_tokens = $3, rolls_reset_date = $4
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(used)
        .bind(tokens)
        .bind(reset_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_ads(&self, user_id: Uuid, watched: i32, watch_date: Option<NaiveDate>) -> Result<()> {
        sqlx::query("UPDATE users SET ads_watched_today = $2, ads_watch_date = $3 WHERE id = $1")
            .bind(user_id)
            .bind(watched)
            .bind(watch_date)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_referral_code(&self, user_id: Uuid, code: &str) -> Result<()> {
        sqlx::query("UPDATE users SET referral_code = $2 WHERE id = $1")
            .bind(user_id)
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn activate_subscription(&self, user_id: Uuid, days: i64) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET subscription_status = 'active', subscription_expires_at = $2
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(Utc::now() + Duration::days(days))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn get_referrals_by_referrer(&self, referrer_id: Uuid) -> Result<Vec<Referral>> {
        let referrals = sqlx::query_as::<_, Referral>(
            "SELECT * FROM referrals WHERE referrer_user_id = $1",
        )
        .bind(referrer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(referrals)
    }

    pub async fn get_progression_count(&self, user_id: Uuid) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM chord_progressions WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count.0)
    }
}
