use crate::infrastructure::db::DbPool;
use crate::{domain::user::User, error::AppResult};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

const INSERT_ACCOUNT: &str = r#"
    INSERT INTO users (
        id, email, is_demo, subscription_status, dice_rolls_used, dice_rolls_limit,
        rolls_reset_date, extra_roll_tokens, ads_watched_today, ads_watch_date,
        created_at, updated_at
    )
    VALUES ($1, $2, $3, 'free', 0, $4, $5, 0, 0, $5, $6, $6)
"#;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Create an account with zeroed counters stamped with today's date
    pub async fn create(&self, email: &str, is_demo: bool, rolls_limit: i32) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(&format!("{} RETURNING *", INSERT_ACCOUNT))
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(is_demo)
            .bind(rolls_limit)
            .bind(now.date_naive())
            .bind(now)
            .fetch_one(pool)
            .await?;

        Ok(user)
    }

    /// Registers a free account for an authenticated id seen for the first
    /// time. Concurrent first requests for the same id all get the same row.
    /// Returns `None` when the email already belongs to another account.
    pub async fn provision(
        &self,
        user_id: Uuid,
        email: &str,
        rolls_limit: i32,
    ) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let now = Utc::now();

        let inserted = sqlx::query_as::<_, User>(&format!(
            "{} ON CONFLICT DO NOTHING RETURNING *",
            INSERT_ACCOUNT
        ))
        .bind(user_id)
        .bind(email)
        .bind(false)
        .bind(rolls_limit)
        .bind(now.date_naive())
        .bind(now)
        .fetch_optional(pool)
        .await?;

        match inserted {
            Some(user) => Ok(Some(user)),
            None => self.find_by_id(user_id).await,
        }
    }
}
