use crate::domain::referral::Referral;
use crate::domain::user::User;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct ReferralRepository {
    pool: Arc<DbPool>,
}

impl ReferralRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Sets the code only if the account has none yet. `Ok(false)` means
    /// another request got there first; a taken code fails with a unique
    /// violation.
    pub async fn assign_referral_code(&self, user_id: Uuid, code: &str) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            UPDATE users
            SET referral_code = $2, updated_at = NOW()
            WHERE id = $1 AND referral_code IS NULL
            "#,
        )
        .bind(user_id)
        .bind(code)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_user_by_referral_code(&self, code: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE referral_code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Marks the referee as referred and records the referral in one
    /// transaction. `None` when the referee already had a referrer.
    pub async fn apply_referral(
        &self,
        referee_id: Uuid,
        referrer_id: Uuid,
        code: &str,
    ) -> AppResult<Option<Referral>> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let updated = sqlx::query(
            r#"
            UPDATE users
            SET referred_by = $2, updated_at = $3
            WHERE id = $1 AND referred_by IS NULL
            "#,
        )
        .bind(referee_id)
        .bind(code)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let referral = sqlx::query_as::<_, Referral>(
            r#"
            INSERT INTO referrals (id, referrer_user_id, referee_user_id, referral_code, signup_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(referrer_id)
        .bind(referee_id)
        .bind(code)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(referral))
    }

    pub async fn find_by_referrer(&self, referrer_id: Uuid) -> AppResult<Vec<Referral>> {
        let pool = self.pool.as_ref();
        let referrals = sqlx::query_as::<_, Referral>(
            r#"
            SELECT * FROM referrals
            WHERE referrer_user_id = $1
            ORDER BY signup_date DESC
            "#,
        )
        .bind(referrer_id)
        .fetch_all(pool)
        .await?;

        Ok(referrals)
    }

    /// Unrewarded referrals whose referee currently holds an active
    /// subscription
    pub async fn find_pending_rewards(&self) -> AppResult<Vec<Referral>> {
        let pool = self.pool.as_ref();
        let referrals = sqlx::query_as::<_, Referral>(
            r#"
            SELECT r.*
            FROM referrals r
            JOIN users u ON u.id = r.referee_user_id
            WHERE r.reward_granted = FALSE
              AND u.subscription_status = 'active'
              AND u.subscription_expires_at > NOW()
            ORDER BY r.signup_date
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(referrals)
    }

    /// Claims the reward and extends the referrer's subscription by one
    /// month from the later of now and the current expiry. Returns `false`
    /// when the reward was already claimed.
    pub async fn grant_reward(&self, referral: &Referral) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let claimed = sqlx::query(
            r#"
            UPDATE referrals
            SET reward_granted = TRUE, reward_granted_at = $2
            WHERE id = $1 AND reward_granted = FALSE
            "#,
        )
        .bind(referral.id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE users
            SET subscription_status = 'active',
                subscription_expires_at =
                    GREATEST($2, COALESCE(subscription_expires_at, $2)) + INTERVAL '1 month',
                referral_rewards_earned = referral_rewards_earned + 1,
                updated_at = $2
            WHERE id = $1
            "#,
        )
        .bind(referral.referrer_user_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(true)
    }
}
