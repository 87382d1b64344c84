use crate::domain::progression::{ProgressionKind, SavedProgression};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use chrono::Utc;
use sqlx::types::Json;
use std::sync::Arc;
use uuid::Uuid;

/// Saved chords and riffs. Every lookup is scoped to the owner, so another
/// user's row is indistinguishable from a missing one.
pub struct ProgressionRepository {
    pool: Arc<DbPool>,
}

impl ProgressionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        favorites_only: bool,
    ) -> AppResult<Vec<SavedProgression>> {
        let pool = self.pool.as_ref();
        let progressions = sqlx::query_as::<_, SavedProgression>(
            r#"
            SELECT * FROM chord_progressions
            WHERE user_id = $1 AND ($2 = FALSE OR is_favorite = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(favorites_only)
        .fetch_all(pool)
        .await?;

        Ok(progressions)
    }

    pub async fn find_for_user(
        &self,
        progression_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<SavedProgression>> {
        let pool = self.pool.as_ref();
        let progression = sqlx::query_as::<_, SavedProgression>(
            "SELECT * FROM chord_progressions WHERE id = $1 AND user_id = $2",
        )
        .bind(progression_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(progression)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        kind: ProgressionKind,
        genre: &str,
        chords: &[String],
        color_roll: Option<i16>,
        number_roll: Option<i16>,
    ) -> AppResult<SavedProgression> {
        let pool = self.pool.as_ref();
        let progression = sqlx::query_as::<_, SavedProgression>(
            r#"
            INSERT INTO chord_progressions
                (id, user_id, kind, genre, chords, color_roll, number_roll, is_favorite, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(kind)
        .bind(genre)
        .bind(Json(chords))
        .bind(color_roll)
        .bind(number_roll)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(progression)
    }

    pub async fn update_favorite(
        &self,
        progression_id: Uuid,
        user_id: Uuid,
        is_favorite: bool,
    ) -> AppResult<Option<SavedProgression>> {
        let pool = self.pool.as_ref();
        let progression = sqlx::query_as::<_, SavedProgression>(
            r#"
            UPDATE chord_progressions
            SET is_favorite = $3
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(progression_id)
        .bind(user_id)
        .bind(is_favorite)
        .fetch_optional(pool)
        .await?;

        Ok(progression)
    }

    pub async fn delete(&self, progression_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM chord_progressions WHERE id = $1 AND user_id = $2")
            .bind(progression_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
