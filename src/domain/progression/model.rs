use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct SavedProgression {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ProgressionKind,
    pub genre: String,
    pub chords: Json<Vec<String>>,
    pub color_roll: Option<i16>,
    pub number_roll: Option<i16>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProgressionKind {
    Single,
    Riff,
}
