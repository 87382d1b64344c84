pub mod error;
pub mod model;
pub mod service;

pub use error::ProgressionServiceError;
pub use model::{ProgressionKind, SavedProgression};
pub use service::{ProgressionService, ProgressionServiceApi};

use crate::domain::music::{DieFace, Genre};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for progression endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressionResponse {
    pub id: Uuid,
    pub kind: ProgressionKind,
    pub genre: String,
    pub chords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_roll: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_roll: Option<i16>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to save a rolled chord or riff
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProgressionRequest {
    pub kind: ProgressionKind,
    pub genre: Genre,
    pub chords: Vec<String>,
    #[serde(default)]
    pub color_roll: Option<DieFace>,
    #[serde(default)]
    pub number_roll: Option<DieFace>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProgressionRequest {
    pub is_favorite: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProgressionsQuery {
    #[serde(default)]
    pub favorites: bool,
}

impl From<SavedProgression> for ProgressionResponse {
    fn from(progression: SavedProgression) -> Self {
        Self {
            id: progression.id,
            kind: progression.kind,
            genre: progression.genre,
            chords: progression.chords.0,
            color_roll: progression.color_roll,
            number_roll: progression.number_roll,
            is_favorite: progression.is_favorite,
            created_at: progression.created_at,
        }
    }
}
