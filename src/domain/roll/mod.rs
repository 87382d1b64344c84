pub mod error;
pub mod service;

pub use error::RollServiceError;
pub use service::{RollService, RollServiceApi};

use crate::domain::music::{DieFace, GenerationMode, Genre};
use serde::{Deserialize, Serialize};

/// Request for POST /api/roll. Dice may come from physical dice; missing
/// faces are rolled server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollRequest {
    pub mode: GenerationMode,
    #[serde(default = "default_genre")]
    pub genre: Genre,
    #[serde(default)]
    pub color_roll: Option<DieFace>,
    #[serde(default)]
    pub number_roll: Option<DieFace>,
}

fn default_genre() -> Genre {
    Genre::Any
}

/// Response for POST /api/roll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollResponse {
    pub mode: GenerationMode,
    pub genre: Genre,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_roll: Option<DieFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_roll: Option<DieFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progression: Option<Vec<String>>,
    /// Absent for unlimited accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_rolls: Option<i32>,
    pub unlimited: bool,
}
