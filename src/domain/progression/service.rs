use super::error::ProgressionServiceError;
use super::{CreateProgressionRequest, ProgressionKind, ProgressionResponse};
use crate::domain::music::parse_chord_root;
use crate::infrastructure::repositories::ProgressionRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const MAX_CHORDS: usize = 4;
const MAX_CHORD_LENGTH: usize = 16;

pub struct ProgressionService {
    progression_repo: Arc<ProgressionRepository>,
}

impl ProgressionService {
    pub fn new(progression_repo: Arc<ProgressionRepository>) -> Self {
        Self { progression_repo }
    }
}

#[async_trait]
pub trait ProgressionServiceApi: Send + Sync {
    async fn list(
        &self,
        user_id: Uuid,
        favorites_only: bool,
    ) -> Result<Vec<ProgressionResponse>, ProgressionServiceError>;

    async fn create(
        &self,
        user_id: Uuid,
        request: CreateProgressionRequest,
    ) -> Result<ProgressionResponse, ProgressionServiceError>;

    async fn get(
        &self,
        user_id: Uuid,
        progression_id: Uuid,
    ) -> Result<ProgressionResponse, ProgressionServiceError>;

    async fn set_favorite(
        &self,
        user_id: Uuid,
        progression_id: Uuid,
        is_favorite: bool,
    ) -> Result<ProgressionResponse, ProgressionServiceError>;

    async fn delete(&self, user_id: Uuid, progression_id: Uuid) -> Result<(), ProgressionServiceError>;
}

#[async_trait]
impl ProgressionServiceApi for ProgressionService {
    async fn list(
        &self,
        user_id: Uuid,
        favorites_only: bool,
    ) -> Result<Vec<ProgressionResponse>, ProgressionServiceError> {
        let progressions = self
            .progression_repo
            .find_by_user(user_id, favorites_only)
            .await
            .map_err(|e| ProgressionServiceError::Dependency(e.to_string()))?;
        Ok(progressions.into_iter().map(ProgressionResponse::from).collect())
    }

    async fn create(
        &self,
        user_id: Uuid,
        request: CreateProgressionRequest,
    ) -> Result<ProgressionResponse, ProgressionServiceError> {
        validate_chords(request.kind, &request.chords)?;

        let progression = self
            .progression_repo
            .create(
                user_id,
                request.kind,
                request.genre.id(),
                &request.chords,
                request.color_roll.map(|face| face.get() as i16),
                request.number_roll.map(|face| face.get() as i16),
            )
            .await
            .map_err(|e| ProgressionServiceError::Dependency(e.to_string()))?;

        Ok(progression.into())
    }

    async fn get(
        &self,
        user_id: Uuid,
        progression_id: Uuid,
    ) -> Result<ProgressionResponse, ProgressionServiceError> {
        self.progression_repo
            .find_for_user(progression_id, user_id)
            .await
            .map_err(|e| ProgressionServiceError::Dependency(e.to_string()))?
            .map(ProgressionResponse::from)
            .ok_or(ProgressionServiceError::NotFound)
    }

    async fn set_favorite(
        &self,
        user_id: Uuid,
        progression_id: Uuid,
        is_favorite: bool,
    ) -> Result<ProgressionResponse, ProgressionServiceError> {
        self.progression_repo
            .update_favorite(progression_id, user_id, is_favorite)
            .await
            .map_err(|e| ProgressionServiceError::Dependency(e.to_string()))?
            .map(ProgressionResponse::from)
            .ok_or(ProgressionServiceError::NotFound)
    }

    async fn delete(&self, user_id: Uuid, progression_id: Uuid) -> Result<(), ProgressionServiceError> {
        let deleted = self
            .progression_repo
            .delete(progression_id, user_id)
            .await
            .map_err(|e| ProgressionServiceError::Dependency(e.to_string()))?;

        if !deleted {
            return Err(ProgressionServiceError::NotFound);
        }
        Ok(())
    }
}

fn validate_chords(kind: ProgressionKind, chords: &[String]) -> Result<(), ProgressionServiceError> {
    if chords.is_empty() || chords.len() > MAX_CHORDS {
        return Err(ProgressionServiceError::Invalid(format!(
            "A progression holds between 1 and {} chords",
            MAX_CHORDS
        )));
    }
    if kind == ProgressionKind::Single && chords.len() != 1 {
        return Err(ProgressionServiceError::Invalid(
            "A single chord entry holds exactly one chord".to_string(),
        ));
    }

    for chord in chords {
        if chord.is_empty() || chord.chars().count() > MAX_CHORD_LENGTH {
            return Err(ProgressionServiceError::Invalid(format!(
                "Chord names must be 1 to {} characters",
                MAX_CHORD_LENGTH
            )));
        }
        if parse_chord_root(chord).is_none() {
            return Err(ProgressionServiceError::Invalid(format!(
                "Unrecognized chord: {}",
                chord
            )));
        }
    }

    Ok(())
}
