use super::error::RollServiceError;
use super::{RollRequest, RollResponse};
use crate::domain::music::{ChordGenerator, DiceRoll, GenerationMode, KeyGroup};
use crate::domain::usage::{RollOutcome, UsageService, UsageServiceApi};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

pub struct RollService {
    usage_service: Arc<UsageService>,
}

impl RollService {
    pub fn new(usage_service: Arc<UsageService>) -> Self {
        Self { usage_service }
    }
}

#[async_trait]
pub trait RollServiceApi: Send + Sync {
    /// Charges one roll to the account, then generates the result.
    async fn roll(&self, user_id: Uuid, request: RollRequest) -> Result<RollResponse, RollServiceError>;
}

#[async_trait]
impl RollServiceApi for RollService {
    async fn roll(&self, user_id: Uuid, request: RollRequest) -> Result<RollResponse, RollServiceError> {
        let entitlement = self.usage_service.entitlement(user_id).await?;

        if !entitlement.is_unlimited() {
            if request.mode.is_premium() {
                return Err(RollServiceError::PremiumRequired(format!(
                    "{:?} mode requires a premium subscription",
                    request.mode
                )));
            }
            if request.genre.is_premium() {
                return Err(RollServiceError::PremiumRequired(format!(
                    "{} genre requires a premium subscription",
                    request.genre.label()
                )));
            }
            if !self.usage_service.can_roll(user_id).await? {
                return Err(RollServiceError::LimitReached);
            }
        }

        let remaining_rolls = match self.usage_service.consume_roll(user_id).await? {
            RollOutcome::Unlimited => None,
            RollOutcome::Consumed { account, .. } => {
                Some(account.remaining_rolls(Utc::now().date_naive()))
            }
            RollOutcome::Denied => return Err(RollServiceError::LimitReached),
        };

        let mut response = generate(&mut ChordGenerator::new(rand::thread_rng()), &request);
        response.remaining_rolls = remaining_rolls;
        response.unlimited = remaining_rolls.is_none();

        Ok(response)
    }
}

/// Produces the chords for a request. Accounting fields are left for the
/// caller to fill in.
pub fn generate<R: Rng>(generator: &mut ChordGenerator<R>, request: &RollRequest) -> RollResponse {
    let mut response = RollResponse {
        mode: request.mode,
        genre: request.genre,
        color_roll: None,
        number_roll: None,
        color_group: None,
        chord: None,
        progression: None,
        remaining_rolls: None,
        unlimited: false,
    };

    match request.mode {
        GenerationMode::Single | GenerationMode::Riff => {
            let rolled = generator.roll_dice();
            let dice = DiceRoll::new(
                request.color_roll.unwrap_or(rolled.color),
                request.number_roll.unwrap_or(rolled.number),
            );
            response.color_roll = Some(dice.color);
            response.number_roll = Some(dice.number);

            if request.mode == GenerationMode::Single {
                let single = generator.roll_single_chord(dice, request.genre);
                response.color_group = Some(single.color_group.to_string());
                response.chord = Some(single.chord);
            } else {
                response.color_group = Some(KeyGroup::for_die(dice.color).name.to_string());
                response.progression = Some(generator.roll_riff(dice, request.genre).to_vec());
            }
        }
        GenerationMode::Random => {
            response.progression = Some(generator.random_chords().to_vec());
        }
        GenerationMode::Tapping => {
            response.progression = Some(generator.tapping_chords().to_vec());
        }
    }

    response
}
