//! Dice-driven chord and riff generation.
//!
//! Everything here is pure table lookup and note arithmetic; randomness is
//! injected through the [`ChordGenerator`]'s RNG.

pub mod dice;
pub mod generator;
pub mod genre;
pub mod key_group;
pub mod note;
pub mod quality;

pub use dice::{DiceRoll, DieFace};
pub use generator::{chord_for_key, progression_for_key, ChordGenerator, SingleChord};
pub use genre::Genre;
pub use key_group::{Key, KeyGroup, Tonality, KEY_GROUPS};
pub use note::{build_chord, normalize_note, parse_chord_root};
pub use quality::ChordQuality;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Single,
    Riff,
    Random,
    Tapping,
}

impl GenerationMode {
    /// Random and tapping progressions are subscriber features
    pub fn is_premium(&self) -> bool {
        matches!(self, GenerationMode::Random | GenerationMode::Tapping)
    }
}

/// Entry of the genre catalog shown to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct GenreInfo {
    pub id: Genre,
    pub label: String,
    pub description: String,
    pub premium: bool,
}

pub fn genre_catalog() -> Vec<GenreInfo> {
    Genre::ALL
        .iter()
        .map(|genre| GenreInfo {
            id: *genre,
            label: genre.label().to_string(),
            description: genre.description().to_string(),
            premium: genre.is_premium(),
        })
        .collect()
}
