use super::key_group::Tonality;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Any,
    Jazz,
    Blues,
    Rock,
    Pop,
    Folk,
    Metal,
    ExtremeMetal,
}

/// One chord of a progression, relative to the tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordStep {
    pub offset: i32,
    pub suffix: &'static str,
}

const fn step(offset: i32, suffix: &'static str) -> ChordStep {
    ChordStep { offset, suffix }
}

pub type Progression = [ChordStep; 4];

const JAZZ_MAJOR: Progression = [step(2, "m7"), step(7, "7"), step(0, "M7"), step(9, "m7")];
const JAZZ_MINOR: Progression = [step(2, "m7b5"), step(7, "7"), step(0, "m"), step(8, "7")];
const BLUES: Progression = [step(0, "7"), step(5, "7"), step(0, "7"), step(7, "7")];
const ROCK_MAJOR: Progression = [step(0, ""), step(7, ""), step(9, "m"), step(5, "")];
const ROCK_MINOR: Progression = [step(0, "m"), step(10, ""), step(8, ""), step(10, "")];
const POP_MAJOR: Progression = [step(9, "m"), step(5, ""), step(0, ""), step(7, "")];
const POP_MINOR: Progression = [step(0, "m"), step(8, ""), step(3, ""), step(10, "")];
const FOLK_MAJOR: Progression = [step(0, ""), step(9, "m"), step(5, ""), step(7, "")];
const FOLK_MINOR: Progression = [step(0, "m"), step(10, ""), step(8, ""), step(10, "")];
const METAL_MAJOR: Progression = [step(0, "5"), step(10, "5"), step(8, "5"), step(10, "5")];
const METAL_MINOR: Progression = [step(0, "5"), step(8, "5"), step(10, "5"), step(0, "5")];
const EXTREME_MAJOR: Progression = [step(0, "5"), step(1, "5"), step(6, "°"), step(0, "m")];
const EXTREME_MINOR: Progression = [step(0, "m"), step(1, "5"), step(3, "°"), step(5, "m")];

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Any,
        Genre::Jazz,
        Genre::Blues,
        Genre::Rock,
        Genre::Pop,
        Genre::Folk,
        Genre::Metal,
        Genre::ExtremeMetal,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Genre::Any => "any",
            Genre::Jazz => "jazz",
            Genre::Blues => "blues",
            Genre::Rock => "rock",
            Genre::Pop => "pop",
            Genre::Folk => "folk",
            Genre::Metal => "metal",
            Genre::ExtremeMetal => "extreme-metal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Any => "Any Style",
            Genre::Jazz => "Jazz",
            Genre::Blues => "Blues",
            Genre::Rock => "Rock",
            Genre::Pop => "Pop",
            Genre::Folk => "Folk",
            Genre::Metal => "Metal",
            Genre::ExtremeMetal => "Extreme Metal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Genre::Any => "Random chord combinations",
            Genre::Jazz => "Complex 7ths, 9ths, ii-V-I progressions",
            Genre::Blues => "Dominant 7ths, I-IV-V progressions",
            Genre::Rock => "Power chords, simple triads",
            Genre::Pop => "Catchy progressions like vi-IV-I-V",
            Genre::Folk => "Simple triads, traditional patterns",
            Genre::Metal => "Power chords, chromatic riffs, aggressive progressions",
            Genre::ExtremeMetal => "Diminished, tritones, dissonant intervals",
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, Genre::Metal | Genre::ExtremeMetal)
    }

    /// Fixed progression for the genre, or `None` for `any`, which is driven
    /// by the number die instead.
    pub fn progression(&self, tonality: Tonality) -> Option<&'static Progression> {
        let minor = tonality == Tonality::Minor;
        let progression = match self {
            Genre::Any => return None,
            Genre::Jazz if minor => &JAZZ_MINOR,
            Genre::Jazz => &JAZZ_MAJOR,
            Genre::Blues => &BLUES,
            Genre::Rock if minor => &ROCK_MINOR,
            Genre::Rock => &ROCK_MAJOR,
            Genre::Pop if minor => &POP_MINOR,
            Genre::Pop => &POP_MAJOR,
            Genre::Folk if minor => &FOLK_MINOR,
            Genre::Folk => &FOLK_MAJOR,
            Genre::Metal if minor => &METAL_MINOR,
            Genre::Metal => &METAL_MAJOR,
            Genre::ExtremeMetal if minor => &EXTREME_MINOR,
            Genre::ExtremeMetal => &EXTREME_MAJOR,
        };
        Some(progression)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .find(|g| g.id() == s)
            .copied()
            .ok_or_else(|| format!("unknown genre: {}", s))
    }
}
