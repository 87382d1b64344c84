use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DIE_SIDES: u8 = 8;

/// Face of an eight-sided die. Values outside `1..=8` cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    pub fn new(value: u8) -> Option<Self> {
        (1..=DIE_SIDES).contains(&value).then_some(Self(value))
    }

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=DIE_SIDES))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Zero-based position for table lookups
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for DieFace {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieFace::new(value).ok_or_else(|| format!("die face must be between 1 and {}", DIE_SIDES))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

/// One throw of the colour die and the number die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub color: DieFace,
    pub number: DieFace,
}

impl DiceRoll {
    pub fn new(color: DieFace, number: DieFace) -> Self {
        Self { color, number }
    }

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            color: DieFace::roll(rng),
            number: DieFace::roll(rng),
        }
    }
}
