use super::dice::DieFace;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Sixth,
    Seventh,
    Ninth,
    MinorSixth,
    MinorSeventh,
    MajorSeventh,
    Diminished,
    Augmented,
    Suspended,
}

impl ChordQuality {
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Sixth => "6",
            ChordQuality::Seventh => "7",
            ChordQuality::Ninth => "9",
            ChordQuality::MinorSixth => "m6",
            ChordQuality::MinorSeventh => "m7",
            ChordQuality::MajorSeventh => "M7",
            ChordQuality::Diminished => "°",
            ChordQuality::Augmented => "+",
            ChordQuality::Suspended => "sus",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Sixth => "6th",
            ChordQuality::Seventh => "7th",
            ChordQuality::Ninth => "9th",
            ChordQuality::MinorSixth => "Minor 6th",
            ChordQuality::MinorSeventh => "Minor 7th",
            ChordQuality::MajorSeventh => "Major 7th",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::Augmented => "Augmented",
            ChordQuality::Suspended => "Suspended",
        }
    }

    /// Look a quality up by its display name.
    ///
    /// Unknown names resolve to `Major`, so they format with an empty suffix.
    pub fn from_name(name: &str) -> ChordQuality {
        match name {
            "Minor" => ChordQuality::Minor,
            "6th" => ChordQuality::Sixth,
            "7th" => ChordQuality::Seventh,
            "9th" => ChordQuality::Ninth,
            "Minor 6th" => ChordQuality::MinorSixth,
            "Minor 7th" => ChordQuality::MinorSeventh,
            "Major 7th" => ChordQuality::MajorSeventh,
            "Diminished" => ChordQuality::Diminished,
            "Augmented" => ChordQuality::Augmented,
            "Suspended" => ChordQuality::Suspended,
            // "Major" and anything unrecognized
            _ => ChordQuality::Major,
        }
    }

    /// The "exotic number" table: faces 1-5 pick a coloured quality, the rest
    /// play a plain major chord.
    pub fn from_number_die(face: DieFace) -> ChordQuality {
        match face.get() {
            1 => ChordQuality::Diminished,
            2 => ChordQuality::Augmented,
            3 => ChordQuality::Suspended,
            4 => ChordQuality::MajorSeventh,
            5 => ChordQuality::Ninth,
            _ => ChordQuality::Major,
        }
    }
}

/// Suffix pool for fully random progressions.
pub const RANDOM_SUFFIXES: [&str; 36] = [
    "", "m", "7", "M7", "m7", "6", "m6", "9", "m9", "add9", "sus2", "sus4", "°", "+", "dim7",
    "m7b5", "11", "13", "maj9", "maj11", "maj13", "7sus4", "7sus2", "add11", "add13", "6/9",
    "m6/9", "alt", "7#5", "7b5", "m(maj7)", "mMaj9", "7#9", "7b9", "7#11", "maj7#11",
];

/// Extended and wide-interval voicings that sit well under two-hand tapping.
pub const TAPPING_SUFFIXES: [&str; 23] = [
    "add9", "add11", "maj9", "maj11", "maj13", "m9", "m11", "m(maj7)", "mMaj9", "9", "11", "13",
    "7#11", "7b9", "7#9", "sus2", "sus4", "7sus4", "7sus2", "maj7#11", "6/9", "m6/9", "add13",
];
