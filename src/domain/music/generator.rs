use super::dice::{DiceRoll, DieFace};
use super::genre::Genre;
use super::key_group::{Key, KeyGroup};
use super::note::{build_chord, transpose, CHROMATIC};
use super::quality::{ChordQuality, RANDOM_SUFFIXES, TAPPING_SUFFIXES};
use rand::seq::SliceRandom;
use rand::Rng;

/// Root intervals of the tapping pattern (I - IV - ii - V, spread out)
pub const TAPPING_INTERVALS: [i32; 4] = [0, 5, 2, 7];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleChord {
    pub chord: String,
    pub color_group: &'static str,
}

/// Chord for an already chosen key. Deterministic: the only randomness in a
/// roll is which key of the colour group gets picked.
pub fn chord_for_key(key: &Key, number: DieFace, genre: Genre) -> String {
    match progression_for_key(key, genre) {
        Some([first, ..]) => first,
        None => build_chord(key.root, 0, ChordQuality::from_number_die(number).suffix()),
    }
}

/// The genre's progression built on the key's root and tonality; `None` for
/// `any`.
pub fn progression_for_key(key: &Key, genre: Genre) -> Option<[String; 4]> {
    genre
        .progression(key.tonality)
        .map(|steps| steps.map(|step| build_chord(key.root, step.offset, step.suffix)))
}

/// Turns dice into chords. Every random draw goes through `rng`, so a seeded
/// generator reproduces its output exactly.
pub struct ChordGenerator<R> {
    rng: R,
}

impl<R: Rng> ChordGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn roll_dice(&mut self) -> DiceRoll {
        DiceRoll::roll(&mut self.rng)
    }

    pub fn roll_single_chord(&mut self, dice: DiceRoll, genre: Genre) -> SingleChord {
        let group = KeyGroup::for_die(dice.color);
        let key = self.pick_key(group);

        SingleChord {
            chord: chord_for_key(&key, dice.number, genre),
            color_group: group.name,
        }
    }

    /// Four chords. For `any`, only the first chord comes from the supplied
    /// dice; the other three are rolled fresh. Other genres play their fixed
    /// progression on a key from the colour group and ignore the number die.
    pub fn roll_riff(&mut self, dice: DiceRoll, genre: Genre) -> [String; 4] {
        let group = KeyGroup::for_die(dice.color);
        let key = self.pick_key(group);

        if let Some(progression) = progression_for_key(&key, genre) {
            return progression;
        }

        let first = chord_for_key(&key, dice.number, genre);
        let rest: [String; 3] = std::array::from_fn(|_| {
            let fresh = self.roll_dice();
            self.roll_single_chord(fresh, genre).chord
        });
        let [second, third, fourth] = rest;

        [first, second, third, fourth]
    }

    /// Four unrelated chords drawn from the full suffix pool.
    pub fn random_chords(&mut self) -> [String; 4] {
        std::array::from_fn(|_| {
            let root = self.rng.gen_range(0..CHROMATIC.len());
            let suffix = RANDOM_SUFFIXES[self.rng.gen_range(0..RANDOM_SUFFIXES.len())];
            build_chord(root, 0, suffix)
        })
    }

    /// Four chords for two-hand tapping: roots follow [`TAPPING_INTERVALS`]
    /// from a random base note, each with an extended voicing.
    pub fn tapping_chords(&mut self) -> [String; 4] {
        let base = self.rng.gen_range(0..CHROMATIC.len());
        TAPPING_INTERVALS.map(|interval| {
            let suffix = TAPPING_SUFFIXES[self.rng.gen_range(0..TAPPING_SUFFIXES.len())];
            build_chord(transpose(base, interval), 0, suffix)
        })
    }

    fn pick_key(&mut self, group: &'static KeyGroup) -> Key {
        // Groups are never empty; the first key is only a fallback.
        *group.keys.choose(&mut self.rng).unwrap_or(&group.keys[0])
    }
}
