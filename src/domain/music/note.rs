/// The chromatic alphabet every chord is spelled in. Flats are normalized to
/// these sharp spellings before any arithmetic.
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Indexes into [`CHROMATIC`]
pub mod pitch {
    pub const C: usize = 0;
    pub const C_SHARP: usize = 1;
    pub const D: usize = 2;
    pub const D_SHARP: usize = 3;
    pub const E: usize = 4;
    pub const F: usize = 5;
    pub const F_SHARP: usize = 6;
    pub const G: usize = 7;
    pub const G_SHARP: usize = 8;
    pub const A: usize = 9;
    pub const A_SHARP: usize = 10;
    pub const B: usize = 11;
}

/// Map flat spellings (unicode or ASCII) to their sharp equivalent.
/// Anything else is returned unchanged.
pub fn normalize_note(note: &str) -> &str {
    match note {
        "A♭" | "Ab" => "G#",
        "B♭" | "Bb" => "A#",
        "D♭" | "Db" => "C#",
        "E♭" | "Eb" => "D#",
        "G♭" | "Gb" => "F#",
        other => other,
    }
}

/// Position of a note in the chromatic alphabet, accepting flat spellings and
/// the `♯` glyph.
pub fn note_index(note: &str) -> Option<usize> {
    let folded = note.replace('♯', "#");
    let normalized = normalize_note(&folded);
    CHROMATIC.iter().position(|n| *n == normalized)
}

/// Move `root_index` by `semitones`, wrapping into `[0, 12)` for any sign.
pub fn transpose(root_index: usize, semitones: i32) -> usize {
    (root_index as i64 + semitones as i64).rem_euclid(12) as usize
}

pub fn build_chord(root_index: usize, semitone_offset: i32, suffix: &str) -> String {
    format!("{}{}", CHROMATIC[transpose(root_index, semitone_offset)], suffix)
}

/// Extract the root note of a chord string such as `"Bbm7"` or `"F♯sus"`,
/// returned as an index into [`CHROMATIC`].
pub fn parse_chord_root(chord: &str) -> Option<usize> {
    let mut chars = chord.chars();
    let letter = chars.next().filter(|c| ('A'..='G').contains(c))?;

    let accidental = chars.next().filter(|c| matches!(c, '#' | '♯' | 'b' | '♭'));
    if let Some(accidental) = accidental {
        let spelled: String = [letter, accidental].iter().collect();
        if let Some(index) = note_index(&spelled) {
            return Some(index);
        }
    }

    note_index(&letter.to_string())
}
