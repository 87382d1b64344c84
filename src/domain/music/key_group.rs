use super::dice::DieFace;
use super::note::pitch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tonality {
    Major,
    Minor,
}

/// A key as printed on the colour die, with its root already resolved to the
/// sharp alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub spelling: &'static str,
    pub root: usize,
    pub tonality: Tonality,
}

impl Key {
    const fn major(spelling: &'static str, root: usize) -> Self {
        Self {
            spelling,
            root,
            tonality: Tonality::Major,
        }
    }

    const fn minor(spelling: &'static str, root: usize) -> Self {
        Self {
            spelling,
            root,
            tonality: Tonality::Minor,
        }
    }

    pub fn is_minor(&self) -> bool {
        self.tonality == Tonality::Minor
    }
}

/// A colour face: one or two enharmonically related keys shown together.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyGroup {
    pub name: &'static str,
    pub keys: &'static [Key],
    pub visual_tag: &'static str,
}

impl KeyGroup {
    pub fn for_die(face: DieFace) -> &'static KeyGroup {
        &KEY_GROUPS[face.index()]
    }
}

pub static KEY_GROUPS: [KeyGroup; 8] = [
    KeyGroup {
        name: "Red",
        keys: &[Key::major("A♭", pitch::G_SHARP), Key::major("A", pitch::A)],
        visual_tag: "key-ab-a",
    },
    KeyGroup {
        name: "Orange",
        keys: &[Key::major("B♭", pitch::A_SHARP), Key::major("B", pitch::B)],
        visual_tag: "key-bb-b",
    },
    KeyGroup {
        name: "Yellow",
        keys: &[Key::major("C", pitch::C), Key::major("D♭", pitch::C_SHARP)],
        visual_tag: "key-c-db",
    },
    KeyGroup {
        name: "Green",
        keys: &[Key::major("D", pitch::D), Key::major("E♭", pitch::D_SHARP)],
        visual_tag: "key-d-eb",
    },
    KeyGroup {
        name: "Blue",
        keys: &[Key::major("E", pitch::E), Key::major("F", pitch::F)],
        visual_tag: "key-e-f",
    },
    KeyGroup {
        name: "Purple",
        keys: &[Key::major("F♯", pitch::F_SHARP), Key::major("G", pitch::G)],
        visual_tag: "key-fs-g",
    },
    KeyGroup {
        name: "Dark Red",
        keys: &[Key::minor("A♭m", pitch::G_SHARP), Key::minor("Am", pitch::A)],
        visual_tag: "key-abm-am",
    },
    KeyGroup {
        name: "Dark Orange",
        keys: &[Key::minor("B♭m", pitch::A_SHARP), Key::minor("Bm", pitch::B)],
        visual_tag: "key-bbm-bm",
    },
];
