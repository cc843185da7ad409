use serde::{Deserialize, Serialize};

/// Key color on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyColor {
    White,
    Black,
}

impl KeyColor {
    pub fn class(&self) -> &'static str {
        match self {
            KeyColor::White => "white",
            KeyColor::Black => "black",
        }
    }
}

/// Pitch class of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl NoteName {
    /// The note catalog, chromatic from C.
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        }
    }

    pub fn color(&self) -> KeyColor {
        match self {
            NoteName::Cs | NoteName::Ds | NoteName::Fs | NoteName::Gs | NoteName::As => {
                KeyColor::Black
            }
            _ => KeyColor::White,
        }
    }

    /// Position in the chromatic catalog (C = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
