//! Chord definitions
//!
//! A chord is a root pitch class plus a chord type. The chord type is a fixed
//! list of semitone intervals above the root.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::pitch::{Pitch, PitchClass};
use super::pitch_set::{place_in_octaves, NotesInOctaves};
use crate::error::FretboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Sixth,
    MinorSixth,
    Dominant7,
    Major7,
    Minor7,
    HalfDiminished7,
    Diminished7,
    Add9,
    Dominant9,
    Major9,
    Minor9,
    Power,
}

impl ChordType {
    pub const ALL: [ChordType; 18] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Sixth,
        ChordType::MinorSixth,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::HalfDiminished7,
        ChordType::Diminished7,
        ChordType::Add9,
        ChordType::Dominant9,
        ChordType::Major9,
        ChordType::Minor9,
        ChordType::Power,
    ];

    /// Semitones above the root, root included
    pub fn intervals(&self) -> &'static [i32] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Sixth => &[0, 4, 7, 9],
            ChordType::MinorSixth => &[0, 3, 7, 9],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::HalfDiminished7 => &[0, 3, 6, 10],
            ChordType::Diminished7 => &[0, 3, 6, 9],
            ChordType::Add9 => &[0, 4, 7, 14],
            ChordType::Dominant9 => &[0, 4, 7, 10, 14],
            ChordType::Major9 => &[0, 4, 7, 11, 14],
            ChordType::Minor9 => &[0, 3, 7, 10, 14],
            ChordType::Power => &[0, 7],
        }
    }

    /// Symbol appended to the root name ("" for major)
    pub fn symbol(&self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Sixth => "6",
            ChordType::MinorSixth => "m6",
            ChordType::Dominant7 => "7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
            ChordType::HalfDiminished7 => "m7b5",
            ChordType::Diminished7 => "dim7",
            ChordType::Add9 => "add9",
            ChordType::Dominant9 => "9",
            ChordType::Major9 => "maj9",
            ChordType::Minor9 => "m9",
            ChordType::Power => "5",
        }
    }
}

impl FromStr for ChordType {
    type Err = FretboardError;

    /// Accepts the chord symbol ("m7", "" for major) or a few spelled-out names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = ChordType::ALL.iter().find(|t| t.symbol() == s).copied();
        if let Some(chord_type) = found {
            return Ok(chord_type);
        }
        match s.to_lowercase().as_str() {
            "maj" | "major" => Ok(ChordType::Major),
            "min" | "minor" => Ok(ChordType::Minor),
            "diminished" => Ok(ChordType::Diminished),
            "augmented" | "+" => Ok(ChordType::Augmented),
            "power" => Ok(ChordType::Power),
            _ => Err(FretboardError::UnknownChordType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub root: PitchClass,
    pub chord_type: ChordType,
}

impl Chord {
    pub fn new(root: PitchClass, chord_type: ChordType) -> Self {
        Self { root, chord_type }
    }

    /// Pitch classes of the chord, root first
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.chord_type
            .intervals()
            .iter()
            .map(|&i| self.root.transpose(i))
            .collect()
    }
}

impl NotesInOctaves for Chord {
    fn notes_in_octaves(&self, octaves: &[i32]) -> BTreeSet<Pitch> {
        place_in_octaves(self.root, self.chord_type.intervals(), octaves)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.chord_type.symbol())
    }
}

impl FromStr for Chord {
    type Err = FretboardError;

    /// Parses chord names like "C", "F#m", "Bbmaj7", "Em7b5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = root_len(s).ok_or_else(|| FretboardError::UnknownChordType(s.to_string()))?;
        let root: PitchClass = s[..split].parse()?;
        let chord_type: ChordType = s[split..].parse()?;
        Ok(Chord::new(root, chord_type))
    }
}

/// Byte length of the root name at the start of a chord symbol: the letter
/// plus a single accidental. "Bbmaj7" keeps the `b` as an accidental; "Bdim"
/// does not consume the `d`.
fn root_len(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    let letter = chars.next()?;
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let mut len = letter.len_utf8();
    if let Some(c) = chars.next() {
        if matches!(c, '#' | '♯' | 'b' | '♭') {
            len += c.len_utf8();
        }
    }
    Some(len)
}
