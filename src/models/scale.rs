//! Scale definitions (modes, pentatonics, symmetric scales)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::pitch::{Pitch, PitchClass};
use super::pitch_set::{place_in_octaves, NotesInOctaves};
use crate::error::FretboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    Chromatic,
    WholeTone,
}

impl ScaleType {
    pub const ALL: [ScaleType; 16] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Ionian,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::Chromatic,
        ScaleType::WholeTone,
    ];

    pub fn intervals(&self) -> &'static [i32] {
        match self {
            ScaleType::Major | ScaleType::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor | ScaleType::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
            ScaleType::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            ScaleType::WholeTone => &[0, 2, 4, 6, 8, 10],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Ionian => "Ionian",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Aeolian => "Aeolian",
            ScaleType::Locrian => "Locrian",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::Chromatic => "Chromatic",
            ScaleType::WholeTone => "Whole Tone",
        }
    }
}

impl FromStr for ScaleType {
    type Err = FretboardError;

    /// Case-insensitive; spaces, dashes and underscores are ignored
    /// ("natural minor", "naturalMinor", "minor-pentatonic")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(|c| c.to_lowercase())
            .collect();
        if key == "minor" {
            return Ok(ScaleType::NaturalMinor);
        }
        ScaleType::ALL
            .iter()
            .find(|t| t.name().replace(' ', "").to_lowercase() == key)
            .copied()
            .ok_or_else(|| FretboardError::UnknownScaleType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub root: PitchClass,
    pub scale_type: ScaleType,
}

impl Scale {
    pub fn new(root: PitchClass, scale_type: ScaleType) -> Self {
        Self { root, scale_type }
    }

    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.scale_type
            .intervals()
            .iter()
            .map(|&i| self.root.transpose(i))
            .collect()
    }
}

impl NotesInOctaves for Scale {
    fn notes_in_octaves(&self, octaves: &[i32]) -> BTreeSet<Pitch> {
        place_in_octaves(self.root, self.scale_type.intervals(), octaves)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type.name())
    }
}
