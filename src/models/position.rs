//! Grid cell types: fret positions, fretboard direction and note marker kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pitch::Pitch;
use crate::error::FretboardError;

/// One playable location on the displayed fret window.
///
/// `PartialEq` compares every field including `is_selected`, which is what
/// change detection wants. Lookups that must ignore selection use
/// [`FretPosition::same_location`] or [`FretPosition::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    pub pitch: Pitch,
    pub string_index: usize,
    /// Relative to the window start, not the absolute fret number
    pub fret_index: usize,
    pub is_selected: bool,
}

impl FretPosition {
    pub fn new(pitch: Pitch, string_index: usize, fret_index: usize) -> Self {
        Self {
            pitch,
            string_index,
            fret_index,
            is_selected: false,
        }
    }

    /// `(string_index, fret_index)`
    pub fn key(&self) -> (usize, usize) {
        (self.string_index, self.fret_index)
    }

    /// Equal pitch and coordinates, selection ignored
    pub fn same_location(&self, other: &FretPosition) -> bool {
        self.pitch == other.pitch
            && self.string_index == other.string_index
            && self.fret_index == other.fret_index
    }
}

/// Layout of the fretboard view. Does not change grid contents.
///
/// - `Horizontal`: strings run left to right, frets increase to the right.
/// - `Vertical`: strings run top to bottom, frets increase downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            _ => Err(FretboardError::InvalidDirection(s.to_string())),
        }
    }
}

/// How a position is drawn. Serialized as its number for the JS view.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum FretNoteType {
    /// Not drawn
    None = 0,

    /// Single dot
    Default = 1,

    /// First string of a bar spanning three or more strings
    CapoStart = 2,

    /// Inner string of a bar
    Capo = 3,

    /// Last string of a bar
    CapoEnd = 4,
}

impl FretNoteType {
    pub fn is_drawn(&self) -> bool {
        *self != FretNoteType::None
    }

    pub fn is_capo(&self) -> bool {
        matches!(
            self,
            FretNoteType::CapoStart | FretNoteType::Capo | FretNoteType::CapoEnd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pitch::PitchClass;

    #[test]
    fn test_same_location_ignores_selection() {
        let a = FretPosition::new(Pitch::new(PitchClass::E, 2), 0, 0);
        let mut b = a;
        b.is_selected = true;
        assert!(a.same_location(&b));
        assert_ne!(a, b);
        assert_eq!(a.key(), (0, 0));
    }

    #[test]
    fn test_direction_parse_is_case_insensitive() {
        assert_eq!("vertical".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!("Vertical".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!(" HORIZONTAL ".parse::<Direction>().unwrap(), Direction::Horizontal);
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_default() {
        assert_eq!(Direction::default(), Direction::Horizontal);
    }

    #[test]
    fn test_note_type_serializes_as_number() {
        assert_eq!(serde_json::to_string(&FretNoteType::CapoEnd).unwrap(), "4");
        assert!(FretNoteType::Capo.is_capo());
        assert!(!FretNoteType::None.is_drawn());
    }
}
