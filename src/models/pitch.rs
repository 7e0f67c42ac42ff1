//! Pitch representation for fretboard positions
//!
//! A pitch is one of the twelve pitch classes plus an octave, with octave
//! numbering where C4 is MIDI note 60. Enharmonic spellings (C#/Db) normalize
//! to the same class, so equality is by sounding pitch.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;

/// The twelve pitch classes, spelled with flats like the tuning tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Db,
        PitchClass::D,
        PitchClass::Eb,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Gb,
        PitchClass::G,
        PitchClass::Ab,
        PitchClass::A,
        PitchClass::Bb,
        PitchClass::B,
    ];

    /// Semitones above C (0-11)
    pub fn semitone(&self) -> i32 {
        *self as i32
    }

    /// Pitch class for any semitone count, wrapping in both directions
    pub fn from_semitone(semitone: i32) -> PitchClass {
        PitchClass::ALL[semitone.rem_euclid(12) as usize]
    }

    /// Shift by a number of semitones, ignoring octaves
    pub fn transpose(&self, semitones: i32) -> PitchClass {
        PitchClass::from_semitone(self.semitone() + semitones)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Db => "D♭",
            PitchClass::D => "D",
            PitchClass::Eb => "E♭",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Gb => "G♭",
            PitchClass::G => "G",
            PitchClass::Ab => "A♭",
            PitchClass::A => "A",
            PitchClass::Bb => "B♭",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = FretboardError;

    /// Parses a letter followed by any number of `#`/`♯`/`b`/`♭` accidentals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (semitone, rest) = parse_letter_and_accidentals(s)
            .ok_or_else(|| FretboardError::InvalidPitch(s.to_string()))?;
        if !rest.is_empty() {
            return Err(FretboardError::InvalidPitch(s.to_string()));
        }
        Ok(PitchClass::from_semitone(semitone))
    }
}

/// Octaves accepted when parsing text. Keeps MIDI numbers far from `i32`
/// limits once fret offsets are added.
pub const OCTAVE_RANGE: std::ops::RangeInclusive<i32> = -2..=10;

/// A sounding pitch: pitch class plus octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: i32,
}

impl Pitch {
    pub fn new(class: PitchClass, octave: i32) -> Self {
        Self { class, octave }
    }

    /// MIDI note number (C4 = 60). Values outside 0-127 are allowed.
    pub fn midi_number(&self) -> i32 {
        (self.octave + 1) * 12 + self.class.semitone()
    }

    pub fn from_midi_number(midi: i32) -> Pitch {
        Pitch {
            class: PitchClass::from_semitone(midi),
            octave: midi.div_euclid(12) - 1,
        }
    }

    /// Pitch `semitones` half steps away; one fret is one semitone
    pub fn transpose(&self, semitones: i32) -> Pitch {
        Pitch::from_midi_number(self.midi_number() + semitones)
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.midi_number().cmp(&other.midi_number())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = FretboardError;

    /// Parses `<letter><accidentals><octave>`, e.g. "E2", "C#4", "Bb3", "E♭-1".
    /// Accidentals that cross B/C move the octave ("B#3" is C4).
    /// Octaves outside `OCTAVE_RANGE` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FretboardError::InvalidPitch(s.to_string());
        let (semitone, rest) = parse_letter_and_accidentals(s.trim()).ok_or_else(invalid)?;
        let octave: i32 = rest.parse().map_err(|_| invalid())?;
        if !OCTAVE_RANGE.contains(&octave) {
            return Err(invalid());
        }
        Ok(Pitch::from_midi_number((octave + 1) * 12 + semitone))
    }
}

impl TryFrom<String> for Pitch {
    type Error = FretboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> String {
        pitch.to_string()
    }
}

/// Returns the unwrapped semitone offset (may be negative or >11) and the
/// unparsed remainder of the input.
fn parse_letter_and_accidentals(s: &str) -> Option<(i32, &str)> {
    let mut chars = s.char_indices();
    let (_, letter) = chars.next()?;
    let mut semitone = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut rest = &s[letter.len_utf8()..];
    for (idx, c) in chars {
        match c {
            '#' | '♯' => semitone += 1,
            'b' | '♭' => semitone -= 1,
            _ => return Some((semitone, &s[idx..])),
        }
        rest = &s[idx + c.len_utf8()..];
    }
    Some((semitone, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naturals_and_accidentals() {
        assert_eq!("E2".parse::<Pitch>().unwrap(), Pitch::new(PitchClass::E, 2));
        assert_eq!("C#4".parse::<Pitch>().unwrap(), Pitch::new(PitchClass::Db, 4));
        assert_eq!("Db4".parse::<Pitch>().unwrap(), Pitch::new(PitchClass::Db, 4));
        assert_eq!("B♭3".parse::<Pitch>().unwrap(), Pitch::new(PitchClass::Bb, 3));
        assert_eq!("a0".parse::<Pitch>().unwrap(), Pitch::new(PitchClass::A, 0));
    }

    #[test]
    fn test_accidentals_cross_octave_boundary() {
        assert_eq!("B#3".parse::<Pitch>().unwrap(), Pitch::new(PitchClass::C, 4));
        assert_eq!("Cb4".parse::<Pitch>().unwrap(), Pitch::new(PitchClass::B, 3));
    }

    #[test]
    fn test_out_of_range_octave_rejected() {
        assert!("C11".parse::<Pitch>().is_err());
        assert!("C-3".parse::<Pitch>().is_err());
        assert!("E2147483647".parse::<Pitch>().is_err());
        assert!("C10".parse::<Pitch>().is_ok());
    }

    #[test]
    fn test_negative_octave() {
        let pitch: Pitch = "C-1".parse().unwrap();
        assert_eq!(pitch.midi_number(), 0);
        assert_eq!(pitch.to_string(), "C-1");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Pitch>().is_err());
        assert!("H2".parse::<Pitch>().is_err());
        assert!("E".parse::<Pitch>().is_err());
        assert!("E2x".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_midi_number() {
        assert_eq!(Pitch::new(PitchClass::C, 4).midi_number(), 60);
        assert_eq!(Pitch::new(PitchClass::A, 4).midi_number(), 69);
        assert_eq!(Pitch::new(PitchClass::E, 2).midi_number(), 40);
        assert_eq!(Pitch::from_midi_number(40), Pitch::new(PitchClass::E, 2));
    }

    #[test]
    fn test_transpose_crosses_octaves() {
        let e2 = Pitch::new(PitchClass::E, 2);
        assert_eq!(e2.transpose(5), Pitch::new(PitchClass::A, 2));
        assert_eq!(e2.transpose(8), Pitch::new(PitchClass::C, 3));
        assert_eq!(e2.transpose(-5), Pitch::new(PitchClass::B, 1));
        assert_eq!(e2.transpose(12), Pitch::new(PitchClass::E, 3));
    }

    #[test]
    fn test_ordering_follows_midi() {
        let b2 = Pitch::new(PitchClass::B, 2);
        let c3 = Pitch::new(PitchClass::C, 3);
        assert!(b2 < c3);
    }

    #[test]
    fn test_pitch_class_parse() {
        assert_eq!("F#".parse::<PitchClass>().unwrap(), PitchClass::Gb);
        assert_eq!("Cb".parse::<PitchClass>().unwrap(), PitchClass::B);
        assert!("F#3".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let pitch = Pitch::new(PitchClass::Ab, 3);
        let json = serde_json::to_string(&pitch).unwrap();
        assert_eq!(json, "\"A♭3\"");
        let back: Pitch = serde_json::from_str("\"G#3\"").unwrap();
        assert_eq!(back, pitch);
    }
}
