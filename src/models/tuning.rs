//! Tunings: the open pitch of every string
//!
//! A `Tuning` is an owned, immutable list of open-string pitches with a
//! display name. Built-in tunings live in a static table of `TuningPreset`
//! records addressed by id ("guitar.standard", "bass.standard5String", ...).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch::{Pitch, PitchClass};
use super::tuning_presets::TUNING_PRESETS;
use crate::error::{FretboardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Instrument {
    Guitar,
    Bass,
    Ukulele,
    Custom,
}

/// One row of the built-in tuning table
#[derive(Debug)]
pub struct TuningPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub instrument: Instrument,
    pub strings: &'static [(PitchClass, i32)],
}

impl TuningPreset {
    /// All built-in presets in table order (guitar, bass, ukulele)
    pub fn all() -> &'static [TuningPreset] {
        TUNING_PRESETS
    }

    pub fn find(id: &str) -> Option<&'static TuningPreset> {
        TUNING_PRESETS.iter().find(|p| p.id == id)
    }

    pub fn for_instrument(instrument: Instrument) -> impl Iterator<Item = &'static TuningPreset> {
        TUNING_PRESETS.iter().filter(move |p| p.instrument == instrument)
    }

    pub fn to_tuning(&self) -> Tuning {
        Tuning {
            id: Some(self.id.to_string()),
            name: self.name.to_string(),
            instrument: self.instrument,
            strings: self
                .strings
                .iter()
                .map(|&(class, octave)| Pitch::new(class, octave))
                .collect(),
        }
    }
}

/// Serialize-only: construction goes through `custom`/`preset` so the
/// non-empty invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuning {
    /// Preset id, `None` for custom tunings
    id: Option<String>,
    name: String,
    instrument: Instrument,
    strings: Vec<Pitch>,
}

impl Tuning {
    /// Custom tuning. Fails on an empty string list.
    pub fn custom(name: impl Into<String>, strings: Vec<Pitch>) -> Result<Tuning> {
        if strings.is_empty() {
            return Err(FretboardError::EmptyTuning);
        }
        Ok(Tuning {
            id: None,
            name: name.into(),
            instrument: Instrument::Custom,
            strings,
        })
    }

    /// Custom tuning from pitch names like `["E2", "A2", "D3"]`
    pub fn parse_custom<S: AsRef<str>>(name: impl Into<String>, strings: &[S]) -> Result<Tuning> {
        let pitches = strings
            .iter()
            .map(|s| s.as_ref().parse::<Pitch>())
            .collect::<Result<Vec<_>>>()?;
        Tuning::custom(name, pitches)
    }

    pub fn preset(id: &str) -> Result<Tuning> {
        TuningPreset::find(id)
            .map(TuningPreset::to_tuning)
            .ok_or_else(|| FretboardError::UnknownTuning(id.to_string()))
    }

    /// Six-string guitar, E2 A2 D3 G3 B3 E4
    pub fn standard() -> Tuning {
        TUNING_PRESETS[0].to_tuning()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Open-string pitches, index 0 is the top string in horizontal layout
    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::standard()
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
