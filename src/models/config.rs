//! Fretboard configuration as supplied by the host (JSON or JS object)

use serde::{Deserialize, Serialize};

use super::position::Direction;
use super::tuning::Tuning;
use crate::error::Result;

/// Where the tuning comes from: a built-in preset id or an explicit list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TuningSource {
    Preset(String),
    Custom { name: String, strings: Vec<String> },
}

impl TuningSource {
    pub fn resolve(&self) -> Result<Tuning> {
        match self {
            TuningSource::Preset(id) => Tuning::preset(id),
            TuningSource::Custom { name, strings } => Tuning::parse_custom(name.clone(), strings),
        }
    }
}

impl Default for TuningSource {
    fn default() -> Self {
        TuningSource::Preset("guitar.standard".to_string())
    }
}

/// Rendering switches that do not change the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Group runs of 3+ selected strings on a fret into bars
    pub draw_capo: bool,
    /// Only the lowest selected fret on each string sounds
    pub chord_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            draw_capo: true,
            chord_mode: false,
        }
    }
}

/// Complete host configuration. Missing fields take their defaults.
///
/// `start_fret` and `fret_count` are signed so out-of-range input can be
/// clamped instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FretboardConfig {
    pub tuning: TuningSource,
    pub start_fret: i32,
    pub fret_count: i32,
    pub direction: Direction,
    #[serde(flatten)]
    pub render: RenderOptions,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            tuning: TuningSource::default(),
            start_fret: 0,
            fret_count: 5,
            direction: Direction::Horizontal,
            render: RenderOptions::default(),
        }
    }
}

impl FretboardConfig {
    pub fn from_json(json: &str) -> Result<FretboardConfig> {
        Ok(serde_json::from_str(json)?)
    }
}
