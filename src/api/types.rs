//! Shared types for the WASM API
//!
//! Result shapes handed to JavaScript that have no counterpart in the core
//! models.

use serde::Serialize;

use crate::models::{Direction, Instrument, Pitch, TuningPreset};
use crate::renderers::FretMarker;

/// One row of `listTunings`
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TuningInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub instrument: Instrument,
    pub strings: Vec<Pitch>,
}

impl From<&'static TuningPreset> for TuningInfo {
    fn from(preset: &'static TuningPreset) -> Self {
        TuningInfo {
            id: preset.id,
            name: preset.name,
            instrument: preset.instrument,
            strings: preset.to_tuning().strings().to_vec(),
        }
    }
}

/// Result of `getMarkers`: everything needed to redraw the view
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    pub direction: Direction,
    pub string_count: usize,
    pub fret_count: usize,
    pub fret_labels: Vec<Option<usize>>,
    pub string_labels: Vec<String>,
    pub markers: Vec<FretMarker>,
}
