//! View hints: fret numbers, string names, open-string flags and the
//! per-position marker list.

use serde::Serialize;

use super::note_types::classify_positions;
use crate::models::{FretNoteType, FretPosition, Pitch, RenderOptions, Tuning};

/// Everything the view needs to draw one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretMarker {
    pub pitch: Pitch,
    pub string_index: usize,
    pub fret_index: usize,
    /// Absolute fret number on the instrument
    pub fret: usize,
    pub is_selected: bool,
    pub is_open_string: bool,
    pub note_type: FretNoteType,
}

/// True for the open-string column, which only exists when the window
/// starts at the nut.
pub fn is_open_string(start_fret: usize, fret_index: usize) -> bool {
    start_fret == 0 && fret_index == 0
}

/// Fret number above each column. The open-string column has no number.
pub fn fret_labels(start_fret: usize, fret_count: usize) -> Vec<Option<usize>> {
    (0..fret_count)
        .map(|i| {
            if is_open_string(start_fret, i) {
                None
            } else {
                Some(start_fret + i)
            }
        })
        .collect()
}

/// Pitch class name of each open string, e.g. `["E", "A", "D", "G", "B", "E"]`
pub fn string_labels(tuning: &Tuning) -> Vec<String> {
    tuning
        .strings()
        .iter()
        .map(|pitch| pitch.class.to_string())
        .collect()
}

pub fn markers(positions: &[FretPosition], start_fret: usize, options: &RenderOptions) -> Vec<FretMarker> {
    let note_types = classify_positions(positions, options);
    positions
        .iter()
        .zip(note_types)
        .map(|(p, note_type)| FretMarker {
            pitch: p.pitch,
            string_index: p.string_index,
            fret_index: p.fret_index,
            fret: start_fret + p.fret_index,
            is_selected: p.is_selected,
            is_open_string: is_open_string(start_fret, p.fret_index),
            note_type,
        })
        .collect()
}
