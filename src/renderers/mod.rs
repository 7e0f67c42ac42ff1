//! Renderers module for the fretboard
//!
//! Derives what a view layer needs to draw from the position grid: the
//! marker kind of every position (dot, bar start/middle/end, hidden) and the
//! fret and string labels. Nothing here draws pixels.

pub mod labels;
pub mod note_types;

// Re-export commonly used types
pub use labels::{fret_labels, is_open_string, markers, string_labels, FretMarker};
pub use note_types::classify_positions;
