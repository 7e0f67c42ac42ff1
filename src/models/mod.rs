//! Models module for the fretboard
//!
//! Pitches, chords, scales, tunings and the grid cell types the fretboard
//! engine works with.

pub mod chord;
pub mod config;
pub mod pitch;
pub mod pitch_set;
pub mod position;
pub mod scale;
pub mod tuning;
mod tuning_presets;

// Re-export commonly used types
pub use chord::{Chord, ChordType};
pub use config::{FretboardConfig, RenderOptions, TuningSource};
pub use pitch::{Pitch, PitchClass};
pub use pitch_set::NotesInOctaves;
pub use position::{Direction, FretNoteType, FretPosition};
pub use scale::{Scale, ScaleType};
pub use tuning::{Instrument, Tuning, TuningPreset};
