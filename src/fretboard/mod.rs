//! The fretboard: tuning plus fret window, the derived position grid,
//! note selection and change notification.
//!
//! `Fretboard` exclusively owns its positions. All mutation goes through its
//! methods so that every change reaches the listeners.

pub mod events;
pub mod grid;
pub mod selection;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Direction, FretNoteType, FretPosition, FretboardConfig, RenderOptions, Tuning};
use crate::renderers::labels::{self, FretMarker};
use crate::renderers::note_types::classify_positions;

pub use events::{FretboardEvent, Listener, ListenerId, Listeners};

#[derive(Debug)]
pub struct Fretboard {
    tuning: Tuning,
    start_fret: usize,
    fret_count: usize,
    direction: Direction,
    positions: Vec<FretPosition>,
    listeners: Listeners,
}

/// Serializable view of the fretboard state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardSnapshot {
    pub tuning: Tuning,
    pub start_fret: usize,
    pub fret_count: usize,
    pub direction: Direction,
    pub positions: Vec<FretPosition>,
    pub octaves: Vec<i32>,
}

impl Fretboard {
    /// `start_fret` clamps to `0..=MAX_START_FRET`, `fret_count` to
    /// `1..=MAX_FRET_COUNT`
    pub fn new(tuning: Tuning, start_fret: i32, fret_count: i32, direction: Direction) -> Self {
        let start_fret = clamp_start_fret(start_fret);
        let fret_count = clamp_fret_count(fret_count);
        let positions = grid::build_positions(&tuning, start_fret, fret_count);
        Self {
            tuning,
            start_fret,
            fret_count,
            direction,
            positions,
            listeners: Listeners::default(),
        }
    }

    pub fn from_config(config: &FretboardConfig) -> Result<Self> {
        let tuning = config.tuning.resolve()?;
        Ok(Fretboard::new(
            tuning,
            config.start_fret,
            config.fret_count,
            config.direction,
        ))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn start_fret(&self) -> usize {
        self.start_fret
    }

    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    pub fn string_count(&self) -> usize {
        self.tuning.string_count()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All positions, string-major
    pub fn positions(&self) -> &[FretPosition] {
        &self.positions
    }

    pub fn position(&self, string_index: usize, fret_index: usize) -> Option<&FretPosition> {
        if string_index >= self.string_count() || fret_index >= self.fret_count {
            return None;
        }
        self.positions
            .get(grid::index_of(self.fret_count, string_index, fret_index))
    }

    pub fn selected_positions(&self) -> impl Iterator<Item = &FretPosition> {
        self.positions.iter().filter(|p| p.is_selected)
    }

    pub fn occupied_octaves(&self) -> Vec<i32> {
        grid::occupied_octaves(&self.positions)
    }

    /// Note marker kind for every position, in position order
    pub fn note_types(&self, options: &RenderOptions) -> Vec<FretNoteType> {
        classify_positions(&self.positions, options)
    }

    pub fn markers(&self, options: &RenderOptions) -> Vec<FretMarker> {
        labels::markers(&self.positions, self.start_fret, options)
    }

    pub fn fret_labels(&self) -> Vec<Option<usize>> {
        labels::fret_labels(self.start_fret, self.fret_count)
    }

    pub fn string_labels(&self) -> Vec<String> {
        labels::string_labels(&self.tuning)
    }

    pub fn snapshot(&self) -> FretboardSnapshot {
        FretboardSnapshot {
            tuning: self.tuning.clone(),
            start_fret: self.start_fret,
            fret_count: self.fret_count,
            direction: self.direction,
            positions: self.positions.clone(),
            octaves: self.occupied_octaves(),
        }
    }

    // ------------------------------------------------------------------
    // Setters. Each one fires its own notification, even for an
    // unchanged value. Grid setters discard the current selection.
    // ------------------------------------------------------------------

    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning;
        self.rebuild();
    }

    pub fn set_start_fret(&mut self, start_fret: i32) {
        self.start_fret = clamp_start_fret(start_fret);
        self.rebuild();
    }

    pub fn set_fret_count(&mut self, fret_count: i32) {
        self.fret_count = clamp_fret_count(fret_count);
        self.rebuild();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        log::debug!("direction set to {}", direction);
        self.listeners.emit(&FretboardEvent::DirectionChanged(direction));
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&FretboardEvent) + Send + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn rebuild(&mut self) {
        self.positions = grid::build_positions(&self.tuning, self.start_fret, self.fret_count);
        log::debug!(
            "rebuilt grid: '{}' {} strings, frets {}..{}",
            self.tuning.name(),
            self.string_count(),
            self.start_fret,
            self.start_fret + self.fret_count
        );
        self.listeners
            .emit(&FretboardEvent::GridChanged(self.positions.clone()));
    }

    fn notify_selection(&mut self) {
        log::debug!(
            "selection changed: {} of {} positions selected",
            self.selected_positions().count(),
            self.positions.len()
        );
        self.listeners
            .emit(&FretboardEvent::SelectionChanged(self.positions.clone()));
    }
}

impl Default for Fretboard {
    /// Standard guitar tuning, frets 0-4, horizontal
    fn default() -> Self {
        Fretboard::new(Tuning::standard(), 0, 5, Direction::Horizontal)
    }
}

/// Highest window start. Together with `MAX_FRET_COUNT` this keeps every
/// fretted pitch a small MIDI-range number.
pub const MAX_START_FRET: i32 = 127;

/// Widest window
pub const MAX_FRET_COUNT: i32 = 128;

fn clamp_start_fret(start_fret: i32) -> usize {
    start_fret.clamp(0, MAX_START_FRET) as usize
}

fn clamp_fret_count(fret_count: i32) -> usize {
    fret_count.clamp(1, MAX_FRET_COUNT) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pitch, PitchClass};

    #[test]
    fn test_default_fretboard() {
        let fretboard = Fretboard::default();
        assert_eq!(fretboard.string_count(), 6);
        assert_eq!(fretboard.fret_count(), 5);
        assert_eq!(fretboard.start_fret(), 0);
        assert_eq!(fretboard.positions().len(), 30);
        assert_eq!(fretboard.direction(), Direction::Horizontal);
    }

    #[test]
    fn test_clamping_on_construction() {
        let fretboard = Fretboard::new(Tuning::standard(), -4, 0, Direction::Vertical);
        assert_eq!(fretboard.start_fret(), 0);
        assert_eq!(fretboard.fret_count(), 1);
        assert_eq!(fretboard.positions().len(), 6);
    }

    #[test]
    fn test_position_lookup() {
        let fretboard = Fretboard::default();
        let p = fretboard.position(1, 2).unwrap();
        assert_eq!(p.key(), (1, 2));
        assert_eq!(p.pitch, Pitch::new(PitchClass::B, 2));
        assert!(fretboard.position(6, 0).is_none());
        assert!(fretboard.position(0, 5).is_none());
    }

    #[test]
    fn test_huge_window_is_capped() {
        let mut fretboard = Fretboard::new(Tuning::standard(), i32::MAX - 2, 5, Direction::Horizontal);
        assert_eq!(fretboard.start_fret(), MAX_START_FRET as usize);
        assert_eq!(fretboard.positions().len(), 30);

        fretboard.set_start_fret(i32::MAX);
        fretboard.set_fret_count(i32::MAX);
        assert_eq!(fretboard.start_fret(), MAX_START_FRET as usize);
        assert_eq!(fretboard.fret_count(), MAX_FRET_COUNT as usize);
        assert_eq!(fretboard.positions().len(), 6 * MAX_FRET_COUNT as usize);

        // High E string, last fret: E4 + 127 + 127 semitones
        let last = fretboard.position(5, MAX_FRET_COUNT as usize - 1).unwrap();
        assert_eq!(last.pitch.midi_number(), 64 + 254);
    }

    #[test]
    fn test_from_config_clamps() {
        let config = FretboardConfig {
            start_fret: -2,
            fret_count: -1,
            ..FretboardConfig::default()
        };
        let fretboard = Fretboard::from_config(&config).unwrap();
        assert_eq!(fretboard.start_fret(), 0);
        assert_eq!(fretboard.fret_count(), 1);
    }

    #[test]
    fn test_snapshot() {
        let fretboard = Fretboard::default();
        let snapshot = fretboard.snapshot();
        assert_eq!(snapshot.positions.len(), 30);
        assert_eq!(snapshot.octaves, vec![2, 3, 4]);
        assert_eq!(snapshot.tuning.name(), "Standard");
    }
}
