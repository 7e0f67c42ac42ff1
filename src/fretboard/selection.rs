//! Note selection
//!
//! `select_note` and `unselect_note` touch only matching positions.
//! `select_notes`, `select_chord` and `select_scale` rewrite the selection
//! flag of every position from membership in the new pitch set, so they
//! replace the previous selection rather than adding to it.
//!
//! Every operation fires exactly one `SelectionChanged` after it completes.

use std::collections::HashSet;

use super::Fretboard;
use crate::models::{Chord, NotesInOctaves, Pitch, Scale};

impl Fretboard {
    /// Mark every position sounding `pitch` as selected
    pub fn select_note(&mut self, pitch: Pitch) {
        for position in self.positions.iter_mut().filter(|p| p.pitch == pitch) {
            position.is_selected = true;
        }
        self.notify_selection();
    }

    /// Replace the selection with every position whose pitch is in `pitches`
    pub fn select_notes(&mut self, pitches: &[Pitch]) {
        let wanted: HashSet<Pitch> = pitches.iter().copied().collect();
        self.apply_selection(&wanted);
    }

    /// Replace the selection with the chord's notes across the grid's octaves
    pub fn select_chord(&mut self, chord: &Chord) {
        self.select_from(chord);
    }

    /// Replace the selection with the scale's notes across the grid's octaves
    pub fn select_scale(&mut self, scale: &Scale) {
        self.select_from(scale);
    }

    /// Replace the selection with any pitch collection's notes
    pub fn select_from<T: NotesInOctaves + ?Sized>(&mut self, source: &T) {
        let wanted: HashSet<Pitch> = source
            .notes_in_octaves(&self.occupied_octaves())
            .into_iter()
            .collect();
        self.apply_selection(&wanted);
    }

    pub fn unselect_note(&mut self, pitch: Pitch) {
        for position in self.positions.iter_mut().filter(|p| p.pitch == pitch) {
            position.is_selected = false;
        }
        self.notify_selection();
    }

    pub fn unselect_all(&mut self) {
        for position in self.positions.iter_mut() {
            position.is_selected = false;
        }
        self.notify_selection();
    }

    fn apply_selection(&mut self, wanted: &HashSet<Pitch>) {
        for position in self.positions.iter_mut() {
            position.is_selected = wanted.contains(&position.pitch);
        }
        self.notify_selection();
    }
}
