//! Grid construction
//!
//! Positions are laid out string-major: every fret of string 0, then every
//! fret of string 1, and so on. Index `i` therefore sits at string
//! `i / fret_count`, fret `i % fret_count`.

use std::collections::BTreeSet;

use crate::models::{FretPosition, Tuning};

/// Build every position of the window `[start_fret, start_fret + fret_count)`
pub fn build_positions(tuning: &Tuning, start_fret: usize, fret_count: usize) -> Vec<FretPosition> {
    let mut positions = Vec::with_capacity(tuning.string_count() * fret_count);
    for (string_index, open) in tuning.strings().iter().enumerate() {
        for fret_index in 0..fret_count {
            let pitch = open.transpose((start_fret + fret_index) as i32);
            positions.push(FretPosition::new(pitch, string_index, fret_index));
        }
    }
    positions
}

/// Distinct octaves present on the grid, ascending
pub fn occupied_octaves(positions: &[FretPosition]) -> Vec<i32> {
    positions
        .iter()
        .map(|p| p.pitch.octave)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// List index of `(string_index, fret_index)` for a string-major grid
pub fn index_of(fret_count: usize, string_index: usize, fret_index: usize) -> usize {
    string_index * fret_count + fret_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pitch, PitchClass};

    #[test]
    fn test_cardinality_and_order() {
        let tuning = Tuning::standard();
        let positions = build_positions(&tuning, 0, 5);
        assert_eq!(positions.len(), 30);
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.string_index, i / 5);
            assert_eq!(p.fret_index, i % 5);
            assert!(!p.is_selected);
            assert_eq!(index_of(5, p.string_index, p.fret_index), i);
        }
    }

    #[test]
    fn test_pitches_follow_window_start() {
        let tuning = Tuning::standard();
        let positions = build_positions(&tuning, 5, 3);
        // Low E string, absolute fret 5 is A2
        assert_eq!(positions[0].pitch, Pitch::new(PitchClass::A, 2));
        assert_eq!(positions[0].fret_index, 0);
        // High E string, absolute fret 7 is B4
        assert_eq!(positions[17].pitch, Pitch::new(PitchClass::B, 4));
    }

    #[test]
    fn test_occupied_octaves_sorted_unique() {
        let tuning = Tuning::standard();
        let positions = build_positions(&tuning, 0, 5);
        // E2..G#2 up to E4..G#4
        assert_eq!(occupied_octaves(&positions), vec![2, 3, 4]);
    }

    #[test]
    fn test_occupied_octaves_crossing_c() {
        let tuning = Tuning::parse_custom("One", &["B3"]).unwrap();
        let positions = build_positions(&tuning, 0, 2);
        assert_eq!(occupied_octaves(&positions), vec![3, 4]);
    }
}
