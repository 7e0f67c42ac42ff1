// Selection engine: replacement semantics and chord/scale round trips

use std::collections::BTreeSet;

use fretboard_wasm::{
    Chord, ChordType, Fretboard, NotesInOctaves, Pitch, PitchClass, Scale, ScaleType,
};

fn pitch(s: &str) -> Pitch {
    s.parse().unwrap()
}

fn selected_keys(fretboard: &Fretboard) -> Vec<(usize, usize)> {
    fretboard.selected_positions().map(|p| p.key()).collect()
}

#[test]
fn test_select_set_replaces_previous_selection() {
    let mut fretboard = Fretboard::default();

    fretboard.select_notes(&[pitch("E4")]);
    assert_eq!(selected_keys(&fretboard), vec![(5, 0)]);

    fretboard.select_notes(&[pitch("A2")]);
    assert_eq!(selected_keys(&fretboard), vec![(1, 0)]);
}

#[test]
fn test_chord_after_scale_is_not_additive() {
    let mut fretboard = Fretboard::default();
    fretboard.select_scale(&Scale::new(PitchClass::C, ScaleType::Major));
    fretboard.select_chord(&Chord::new(PitchClass::C, ChordType::Major));

    let allowed = [PitchClass::C, PitchClass::E, PitchClass::G];
    assert!(fretboard
        .selected_positions()
        .all(|p| allowed.contains(&p.pitch.class)));
}

#[test]
fn test_select_chord_round_trip() {
    let mut fretboard = Fretboard::new(
        fretboard_wasm::Tuning::standard(),
        0,
        12,
        fretboard_wasm::Direction::Horizontal,
    );
    for symbol in ["C", "Am", "F#m7", "Bbmaj7", "G7", "Bdim"] {
        let chord: Chord = symbol.parse().unwrap();
        fretboard.select_chord(&chord);

        let notes = chord.notes_in_octaves(&fretboard.occupied_octaves());
        let expected: BTreeSet<(usize, usize)> = fretboard
            .positions()
            .iter()
            .filter(|p| notes.contains(&p.pitch))
            .map(|p| p.key())
            .collect();
        let actual: BTreeSet<(usize, usize)> = selected_keys(&fretboard).into_iter().collect();

        assert_eq!(actual, expected, "chord {}", symbol);
    }
}

#[test]
fn test_select_scale_round_trip() {
    let mut fretboard = Fretboard::default();
    let scale = Scale::new(PitchClass::A, ScaleType::MinorPentatonic);
    fretboard.select_scale(&scale);

    let notes = scale.notes_in_octaves(&fretboard.occupied_octaves());
    for p in fretboard.positions() {
        assert_eq!(p.is_selected, notes.contains(&p.pitch), "{:?}", p.key());
    }
}

#[test]
fn test_select_note_outside_window_selects_nothing() {
    let mut fretboard = Fretboard::default();
    fretboard.select_note(pitch("C6"));
    assert_eq!(fretboard.selected_positions().count(), 0);
}

#[test]
fn test_unselect_note_keeps_others() {
    let mut fretboard = Fretboard::default();
    fretboard.select_chord(&Chord::new(PitchClass::E, ChordType::Minor));
    let before = fretboard.selected_positions().count();

    fretboard.unselect_note(pitch("E2"));
    assert_eq!(fretboard.selected_positions().count(), before - 1);
    assert!(!fretboard.position(0, 0).unwrap().is_selected);
}
