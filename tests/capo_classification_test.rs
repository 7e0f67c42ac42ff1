// Marker classification on a real fretboard: bars, isolated dots and chord mode

use fretboard_wasm::{Direction, FretNoteType, Fretboard, Pitch, RenderOptions, Tuning};

fn pitch(s: &str) -> Pitch {
    s.parse().unwrap()
}

fn note_type(fretboard: &Fretboard, options: &RenderOptions, key: (usize, usize)) -> FretNoteType {
    let types = fretboard.note_types(options);
    let index = fretboard
        .positions()
        .iter()
        .position(|p| p.key() == key)
        .unwrap();
    types[index]
}

/// Five strings a fourth apart, frets 0-3, so no pitch repeats across strings
fn five_string() -> Fretboard {
    let tuning = Tuning::parse_custom("Five", &["B0", "E1", "A1", "D2", "G2"]).unwrap();
    Fretboard::new(tuning, 0, 4, Direction::Horizontal)
}

#[test]
fn test_three_string_bar_on_one_fret() {
    let mut fretboard = five_string();
    fretboard.select_notes(&[pitch("B0"), pitch("E1"), pitch("A1")]);
    let options = RenderOptions::default();

    assert_eq!(note_type(&fretboard, &options, (0, 0)), FretNoteType::CapoStart);
    assert_eq!(note_type(&fretboard, &options, (1, 0)), FretNoteType::Capo);
    assert_eq!(note_type(&fretboard, &options, (2, 0)), FretNoteType::CapoEnd);
    assert_eq!(note_type(&fretboard, &options, (3, 0)), FretNoteType::None);
}

#[test]
fn test_adjacent_pair_draws_two_dots() {
    let mut fretboard = five_string();
    fretboard.select_notes(&[pitch("A1"), pitch("D2")]);
    let options = RenderOptions::default();

    assert_eq!(note_type(&fretboard, &options, (2, 0)), FretNoteType::Default);
    assert_eq!(note_type(&fretboard, &options, (3, 0)), FretNoteType::Default);
}

#[test]
fn test_full_barre_across_six_strings() {
    let mut fretboard = Fretboard::default();
    // Barre at fret 1: none of these pitches appear elsewhere in frets 0-4
    let fret_one: Vec<Pitch> = (0..6)
        .map(|s| fretboard.position(s, 1).unwrap().pitch)
        .collect();
    fretboard.select_notes(&fret_one);
    let options = RenderOptions::default();

    let types: Vec<FretNoteType> = (0..6).map(|s| note_type(&fretboard, &options, (s, 1))).collect();
    assert_eq!(
        types,
        vec![
            FretNoteType::CapoStart,
            FretNoteType::Capo,
            FretNoteType::Capo,
            FretNoteType::Capo,
            FretNoteType::Capo,
            FretNoteType::CapoEnd,
        ]
    );
}

#[test]
fn test_chord_mode_suppresses_higher_fret_on_same_string() {
    let mut fretboard = five_string();
    // Relative frets 1 and 3 on string 0: C1 and D1
    fretboard.select_notes(&[pitch("C1"), pitch("D1")]);

    let chord_mode = RenderOptions { draw_capo: true, chord_mode: true };
    assert_eq!(note_type(&fretboard, &chord_mode, (0, 1)), FretNoteType::Default);
    assert_eq!(note_type(&fretboard, &chord_mode, (0, 3)), FretNoteType::None);

    let normal = RenderOptions::default();
    assert_eq!(note_type(&fretboard, &normal, (0, 3)), FretNoteType::Default);
}

#[test]
fn test_markers_report_open_strings_and_labels() {
    let mut fretboard = Fretboard::default();
    fretboard.select_note(pitch("E2"));
    let markers = fretboard.markers(&RenderOptions::default());

    assert!(markers[0].is_open_string);
    assert!(markers[0].is_selected);
    assert_eq!(markers[0].note_type, FretNoteType::Default);
    assert_eq!(fretboard.fret_labels(), vec![None, Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(fretboard.string_labels(), vec!["E", "A", "D", "G", "B", "E"]);
}
