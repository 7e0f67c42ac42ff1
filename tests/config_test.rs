// Host configuration: JSON in, fretboard out

use fretboard_wasm::{Direction, Fretboard, FretboardConfig, FretboardError, RenderOptions};

#[test]
fn test_fretboard_from_json_config() {
    let config = FretboardConfig::from_json(
        r#"{
            "tuning": { "preset": "ukulele.tenor" },
            "startFret": 2,
            "fretCount": 3,
            "direction": "vertical"
        }"#,
    )
    .unwrap();
    let fretboard = Fretboard::from_config(&config).unwrap();

    assert_eq!(fretboard.string_count(), 4);
    assert_eq!(fretboard.positions().len(), 12);
    assert_eq!(fretboard.direction(), Direction::Vertical);
    assert_eq!(fretboard.fret_labels(), vec![Some(2), Some(3), Some(4)]);
    assert_eq!(config.render, RenderOptions::default());
}

#[test]
fn test_unknown_preset_is_an_error() {
    let config = FretboardConfig::from_json(r#"{ "tuning": { "preset": "banjo.open" } }"#).unwrap();
    assert!(matches!(
        Fretboard::from_config(&config),
        Err(FretboardError::UnknownTuning(id)) if id == "banjo.open"
    ));
}

#[test]
fn test_custom_tuning_with_bad_pitch() {
    let config = FretboardConfig::from_json(
        r#"{ "tuning": { "custom": { "name": "Broken", "strings": ["E2", "Q9"] } } }"#,
    )
    .unwrap();
    assert!(matches!(
        Fretboard::from_config(&config),
        Err(FretboardError::InvalidPitch(_))
    ));
}

#[test]
fn test_empty_custom_tuning_is_rejected() {
    let config = FretboardConfig::from_json(
        r#"{ "tuning": { "custom": { "name": "None", "strings": [] } } }"#,
    )
    .unwrap();
    assert!(matches!(
        Fretboard::from_config(&config),
        Err(FretboardError::EmptyTuning)
    ));
}

#[test]
fn test_out_of_range_window_is_clamped() {
    let config = FretboardConfig::from_json(r#"{ "startFret": -7, "fretCount": -2 }"#).unwrap();
    let fretboard = Fretboard::from_config(&config).unwrap();
    assert_eq!(fretboard.start_fret(), 0);
    assert_eq!(fretboard.fret_count(), 1);
}
