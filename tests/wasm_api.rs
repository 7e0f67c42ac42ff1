//! WASM API tests
//!
//! Drive the exported functions the way JavaScript does. The api module logs
//! through the browser console, so these only build for wasm32.

#![cfg(target_arch = "wasm32")]

use fretboard_wasm::api::*;
use serde_json::Value;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_json(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).unwrap()
}

fn string_array(items: &[&str]) -> js_sys::Array {
    items.iter().map(|s| JsValue::from_str(s)).collect()
}

fn event_kinds(events: &Value) -> Vec<String> {
    events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["kind"].as_str().unwrap().to_string())
        .collect()
}

#[wasm_bindgen_test]
fn test_create_with_defaults() {
    let snapshot = to_json(create_fretboard(JsValue::UNDEFINED).unwrap());
    assert_eq!(snapshot["fretCount"], 5);
    assert_eq!(snapshot["startFret"], 0);
    assert_eq!(snapshot["direction"], "horizontal");
    assert_eq!(snapshot["positions"].as_array().unwrap().len(), 30);
    assert_eq!(snapshot["tuning"]["id"], "guitar.standard");
}

#[wasm_bindgen_test]
fn test_setters_return_one_event_each() {
    create_fretboard(JsValue::NULL).unwrap();

    let kinds: Vec<String> = [
        set_start_fret(-3).unwrap(),
        set_direction("Vertical").unwrap(),
        set_fret_count(0).unwrap(),
    ]
    .into_iter()
    .flat_map(|events| event_kinds(&to_json(events)))
    .collect();
    assert_eq!(kinds, vec!["gridChanged", "directionChanged", "gridChanged"]);

    let snapshot = to_json(get_snapshot().unwrap());
    assert_eq!(snapshot["startFret"], 0);
    assert_eq!(snapshot["fretCount"], 1);
    assert_eq!(snapshot["direction"], "vertical");
}

#[wasm_bindgen_test]
fn test_unknown_direction_falls_back_to_horizontal() {
    create_fretboard(JsValue::NULL).unwrap();
    set_direction("vertical").unwrap();
    set_direction("diagonal").unwrap();
    assert_eq!(to_json(get_snapshot().unwrap())["direction"], "horizontal");
}

#[wasm_bindgen_test]
fn test_select_notes_replaces() {
    create_fretboard(JsValue::NULL).unwrap();
    select_notes(string_array(&["E4"])).unwrap();
    let events = to_json(select_notes(string_array(&["A2"])).unwrap());

    let positions = events[0]["data"].as_array().unwrap();
    let selected: Vec<(u64, u64)> = positions
        .iter()
        .filter(|p| p["isSelected"] == true)
        .map(|p| (p["stringIndex"].as_u64().unwrap(), p["fretIndex"].as_u64().unwrap()))
        .collect();
    assert_eq!(selected, vec![(1, 0)]);
}

#[wasm_bindgen_test]
fn test_invalid_input_is_rejected() {
    create_fretboard(JsValue::NULL).unwrap();
    assert!(select_note("H2").is_err());
    assert!(select_chord("Cwhat").is_err());
    assert!(select_scale("C", "not a scale").is_err());
    assert!(set_tuning_preset("guitar.nope").is_err());
    assert!(set_custom_tuning("Empty", js_sys::Array::new()).is_err());
}

#[wasm_bindgen_test]
fn test_markers_with_bar() {
    create_fretboard(JsValue::NULL).unwrap();
    set_tuning_preset("guitar.openE").unwrap();
    // Open E tuning strummed open is an E major chord
    select_chord("E").unwrap();

    let view = to_json(get_markers(Some(false), Some(true)).unwrap());
    let markers = view["markers"].as_array().unwrap();
    let open_column: Vec<u64> = markers
        .iter()
        .filter(|m| m["fretIndex"] == 0)
        .map(|m| m["noteType"].as_u64().unwrap())
        .collect();
    // capoStart, capo x4, capoEnd
    assert_eq!(open_column, vec![2, 3, 3, 3, 3, 4]);
    assert_eq!(view["fretLabels"][0], Value::Null);
    assert_eq!(view["fretLabels"][1], 1);
}

#[wasm_bindgen_test]
fn test_list_tunings() {
    let tunings = to_json(list_tunings().unwrap());
    let tunings = tunings.as_array().unwrap();
    assert_eq!(tunings.len(), 84);
    assert_eq!(tunings[0]["id"], "guitar.standard");
    assert_eq!(tunings[0]["strings"][0], "E2");
}
