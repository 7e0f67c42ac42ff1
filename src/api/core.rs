//! WASM API for the fretboard engine
//!
//! JavaScript drives a single module-owned `Fretboard`. Every mutating call
//! returns the change events it produced, in order, so the host sees one
//! event per setter or selection operation.

use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, fretboard_error, serialize, validation_error};
use super::types::{MarkerView, TuningInfo};
use crate::fretboard::{Fretboard, FretboardEvent};
use crate::models::{
    Chord, Direction, FretboardConfig, Pitch, PitchClass, RenderOptions, Scale, ScaleType, Tuning,
    TuningPreset,
};
use crate::{wasm_info, wasm_log, wasm_warn};

type EventQueue = Arc<Mutex<Vec<FretboardEvent>>>;

/// The fretboard plus the queue its listener fills between API calls
struct Session {
    fretboard: Fretboard,
    render: RenderOptions,
    events: EventQueue,
}

impl Session {
    fn new(mut fretboard: Fretboard, render: RenderOptions) -> Self {
        let events: EventQueue = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::clone(&events);
        fretboard.subscribe(move |event| {
            if let Ok(mut queue) = queue.lock() {
                queue.push(event.clone());
            }
        });
        Session {
            fretboard,
            render,
            events,
        }
    }

    fn take_events(&self) -> Vec<FretboardEvent> {
        self.events
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

// WASM-owned fretboard storage (canonical source of truth)
lazy_static! {
    static ref FRETBOARD: Mutex<Option<Session>> = Mutex::new(None);
}

/// Run a mutation on the fretboard and return the events it fired
fn mutate<F>(context: &str, f: F) -> Result<JsValue, JsValue>
where
    F: FnOnce(&mut Fretboard),
{
    let mut guard = FRETBOARD
        .lock()
        .map_err(|_| validation_error("Fretboard state is poisoned"))?;
    let session = guard
        .as_mut()
        .ok_or_else(|| validation_error("No fretboard created"))?;

    f(&mut session.fretboard);
    let events = session.take_events();

    wasm_log!("{}: {} event(s)", context, events.len());
    serialize(&events, context)
}

/// Read from the fretboard without changing it
fn read<T, F>(context: &str, f: F) -> Result<JsValue, JsValue>
where
    T: Serialize,
    F: FnOnce(&Session) -> T,
{
    let guard = FRETBOARD
        .lock()
        .map_err(|_| validation_error("Fretboard state is poisoned"))?;
    let session = guard
        .as_ref()
        .ok_or_else(|| validation_error("No fretboard created"))?;
    serialize(&f(session), context)
}

/// Collect a JS array whose items must all be strings
fn string_array(array: &js_sys::Array, context: &str) -> Result<Vec<String>, JsValue> {
    array
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_string()
                .ok_or_else(|| validation_error(format!("{}: item {} is not a string", context, i)))
        })
        .collect()
}

fn parse_pitch(text: &str, context: &str) -> Result<Pitch, JsValue> {
    text.parse::<Pitch>().map_err(|e| fretboard_error(context, e))
}

/// Free text is normalized here so only the enum reaches the core.
/// Anything that is not "vertical" lays out horizontally.
fn normalize_direction(text: &str) -> Direction {
    text.parse().unwrap_or_else(|err| {
        wasm_warn!("{}, falling back to horizontal", err);
        log::warn!("direction '{}' normalized to horizontal", text);
        Direction::Horizontal
    })
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Create (or replace) the fretboard
///
/// # Parameters
/// - `config_js`: a `FretboardConfig` object, or `undefined`/`null` for the
///   defaults (standard guitar, frets 0-4, horizontal)
///
/// # Returns
/// The new fretboard snapshot
#[wasm_bindgen(js_name = createFretboard)]
pub fn create_fretboard(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: FretboardConfig = if config_js.is_undefined() || config_js.is_null() {
        FretboardConfig::default()
    } else {
        deserialize(config_js, "Invalid fretboard config")?
    };

    let fretboard =
        Fretboard::from_config(&config).map_err(|e| fretboard_error("createFretboard", e))?;
    wasm_info!(
        "createFretboard: '{}' {} strings, start fret {}, {} frets, {}",
        fretboard.tuning().name(),
        fretboard.string_count(),
        fretboard.start_fret(),
        fretboard.fret_count(),
        fretboard.direction()
    );

    let snapshot = fretboard.snapshot();
    let mut guard = FRETBOARD
        .lock()
        .map_err(|_| validation_error("Fretboard state is poisoned"))?;
    *guard = Some(Session::new(fretboard, config.render));

    serialize(&snapshot, "createFretboard")
}

// ============================================================================
// Setters
// ============================================================================

#[wasm_bindgen(js_name = setTuningPreset)]
pub fn set_tuning_preset(id: &str) -> Result<JsValue, JsValue> {
    let tuning = Tuning::preset(id).map_err(|e| fretboard_error("setTuningPreset", e))?;
    mutate("setTuningPreset", |fretboard| fretboard.set_tuning(tuning))
}

/// Replace the tuning with an explicit list of open-string pitches
///
/// # Parameters
/// - `name`: display name
/// - `strings`: array of pitch strings, lowest string first (`["D2", "A2", ...]`)
#[wasm_bindgen(js_name = setCustomTuning)]
pub fn set_custom_tuning(name: &str, strings: js_sys::Array) -> Result<JsValue, JsValue> {
    let strings = string_array(&strings, "setCustomTuning")?;
    let tuning =
        Tuning::parse_custom(name, &strings).map_err(|e| fretboard_error("setCustomTuning", e))?;
    mutate("setCustomTuning", |fretboard| fretboard.set_tuning(tuning))
}

/// Clamped to `0..=127`
#[wasm_bindgen(js_name = setStartFret)]
pub fn set_start_fret(start_fret: i32) -> Result<JsValue, JsValue> {
    mutate("setStartFret", |fretboard| fretboard.set_start_fret(start_fret))
}

/// Clamped to `1..=128`
#[wasm_bindgen(js_name = setFretCount)]
pub fn set_fret_count(fret_count: i32) -> Result<JsValue, JsValue> {
    mutate("setFretCount", |fretboard| fretboard.set_fret_count(fret_count))
}

#[wasm_bindgen(js_name = setDirection)]
pub fn set_direction(direction: &str) -> Result<JsValue, JsValue> {
    let direction = normalize_direction(direction);
    mutate("setDirection", |fretboard| fretboard.set_direction(direction))
}

// ============================================================================
// Selection
// ============================================================================

/// Add every position sounding `pitch` (e.g. "C#4") to the selection
#[wasm_bindgen(js_name = selectNote)]
pub fn select_note(pitch: &str) -> Result<JsValue, JsValue> {
    let pitch = parse_pitch(pitch, "selectNote")?;
    mutate("selectNote", |fretboard| fretboard.select_note(pitch))
}

/// Replace the selection with the given pitches
#[wasm_bindgen(js_name = selectNotes)]
pub fn select_notes(pitches: js_sys::Array) -> Result<JsValue, JsValue> {
    let pitches = string_array(&pitches, "selectNotes")?
        .iter()
        .map(|text| parse_pitch(text, "selectNotes"))
        .collect::<Result<Vec<_>, _>>()?;
    mutate("selectNotes", |fretboard| fretboard.select_notes(&pitches))
}

/// Replace the selection with a chord given as a symbol ("C", "F#m7", "Bbmaj7")
#[wasm_bindgen(js_name = selectChord)]
pub fn select_chord(chord: &str) -> Result<JsValue, JsValue> {
    let chord: Chord = chord.parse().map_err(|e| fretboard_error("selectChord", e))?;
    wasm_info!("selectChord: {}", chord);
    mutate("selectChord", |fretboard| fretboard.select_chord(&chord))
}

/// Replace the selection with a scale
///
/// # Parameters
/// - `root`: pitch class ("A", "Eb")
/// - `scale_type`: scale name ("major", "minor pentatonic", "dorian")
#[wasm_bindgen(js_name = selectScale)]
pub fn select_scale(root: &str, scale_type: &str) -> Result<JsValue, JsValue> {
    let root: PitchClass = root.parse().map_err(|e| fretboard_error("selectScale", e))?;
    let scale_type: ScaleType = scale_type
        .parse()
        .map_err(|e| fretboard_error("selectScale", e))?;
    let scale = Scale::new(root, scale_type);
    wasm_info!("selectScale: {}", scale);
    mutate("selectScale", |fretboard| fretboard.select_scale(&scale))
}

#[wasm_bindgen(js_name = unselectNote)]
pub fn unselect_note(pitch: &str) -> Result<JsValue, JsValue> {
    let pitch = parse_pitch(pitch, "unselectNote")?;
    mutate("unselectNote", |fretboard| fretboard.unselect_note(pitch))
}

#[wasm_bindgen(js_name = unselectAll)]
pub fn unselect_all() -> Result<JsValue, JsValue> {
    mutate("unselectAll", |fretboard| fretboard.unselect_all())
}

// ============================================================================
// Queries
// ============================================================================

/// Markers and labels for drawing
///
/// # Parameters
/// - `chord_mode`, `draw_capo`: override the options given at creation;
///   `undefined` keeps them
#[wasm_bindgen(js_name = getMarkers)]
pub fn get_markers(chord_mode: Option<bool>, draw_capo: Option<bool>) -> Result<JsValue, JsValue> {
    read("getMarkers", |session| {
        let options = RenderOptions {
            chord_mode: chord_mode.unwrap_or(session.render.chord_mode),
            draw_capo: draw_capo.unwrap_or(session.render.draw_capo),
        };
        let fretboard = &session.fretboard;
        MarkerView {
            direction: fretboard.direction(),
            string_count: fretboard.string_count(),
            fret_count: fretboard.fret_count(),
            fret_labels: fretboard.fret_labels(),
            string_labels: fretboard.string_labels(),
            markers: fretboard.markers(&options),
        }
    })
}

#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<JsValue, JsValue> {
    read("getSnapshot", |session| session.fretboard.snapshot())
}

/// Built-in tuning presets in table order
#[wasm_bindgen(js_name = listTunings)]
pub fn list_tunings() -> Result<JsValue, JsValue> {
    let tunings: Vec<TuningInfo> = TuningPreset::all().iter().map(TuningInfo::from).collect();
    serialize(&tunings, "listTunings")
}
