//! Fretboard WASM Module
//!
//! Note model for a stringed-instrument fretboard view: builds the grid of
//! pitched positions from a tuning and fret window, selects notes, chords and
//! scales on it, and derives the marker kinds (dots and bars) a view draws.

pub mod api;
pub mod error;
pub mod fretboard;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use error::{FretboardError, Result};
pub use fretboard::{Fretboard, FretboardEvent, FretboardSnapshot, ListenerId};
pub use models::*;
pub use renderers::FretMarker;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // Logger already installed by a previous start
        log::debug!("console logger already initialized");
    }

    log::info!("Fretboard WASM module initialized");
}
