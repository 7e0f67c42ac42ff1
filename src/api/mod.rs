//! Fretboard WASM API
//!
//! This module provides the JavaScript-facing API for the fretboard engine.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `types`: result shapes returned to JavaScript
//! - `core`: the module-owned fretboard and every exported function

pub mod helpers;
pub mod types;
pub mod core;

// Re-export all public functions to keep a flat public API
pub use core::*;
