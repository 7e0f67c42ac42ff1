//! Error types for fretboard configuration parsing
//!
//! Grid building, selection and classification never fail. These errors only
//! come from turning outside input (text, JSON, preset ids) into model values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FretboardError {
    #[error("invalid pitch: '{0}'")]
    InvalidPitch(String),

    #[error("unknown tuning preset: '{0}'")]
    UnknownTuning(String),

    #[error("tuning must have at least one string")]
    EmptyTuning,

    #[error("invalid direction: '{0}' (expected horizontal or vertical)")]
    InvalidDirection(String),

    #[error("unknown chord type: '{0}'")]
    UnknownChordType(String),

    #[error("unknown scale type: '{0}'")]
    UnknownScaleType(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FretboardError>;
