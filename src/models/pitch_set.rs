//! Capability shared by chords and scales: produce concrete pitches
//! for a set of octaves.

use std::collections::BTreeSet;

use super::pitch::{Pitch, PitchClass};

/// Anything that can list its pitches across a set of octaves.
///
/// Each pitch class is placed in every requested octave. This intentionally
/// differs from stacking intervals on the root in each octave: an A minor
/// chord over octave 2 yields E2, not only E3, so every fret sounding a
/// chord tone is shown.
pub trait NotesInOctaves {
    fn notes_in_octaves(&self, octaves: &[i32]) -> BTreeSet<Pitch>;
}

/// Every pitch class of `root + intervals`, placed in each of `octaves`.
///
/// Placement is by pitch class, so a chord tone that wraps past B is still
/// emitted in the requested octave rather than spilling into the next one.
pub fn place_in_octaves(root: PitchClass, intervals: &[i32], octaves: &[i32]) -> BTreeSet<Pitch> {
    let mut pitches = BTreeSet::new();
    for &octave in octaves {
        for &interval in intervals {
            pitches.insert(Pitch::new(root.transpose(interval), octave));
        }
    }
    pitches
}
