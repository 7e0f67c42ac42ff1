//! Marker classification for selected positions
//!
//! Within one fret column, a maximal run of three or more adjacent selected
//! strings becomes a bar: `CapoStart`, then `Capo` for the inner strings, then
//! `CapoEnd`. Shorter runs are plain `Default` dots.
//!
//! In chord mode a string only sounds its lowest selected fret, so every other
//! selected position on that string is forced to `None` after bar
//! classification. This holds whether or not bars are drawn.

use std::collections::{HashMap, HashSet};

use crate::models::{FretNoteType, FretPosition, RenderOptions};

/// Classify every position, returning one `FretNoteType` per input position
/// in the same order.
pub fn classify_positions(positions: &[FretPosition], options: &RenderOptions) -> Vec<FretNoteType> {
    let selected: HashSet<(usize, usize)> = positions
        .iter()
        .filter(|p| p.is_selected)
        .map(|p| p.key())
        .collect();

    let mut types: Vec<FretNoteType> = positions
        .iter()
        .map(|p| classify(p, &selected, options.draw_capo))
        .collect();

    if options.chord_mode {
        suppress_higher_frets(positions, &mut types);
    }

    types
}

fn classify(position: &FretPosition, selected: &HashSet<(usize, usize)>, draw_capo: bool) -> FretNoteType {
    if !position.is_selected {
        return FretNoteType::None;
    }
    if !draw_capo {
        return FretNoteType::Default;
    }

    let (s, f) = position.key();
    // Neighbors off either edge of the board count as unselected
    let is_selected = |offset: isize| -> bool {
        s.checked_add_signed(offset)
            .map_or(false, |string| selected.contains(&(string, f)))
    };

    let prev = is_selected(-1);
    let next = is_selected(1);

    match (prev, next) {
        (false, false) => FretNoteType::Default,
        (false, true) if is_selected(2) => FretNoteType::CapoStart,
        (true, false) if is_selected(-2) => FretNoteType::CapoEnd,
        (true, true) => FretNoteType::Capo,
        _ => FretNoteType::Default,
    }
}

fn suppress_higher_frets(positions: &[FretPosition], types: &mut [FretNoteType]) {
    let mut lowest: HashMap<usize, usize> = HashMap::new();
    for p in positions.iter().filter(|p| p.is_selected) {
        lowest
            .entry(p.string_index)
            .and_modify(|fret| *fret = (*fret).min(p.fret_index))
            .or_insert(p.fret_index);
    }

    for (p, note_type) in positions.iter().zip(types.iter_mut()) {
        if p.is_selected && lowest.get(&p.string_index) != Some(&p.fret_index) {
            *note_type = FretNoteType::None;
        }
    }
}
