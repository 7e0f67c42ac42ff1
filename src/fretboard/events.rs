//! Change notifications
//!
//! Listeners are plain closures called synchronously, in subscription order,
//! once per change. Nothing is batched: three setter calls produce three
//! events.

use serde::Serialize;
use std::fmt;

use crate::models::{Direction, FretPosition};

/// A change on the fretboard, carrying only the data that changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum FretboardEvent {
    /// Tuning, start fret or fret count was set; the grid was rebuilt
    GridChanged(Vec<FretPosition>),
    DirectionChanged(Direction),
    /// A selection operation finished
    SelectionChanged(Vec<FretPosition>),
}

impl FretboardEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            FretboardEvent::GridChanged(_) => "gridChanged",
            FretboardEvent::DirectionChanged(_) => "directionChanged",
            FretboardEvent::SelectionChanged(_) => "selectionChanged",
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&FretboardEvent) + Send>;

#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns false if the id was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: &FretboardEvent) {
        log::trace!("dispatching {} to {} listener(s)", event.kind(), self.entries.len());
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
