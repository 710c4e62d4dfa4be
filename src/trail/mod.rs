// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the search engine.
//!
//! Search state that must be undone on backtrack lives in slots owned by the
//! trail. Every write records the slot's previous value; rewinding to a
//! checkpoint replays those records in reverse, restoring the state as it was
//! when the checkpoint was taken.

pub mod trailed;

pub use trailed::Trailed;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    /// Slot that was written
    slot: usize,
    /// The value before the write
    old_value: u64,
}

/// Slot storage plus the undo log.
///
/// # Memory Model
///
/// Each `SearchContext` owns its own trail. Slots are registered once when
/// the context is built; the undo log grows and shrinks with search depth.
#[derive(Debug)]
pub struct Trail {
    /// Current value of every registered slot
    values: Vec<u64>,
    /// Undo log, oldest first
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Register a new slot with an initial value.
    pub fn register(&mut self, initial: u64) -> Trailed {
        let slot = self.values.len();
        self.values.push(initial);
        Trailed::new(slot)
    }

    /// Read the current value of a slot.
    pub fn get(&self, trailed: Trailed) -> u64 {
        self.values[trailed.slot()]
    }

    /// Write a slot, recording the old value for backtracking.
    pub fn set(&mut self, trailed: Trailed, value: u64) {
        let slot = trailed.slot();
        self.entries.push(TrailEntry {
            slot,
            old_value: self.values[slot],
        });
        self.values[slot] = value;
    }

    /// Current position, for a later [`rewind_to`](Self::rewind_to).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Undo every write made since `checkpoint`.
    ///
    /// Returns false (and does nothing) if the trail is already shorter than
    /// the checkpoint.
    pub fn rewind_to(&mut self, checkpoint: usize) -> bool {
        if checkpoint > self.entries.len() {
            return false;
        }
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                self.values[entry.slot] = entry.old_value;
            }
        }
        true
    }

    /// Number of writes currently recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
