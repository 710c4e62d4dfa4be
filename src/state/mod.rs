// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! The search position is four enumeration codes, one per [`Slot`]. Codes
//! live on the trail so that backtracking restores them; rationals are
//! recomputed from the codes whenever they are needed.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::trail::{Trail, Trailed};
use std::fmt;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the four enumeration indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Slot {
    X1,
    X2,
    Y1,
    Y2,
}

impl Slot {
    /// The slot whose code bounds this one, if any (x2 <= x1, y2 <= y1).
    pub fn partner(self) -> Option<Slot> {
        match self {
            Slot::X2 => Some(Slot::X1),
            Slot::Y2 => Some(Slot::Y1),
            Slot::X1 | Slot::Y1 => None,
        }
    }

    /// Label used in progress output, e.g. `x1code`.
    pub fn code_label(self) -> &'static str {
        match self {
            Slot::X1 => "x1code",
            Slot::X2 => "x2code",
            Slot::Y1 => "y1code",
            Slot::Y2 => "y2code",
        }
    }
}

/// A full search position: one code per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quadruple {
    pub x1: u64,
    pub x2: u64,
    pub y1: u64,
    pub y2: u64,
}

impl Quadruple {
    pub fn new(x1: u64, x2: u64, y1: u64, y2: u64) -> Self {
        Self { x1, x2, y1, y2 }
    }
}

impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x1code={}, x2code={}, y1code={}, y2code={})",
            self.x1, self.x2, self.y1, self.y2
        )
    }
}

/// Trailed enumeration codes.
#[derive(Debug)]
pub struct SearchState {
    codes: [Trailed; Slot::COUNT],
}

impl SearchState {
    /// Register the four code slots on `trail`, all starting at 0.
    pub fn new(trail: &mut Trail) -> Self {
        Self {
            codes: [
                trail.register(0),
                trail.register(0),
                trail.register(0),
                trail.register(0),
            ],
        }
    }

    pub fn code(&self, trail: &Trail, slot: Slot) -> u64 {
        trail.get(self.codes[slot as usize])
    }

    pub fn set_code(&self, trail: &mut Trail, slot: Slot, code: u64) {
        trail.set(self.codes[slot as usize], code);
    }

    /// Snapshot of all four codes.
    pub fn quadruple(&self, trail: &Trail) -> Quadruple {
        Quadruple::new(
            self.code(trail, Slot::X1),
            self.code(trail, Slot::X2),
            self.code(trail, Slot::Y1),
            self.code(trail, Slot::Y2),
        )
    }
}
