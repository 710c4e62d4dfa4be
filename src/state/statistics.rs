// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the predicates as
//! the search visits quadruples.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Quadruples reached by the collision check.
    Quadruples,
    /// Quadruples skipped because both pairs are equal.
    Skipped,
    /// Quadruples where both function values were computed.
    Evaluations,
    /// Progress lines written.
    ProgressMarkers,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{:?}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}
