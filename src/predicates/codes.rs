// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Choice of one enumeration code.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Slot;

/// Chooses the code for one slot, in ascending order.
///
/// X1 and Y1 range over `0..bound`. X2 and Y2 range over `0..=partner`,
/// where the partner is X1 or Y1, so each unordered pair is visited once.
#[derive(Debug)]
pub struct CodePredicate {
    slot: Slot,
}

impl CodePredicate {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }

    /// Number of codes available for this slot in the current state.
    fn count(&self, ctx: &SearchContext) -> u64 {
        match self.slot.partner() {
            Some(partner) => ctx.code(partner) + 1,
            None => ctx.config.bound(),
        }
    }
}

impl Predicate for CodePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        // The configuration guarantees the bound fits in usize.
        match usize::try_from(self.count(ctx)) {
            Ok(0) | Err(_) => PredicateResult::Failure,
            Ok(count) => PredicateResult::Choices(count),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, choice: usize) -> PredicateResult {
        ctx.set_code(self.slot, choice as u64);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        self.slot.code_label()
    }
}
