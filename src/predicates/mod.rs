// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The collision search is the predicate sequence
//!
//! ```text
//! X1 code -> X2 code -> progress marker -> Y1 code -> Y2 code -> collision -> Suspend
//! ```
//!
//! # Organization
//!
//! - `codes`: CodePredicate, one enumeration index per slot
//! - `progress`: the progress line printed after each (x1, x2) pair
//! - `collision`: skip rule, evaluation and equality check
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod codes;
pub mod collision;
pub mod progress;

pub use codes::CodePredicate;
pub use collision::CollisionPredicate;
pub use progress::{progress_predicate, ProgressMarker};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing the engine to try every remaining choice. Used as
/// the terminal predicate when a sequence should be explored exhaustively.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Stops the search with the current state intact. The collision search
/// ends with this predicate, so reaching it means a counterexample was found.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
