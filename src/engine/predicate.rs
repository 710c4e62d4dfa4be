// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the backtracking search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! is a step of the search: it may pick among choices, check a condition,
//! or produce output. Predicates succeed, fail, or suspend the search.
//!
//! # Example
//!
//! ```
//! use polyinj_search::engine::{Predicate, PredicateResult};
//! use polyinj_search::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct TwoWays;
//!
//! impl Predicate for TwoWays {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TwoWays"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate has no (more) valid choices. Backtrack.
    Failure,

    /// Predicate has `n` choices; the engine calls retry_pred for each of 0..n.
    Choices(usize),

    /// Stop the search, leaving the search state in place for the caller.
    Suspend,
}

/// A predicate that ends a sequence: it never returns Success.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first reaching the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for choice 0, then 1, ...
///    each time the search backtracks into this predicate
///
/// # Trail Integration
///
/// Writes made through the trail are undone before each retry and when the
/// engine backtracks past the predicate.
pub trait Predicate: Debug {
    /// Try this predicate when the search first reaches it.
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// May return Success or Failure only.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        choice: usize,
    ) -> PredicateResult {
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Something with an effect on the way into a sub-search and another on the
/// way out.
pub trait OpenClose {
    /// Called when the search passes forward. Returning false fails the
    /// predicate.
    fn open(&mut self, ctx: &mut SearchContext) -> bool;

    /// Called when the search backtracks over the predicate, after every
    /// later predicate has exhausted its choices.
    fn close(&mut self, ctx: &mut SearchContext);
}

/// Wraps an [`OpenClose`] as a two-choice predicate: choice 0 continues the
/// search, choice 1 runs `close` and fails.
#[derive(Debug)]
pub struct OpenClosePredicate<T: OpenClose> {
    open_close: T,
    name: String,
}

impl<T: OpenClose> OpenClosePredicate<T> {
    pub fn new(name: &str, open_close: T) -> Self {
        OpenClosePredicate {
            open_close,
            name: String::from(name),
        }
    }
}

impl<T: OpenClose + Debug> Predicate for OpenClosePredicate<T> {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        if self.open_close.open(ctx) {
            PredicateResult::Choices(2)
        } else {
            PredicateResult::Failure
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        choice: usize,
    ) -> PredicateResult {
        if choice == 0 {
            PredicateResult::Success
        } else {
            self.open_close.close(ctx);
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}
