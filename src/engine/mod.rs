// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search engine.
//!
//! The engine runs a fixed sequence of predicates, depth first. Nested loops
//! become a chain of predicates that each return `Choices(n)`: the engine
//! takes choice 0 of every predicate, and on failure steps back to the most
//! recent predicate with choices left. The trail is rewound to the frame's
//! checkpoint before every call, so trailed state always matches the frame
//! being executed.
//!
//! 1. Call try_pred on each predicate
//! 2. If Success: push the next predicate
//! 3. If Choices(n): call retry_pred(0..n) one at a time
//! 4. If Failure: pop back to the previous frame
//! 5. If Suspend: return the engine to the caller
//!
//! # Example
//!
//! ```
//! use polyinj_search::config::SearchConfig;
//! use polyinj_search::context::SearchContext;
//! use polyinj_search::engine::EngineBuilder;
//! use polyinj_search::predicates::{CodePredicate, SuspendPredicate};
//! use polyinj_search::state::Slot;
//!
//! let config = SearchConfig::new(4).unwrap();
//! let mut ctx = SearchContext::with_output(config, Box::new(std::io::sink()));
//! let engine = EngineBuilder::new()
//!     .add(Box::new(CodePredicate::new(Slot::X1)))
//!     .add(Box::new(CodePredicate::new(Slot::X2)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // The first pair is (0, 0): each code predicate is tried once and
//! // retried once for choice 0, then the search suspends.
//! let engine = engine.search(&mut ctx).expect("suspended");
//! assert_eq!((ctx.code(Slot::X1), ctx.code(Slot::X2)), (0, 0));
//! assert_eq!(engine.statistics(), (3, 2));
//! ```

pub mod predicate;

pub use predicate::{OpenClose, OpenClosePredicate, Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Whether a frame is being called for the first time or iterating choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Call,
    Choice { next: usize, count: usize },
}

/// Execution state of one predicate on the stack.
#[derive(Debug)]
struct Frame {
    predicate_index: usize,
    mode: Mode,
    /// Trail length to restore before running this frame.
    checkpoint: usize,
}

impl Frame {
    fn call(predicate_index: usize, checkpoint: usize) -> Self {
        Self {
            predicate_index,
            mode: Mode::Call,
            checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    predicates: Vec<Box<dyn Predicate>>,
    stack: Vec<Frame>,
    /// Statistics: number of try_pred calls.
    try_count: u64,
    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which requires a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search from the beginning.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if a predicate suspended, with the search state left
    ///   as it was at the suspension
    /// - `None` if every choice was exhausted
    ///
    /// # Panics
    ///
    /// Panics if the last predicate returns Success (the sequence must end
    /// with a terminal predicate), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }
        self.stack.push(Frame::call(0, ctx.trail.checkpoint()));
        self.run(ctx)
    }

    fn run(mut self, ctx: &mut SearchContext) -> Option<Self> {
        while let Some(frame) = self.stack.last_mut() {
            ctx.trail.rewind_to(frame.checkpoint);
            let index = frame.predicate_index;

            let result = match frame.mode {
                Mode::Call => {
                    self.try_count += 1;
                    self.predicates[index].try_pred(ctx)
                }
                Mode::Choice { next, count } if next < count => {
                    frame.mode = Mode::Choice {
                        next: next + 1,
                        count,
                    };
                    self.retry_count += 1;
                    match self.predicates[index].retry_pred(ctx, next) {
                        result @ (PredicateResult::Choices(_) | PredicateResult::Suspend) => {
                            panic!(
                                "{}::retry_pred returned invalid result: {:?}",
                                self.predicates[index].name(),
                                result
                            );
                        }
                        result => result,
                    }
                }
                Mode::Choice { .. } => {
                    self.stack.pop();
                    continue;
                }
            };

            match result {
                PredicateResult::Success => self.push(ctx, index + 1),
                PredicateResult::Failure => {
                    // In choice mode the frame stays and its next choice runs.
                    if let Some(Frame {
                        mode: Mode::Call, ..
                    }) = self.stack.last()
                    {
                        self.stack.pop();
                    }
                }
                PredicateResult::Choices(count) => {
                    let checkpoint = ctx.trail.checkpoint();
                    if let Some(frame) = self.stack.last_mut() {
                        frame.mode = Mode::Choice { next: 0, count };
                        frame.checkpoint = checkpoint;
                    }
                }
                PredicateResult::Suspend => return Some(self),
            }
        }
        None
    }

    fn push(&mut self, ctx: &SearchContext, predicate_index: usize) {
        if predicate_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 Sequences must terminate with a FAIL or SUSPEND predicate."
            );
        }
        self.stack
            .push(Frame::call(predicate_index, ctx.trail.checkpoint()));
    }

    /// Returns (try_count, retry_count): how many times predicates were
    /// tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a predicate sequence that is guaranteed to end with a terminal
/// predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate and finish the sequence.
    pub fn terminal<T: TerminalPredicate + 'static>(self, predicate: Box<T>) -> TerminatedBuilder {
        let mut predicates = self.predicates;
        predicates.push(predicate);
        TerminatedBuilder { predicates }
    }
}

/// A complete predicate sequence.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
