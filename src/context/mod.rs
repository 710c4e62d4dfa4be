// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context.
//!
//! The SearchContext is the single mutable value passed through every
//! predicate. It combines:
//! - the validated configuration
//! - the trail and the trailed enumeration codes
//! - statistics and the counterexample, if one was found
//! - the sink for progress and counterexample lines
//!
//! Independent contexts share nothing, so several searches (for example with
//! different bounds in tests) can run side by side.

use crate::config::SearchConfig;
use crate::search::Counterexample;
use crate::state::{Quadruple, SearchState, Slot, Statistics};
use crate::trail::Trail;
use std::fmt;
use std::io::{self, Write};

/// Search context combining configuration, trailed state and output.
///
/// # Example
///
/// ```
/// use polyinj_search::config::SearchConfig;
/// use polyinj_search::context::SearchContext;
/// use polyinj_search::state::Slot;
///
/// let config = SearchConfig::new(10).unwrap();
/// let mut ctx = SearchContext::with_output(config, Box::new(std::io::sink()));
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.set_code(Slot::X1, 7);
/// assert_eq!(ctx.code(Slot::X1), 7);
/// ctx.trail.rewind_to(checkpoint);
/// assert_eq!(ctx.code(Slot::X1), 0);
/// ```
pub struct SearchContext {
    /// Bound and other parameters
    pub config: SearchConfig,
    /// Trail for backtracking
    pub trail: Trail,
    /// Trailed enumeration codes
    pub state: SearchState,
    /// Counters updated by the predicates
    pub statistics: Statistics,
    /// Set by the collision check when f takes the same value twice
    pub counterexample: Option<Counterexample>,
    output: Box<dyn Write>,
    output_error: Option<io::Error>,
}

impl SearchContext {
    /// Create a context with the default bound, writing to stdout.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a context for `config`, writing to stdout.
    pub fn with_config(config: SearchConfig) -> Self {
        Self::with_output(config, Box::new(io::stdout()))
    }

    /// Create a context writing progress and counterexample lines to `output`.
    pub fn with_output(config: SearchConfig, output: Box<dyn Write>) -> Self {
        let mut trail = Trail::new();
        let state = SearchState::new(&mut trail);
        Self {
            config,
            trail,
            state,
            statistics: Statistics::new(),
            counterexample: None,
            output,
            output_error: None,
        }
    }

    /// Current code of `slot`.
    pub fn code(&self, slot: Slot) -> u64 {
        self.state.code(&self.trail, slot)
    }

    /// Set the code of `slot`, recording the old value on the trail.
    pub fn set_code(&mut self, slot: Slot, code: u64) {
        self.state.set_code(&mut self.trail, slot, code);
    }

    /// All four current codes.
    pub fn quadruple(&self) -> Quadruple {
        self.state.quadruple(&self.trail)
    }

    /// Write one line to the output sink.
    ///
    /// Only the first failure is kept; once output has failed, further lines
    /// are dropped and [`output_failed`](Self::output_failed) reports true.
    pub fn emit_line(&mut self, line: fmt::Arguments<'_>) {
        if self.output_error.is_some() {
            return;
        }
        let result = self
            .output
            .write_fmt(line)
            .and_then(|()| self.output.write_all(b"\n"));
        if let Err(err) = result {
            log::error!("Output failed: {}", err);
            self.output_error = Some(err);
        }
    }

    /// Flush the output sink, keeping the first failure.
    pub fn flush(&mut self) {
        if self.output_error.is_some() {
            return;
        }
        if let Err(err) = self.output.flush() {
            log::error!("Output flush failed: {}", err);
            self.output_error = Some(err);
        }
    }

    pub fn output_failed(&self) -> bool {
        self.output_error.is_some()
    }

    /// Take the recorded output failure, if any.
    pub fn take_output_error(&mut self) -> Option<io::Error> {
        self.output_error.take()
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchContext")
            .field("config", &self.config)
            .field("trail", &self.trail)
            .field("state", &self.state)
            .field("statistics", &self.statistics)
            .field("counterexample", &self.counterexample)
            .field("output_error", &self.output_error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that always fails.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sink_context() -> SearchContext {
        SearchContext::with_output(SearchConfig::default(), Box::new(io::sink()))
    }

    #[test]
    fn test_search_context_new() {
        let ctx = sink_context();
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.quadruple(), Quadruple::new(0, 0, 0, 0));
        assert!(ctx.counterexample.is_none());
        assert!(!ctx.output_failed());
    }

    #[test]
    fn test_independent_contexts() {
        let mut ctx1 = sink_context();
        let ctx2 = sink_context();

        ctx1.set_code(Slot::Y2, 9);
        assert_eq!(ctx1.code(Slot::Y2), 9);
        assert_eq!(ctx2.code(Slot::Y2), 0);
        assert_eq!(ctx2.trail.len(), 0);
    }

    #[test]
    fn test_output_failure_is_recorded_once() {
        let mut ctx = SearchContext::with_output(SearchConfig::default(), Box::new(BrokenPipe));
        ctx.emit_line(format_args!("first"));
        assert!(ctx.output_failed());
        ctx.emit_line(format_args!("second"));
        let err = ctx.take_output_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(!ctx.output_failed());
    }
}
