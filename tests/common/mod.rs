// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use polyinj_search::config::SearchConfig;
use polyinj_search::context::SearchContext;
use polyinj_search::polynomial::Evaluator;
use polyinj_search::search::{search_with, SearchOutcome};
use polyinj_search::state::Quadruple;
use polyinj_search::{Predicate, PredicateResult, SearchError};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// In-memory output sink that can be read after the context has taken
/// ownership of a clone.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output is UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(String::from).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer whose every write fails.
pub struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Context for `bound` writing into a fresh buffer.
pub fn buffered_context(bound: u64) -> (SearchContext, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let config = SearchConfig::new(bound).expect("valid bound");
    let ctx = SearchContext::with_output(config, Box::new(buffer.clone()));
    (ctx, buffer)
}

/// Run a full search and return the outcome, the context and the output lines.
pub fn run_search(
    bound: u64,
    evaluator: Evaluator,
) -> (Result<SearchOutcome, SearchError>, SearchContext, Vec<String>) {
    let (mut ctx, buffer) = buffered_context(bound);
    let outcome = search_with(&mut ctx, evaluator);
    (outcome, ctx, buffer.lines())
}

/// Expected progress line for a pair of codes.
pub fn progress_line(x1code: u64, x2code: u64) -> String {
    format!(
        "x1={} (x1code={}), x2={} (x2code={})",
        polyinj_search::rational::enumerate(x1code),
        x1code,
        polyinj_search::rational::enumerate(x2code),
        x2code
    )
}

/// Records every quadruple it sees, then fails so the search continues.
#[derive(Debug, Default)]
pub struct RecordQuadruples(pub Rc<RefCell<Vec<Quadruple>>>);

impl Predicate for RecordQuadruples {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        self.0.borrow_mut().push(ctx.quadruple());
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "RecordQuadruples"
    }
}
