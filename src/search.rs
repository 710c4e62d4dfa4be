// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The collision search.
//!
//! Visits every quadruple (x1code, x2code, y1code, y2code) with
//! x2code <= x1code < bound and y2code <= y1code < bound, in that nesting
//! order, ascending. For each one the four codes are mapped to rationals,
//! the reflexive case is skipped, and f(x1, y1) is compared with f(x2, y2).
//! The first collision ends the search.

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::errors::SearchError;
use crate::polynomial::{self, Evaluator};
use crate::predicates::{progress_predicate, CodePredicate, CollisionPredicate, SuspendPredicate};
use crate::rational::{enumerate, Rational};
use crate::state::{Quadruple, Slot};
use std::fmt;

/// Two distinct pairs with the same function value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterexample {
    pub codes: Quadruple,
    pub x1: Rational,
    pub y1: Rational,
    pub x2: Rational,
    pub y2: Rational,
    /// The shared value f(x1, y1) == f(x2, y2).
    pub value: Rational,
}

impl fmt::Display for Counterexample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f({},{}) == f({},{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// What the search body found for one quadruple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuadrupleOutcome {
    /// x1 == x2 and y1 == y2; nothing to compare.
    Skipped,
    /// Values differ.
    Distinct,
    Collision(Counterexample),
}

/// How a completed search ended. Neither case is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Counterexample(Counterexample),
    /// Every quadruple within the bound was checked without a collision.
    Exhausted,
}

/// Check one quadruple of codes against `evaluator`.
///
/// # Example
///
/// ```
/// use polyinj_search::polynomial::evaluate;
/// use polyinj_search::search::{check_quadruple, QuadrupleOutcome};
/// use polyinj_search::state::Quadruple;
///
/// assert_eq!(check_quadruple(Quadruple::new(3, 3, 5, 5), evaluate), QuadrupleOutcome::Skipped);
/// assert_eq!(check_quadruple(Quadruple::new(3, 2, 5, 5), evaluate), QuadrupleOutcome::Distinct);
/// ```
pub fn check_quadruple(codes: Quadruple, evaluator: Evaluator) -> QuadrupleOutcome {
    let x1 = enumerate(codes.x1);
    let x2 = enumerate(codes.x2);
    let y1 = enumerate(codes.y1);
    let y2 = enumerate(codes.y2);

    if x1 == x2 && y1 == y2 {
        return QuadrupleOutcome::Skipped;
    }

    let f1 = evaluator(&x1, &y1);
    let f2 = evaluator(&x2, &y2);
    if f1 != f2 {
        return QuadrupleOutcome::Distinct;
    }
    QuadrupleOutcome::Collision(Counterexample {
        codes,
        x1,
        y1,
        x2,
        y2,
        value: f1,
    })
}

/// Build the engine for the collision search of `evaluator`.
pub fn search_engine(evaluator: Evaluator) -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(CodePredicate::new(Slot::X1)))
        .add(Box::new(CodePredicate::new(Slot::X2)))
        .add(Box::new(progress_predicate()))
        .add(Box::new(CodePredicate::new(Slot::Y1)))
        .add(Box::new(CodePredicate::new(Slot::Y2)))
        .add(Box::new(CollisionPredicate::with_evaluator(evaluator)))
        .terminal(Box::new(SuspendPredicate))
        .build()
}

/// Search for a collision of x^7 + 3y^7 within the context's bound.
pub fn search(ctx: &mut SearchContext) -> Result<SearchOutcome, SearchError> {
    search_with(ctx, polynomial::evaluate)
}

/// Search for a collision of `evaluator` within the context's bound.
///
/// Progress and counterexample lines go to the context's output. Returns an
/// error only if writing that output failed.
pub fn search_with(
    ctx: &mut SearchContext,
    evaluator: Evaluator,
) -> Result<SearchOutcome, SearchError> {
    log::info!("Searching codes below {}", ctx.config.bound());
    ctx.counterexample = None;

    let engine = search_engine(evaluator);
    if let Some(engine) = engine.search(ctx) {
        let (tries, retries) = engine.statistics();
        log::debug!("Search stopped after {} tries, {} retries", tries, retries);
    }
    ctx.flush();
    log::info!("Statistics: {}", ctx.statistics);

    if let Some(err) = ctx.take_output_error() {
        return Err(SearchError::Output(err));
    }
    Ok(match ctx.counterexample.clone() {
        Some(counterexample) => SearchOutcome::Counterexample(counterexample),
        None => SearchOutcome::Exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::from_parts;

    fn sum(x: &Rational, y: &Rational) -> Rational {
        x + y
    }

    #[test]
    fn test_skip_rule_for_equal_codes() {
        for code in 0..20 {
            let outcome = check_quadruple(Quadruple::new(code, code, 7, 7), sum);
            assert_eq!(outcome, QuadrupleOutcome::Skipped);
        }
    }

    #[test]
    fn test_polynomial_distinct_on_small_codes() {
        for x1 in 0..4 {
            for x2 in 0..=x1 {
                for y1 in 0..4 {
                    for y2 in 0..=y1 {
                        let outcome =
                            check_quadruple(Quadruple::new(x1, x2, y1, y2), polynomial::evaluate);
                        assert!(
                            !matches!(outcome, QuadrupleOutcome::Collision(_)),
                            "unexpected collision at {:?}",
                            (x1, x2, y1, y2)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_collision_details() {
        // enumerate(1) + enumerate(0) == enumerate(0) + enumerate(1)
        let outcome = check_quadruple(Quadruple::new(1, 0, 0, 1), sum);
        match outcome {
            QuadrupleOutcome::Collision(c) => {
                assert_eq!(c.x1, from_parts(2, 1));
                assert_eq!(c.y1, from_parts(1, 1));
                assert_eq!(c.x2, from_parts(1, 1));
                assert_eq!(c.y2, from_parts(2, 1));
                assert_eq!(c.value, from_parts(3, 1));
                assert_eq!(c.codes, Quadruple::new(1, 0, 0, 1));
                assert_eq!(c.to_string(), "f(2,1) == f(1,2)");
            }
            other => panic!("expected collision, got {:?}", other),
        }
    }
}
