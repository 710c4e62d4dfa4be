// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Collision check on the current quadruple.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::polynomial::{self, Evaluator};
use crate::search::{check_quadruple, QuadrupleOutcome};
use crate::state::Counters;
use std::fmt;

/// Innermost step of the search.
///
/// Fails for reflexive and non-colliding quadruples, so the engine moves on
/// to the next y2 code. On a collision it records the counterexample, prints
/// it, and succeeds into the terminal predicate.
///
/// If output has already failed the predicate suspends, stopping the search
/// so the error can be reported.
pub struct CollisionPredicate {
    evaluator: Evaluator,
}

impl CollisionPredicate {
    /// Check collisions of x^7 + 3y^7.
    pub fn new() -> Self {
        Self::with_evaluator(polynomial::evaluate)
    }

    /// Check collisions of another two-variable function.
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }
}

impl fmt::Debug for CollisionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionPredicate").finish_non_exhaustive()
    }
}

impl Default for CollisionPredicate {
    fn default() -> Self {
        Self::new()
    }
}

impl Predicate for CollisionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        if ctx.output_failed() {
            return PredicateResult::Suspend;
        }
        let quadruple = ctx.quadruple();
        ctx.statistics.increment_counter(Counters::Quadruples);

        match check_quadruple(quadruple, self.evaluator) {
            QuadrupleOutcome::Skipped => {
                ctx.statistics.increment_counter(Counters::Skipped);
                PredicateResult::Failure
            }
            QuadrupleOutcome::Distinct => {
                ctx.statistics.increment_counter(Counters::Evaluations);
                PredicateResult::Failure
            }
            QuadrupleOutcome::Collision(counterexample) => {
                ctx.statistics.increment_counter(Counters::Evaluations);
                log::info!("Collision at {}", quadruple);
                ctx.emit_line(format_args!("Counterexample found! {}", counterexample));
                ctx.flush();
                ctx.counterexample = Some(counterexample);
                PredicateResult::Success
            }
        }
    }

    fn name(&self) -> &str {
        "Collision"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::rational::Rational;
    use crate::state::Slot;
    use std::io;

    fn first_coordinate(x: &Rational, _y: &Rational) -> Rational {
        x.clone()
    }

    fn context() -> SearchContext {
        SearchContext::with_output(SearchConfig::default(), Box::new(io::sink()))
    }

    fn set_codes(ctx: &mut SearchContext, codes: [u64; 4]) {
        ctx.set_code(Slot::X1, codes[0]);
        ctx.set_code(Slot::X2, codes[1]);
        ctx.set_code(Slot::Y1, codes[2]);
        ctx.set_code(Slot::Y2, codes[3]);
    }

    #[test]
    fn test_reflexive_quadruple_never_collides() {
        let mut ctx = context();
        let mut pred = CollisionPredicate::with_evaluator(first_coordinate);
        for code in 0..10 {
            set_codes(&mut ctx, [code, code, code + 1, code + 1]);
            assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Failure);
        }
        assert!(ctx.counterexample.is_none());
        assert_eq!(ctx.statistics.get(Counters::Skipped), 10);
        assert_eq!(ctx.statistics.get(Counters::Evaluations), 0);
    }

    #[test]
    fn test_distinct_values_fail() {
        let mut ctx = context();
        let mut pred = CollisionPredicate::new();
        set_codes(&mut ctx, [1, 0, 1, 0]);
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Failure);
        assert_eq!(ctx.statistics.get(Counters::Evaluations), 1);
    }

    #[test]
    fn test_collision_records_counterexample() {
        let mut ctx = context();
        let mut pred = CollisionPredicate::with_evaluator(first_coordinate);
        set_codes(&mut ctx, [0, 0, 1, 0]);
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Success);
        let counterexample = ctx.counterexample.as_ref().unwrap();
        assert_eq!(counterexample.to_string(), "f(1,2) == f(1,1)");
    }
}
