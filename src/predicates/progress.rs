// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Progress line for each completed (x1, x2) pair.

use crate::context::SearchContext;
use crate::engine::{OpenClose, OpenClosePredicate};
use crate::rational::enumerate;
use crate::state::{Counters, Slot};

/// Prints `x1=<r> (x1code=<n>), x2=<r> (x2code=<n>)` when the search
/// backtracks past it, which happens once every (y1, y2) choice under the
/// current (x1, x2) has been exhausted.
///
/// If a counterexample stops the search, no line is printed for the pair
/// being searched at the time.
#[derive(Debug, Default)]
pub struct ProgressMarker;

impl OpenClose for ProgressMarker {
    fn open(&mut self, _ctx: &mut SearchContext) -> bool {
        true
    }

    fn close(&mut self, ctx: &mut SearchContext) {
        let x1code = ctx.code(Slot::X1);
        let x2code = ctx.code(Slot::X2);
        ctx.emit_line(format_args!(
            "x1={} (x1code={}), x2={} (x2code={})",
            enumerate(x1code),
            x1code,
            enumerate(x2code),
            x2code
        ));
        ctx.flush();
        ctx.statistics.increment_counter(Counters::ProgressMarkers);
        log::trace!("Finished x1code={} x2code={}", x1code, x2code);
    }
}

/// The progress marker as a predicate.
pub fn progress_predicate() -> OpenClosePredicate<ProgressMarker> {
    OpenClosePredicate::new("Progress", ProgressMarker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::engine::{Predicate, PredicateResult};
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_close_prints_current_pair() {
        let buffer = Shared::default();
        let mut ctx = SearchContext::with_output(SearchConfig::default(), Box::new(buffer.clone()));
        ctx.set_code(Slot::X1, 2);
        ctx.set_code(Slot::X2, 1);

        let mut pred = progress_predicate();
        assert_eq!(pred.try_pred(&mut ctx), PredicateResult::Choices(2));
        assert_eq!(pred.retry_pred(&mut ctx, 0), PredicateResult::Success);
        assert!(buffer.0.borrow().is_empty());

        assert_eq!(pred.retry_pred(&mut ctx, 1), PredicateResult::Failure);
        let text = String::from_utf8(buffer.0.borrow().clone()).unwrap();
        assert_eq!(text, "x1=3/2 (x1code=2), x2=2 (x2code=1)\n");
        assert_eq!(ctx.statistics.get(Counters::ProgressMarkers), 1);
    }
}
