// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for a counterexample to the injectivity of f(x, y) = x^7 + 3y^7
//! on the positive rationals.
//!
//! # Architecture
//!
//! The search pairs two pieces:
//!
//! - **Enumeration**: [`rational::enumerate`] maps an index to a positive
//!   rational by walking the Stern–Brocot tree along the index's bits.
//! - **Collision search**: four nested index ranges, x1 outermost, with
//!   x2 <= x1 and y2 <= y1. Each quadruple is mapped to (x1, y1) and
//!   (x2, y2); equal pairs are skipped; the first pair of equal values
//!   f(x1, y1) == f(x2, y2) is reported and ends the search.
//!
//! All arithmetic is exact ([`num_rational::BigRational`]).
//!
//! The nested loops are expressed as a sequence of predicates run by a
//! backtracking [`SearchEngine`]. Loop indices live on the [`Trail`], so
//! backtracking restores them; a progress line is printed each time the
//! engine backtracks out of an (x1, x2) pair.
//!
//! ```text
//! X1 code -> X2 code -> progress -> Y1 code -> Y2 code -> collision -> Suspend
//! ```
//!
//! # Example
//!
//! ```
//! use polyinj_search::config::SearchConfig;
//! use polyinj_search::context::SearchContext;
//! use polyinj_search::search::{search, SearchOutcome};
//!
//! let config = SearchConfig::new(3).unwrap();
//! let mut ctx = SearchContext::with_output(config, Box::new(std::io::sink()));
//! assert_eq!(search(&mut ctx).unwrap(), SearchOutcome::Exhausted);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod polynomial;
pub mod predicates;
pub mod rational;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use errors::SearchError;
pub use search::{search, Counterexample, SearchOutcome};
pub use trail::Trail;
