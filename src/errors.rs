// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuring and running the search.
//!
//! Finding no counterexample is not an error; see
//! [`SearchOutcome`](crate::search::SearchOutcome).

use std::fmt;
use std::io;

/// Errors that can occur before or during the search.
#[derive(Debug)]
pub enum SearchError {
    /// The bound exceeds the largest supported index range.
    BoundTooLarge { bound: u64, max_allowed: u64 },

    /// Writing a progress or counterexample line failed.
    Output(io::Error),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::BoundTooLarge { bound, max_allowed } => {
                write!(f, "Bound {} exceeds max {}", bound, max_allowed)
            }
            SearchError::Output(err) => write!(f, "Cannot write search output: {}", err),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Output(err) => Some(err),
            _ => None,
        }
    }
}
