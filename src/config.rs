// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! The only setting is the exclusive upper bound on the x1 and y1 enumeration
//! indices. Without arguments the binary searches the default bound of 1000.

use crate::errors::SearchError;

/// Default exclusive bound on the outer enumeration indices.
pub const DEFAULT_BOUND: u64 = 1000;

/// Largest accepted bound.
pub const MAX_BOUND: u64 = u32::MAX as u64;

/// Validated search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    bound: u64,
}

impl SearchConfig {
    /// Create a configuration, rejecting bounds the engine cannot index.
    pub fn new(bound: u64) -> Result<Self, SearchError> {
        if bound > MAX_BOUND || usize::try_from(bound).is_err() {
            return Err(SearchError::BoundTooLarge {
                bound,
                max_allowed: MAX_BOUND,
            });
        }
        Ok(Self { bound })
    }

    /// Exclusive bound on x1code and y1code.
    pub fn bound(&self) -> u64 {
        self.bound
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bound() {
        assert_eq!(SearchConfig::default().bound(), DEFAULT_BOUND);
        assert_eq!(SearchConfig::new(3).unwrap().bound(), 3);
        assert_eq!(SearchConfig::new(0).unwrap().bound(), 0);
    }

    #[test]
    fn test_rejects_too_large() {
        assert!(SearchConfig::new(MAX_BOUND).is_ok());
        assert!(matches!(
            SearchConfig::new(MAX_BOUND + 1),
            Err(SearchError::BoundTooLarge { .. })
        ));
    }
}
