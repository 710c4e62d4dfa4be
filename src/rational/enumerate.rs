// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of positive rationals by index.
//!
//! Index `n` is read as a path from the root `1/1` of the Stern–Brocot tree,
//! least significant bit first. A set bit adds the denominator into the
//! numerator (move right, towards larger values); a clear bit adds the
//! numerator into the denominator (move left). The path stops when no bits
//! remain, so index 0 is the root itself.
//!
//! Every index `n >= 1` ends on a set bit, so its value is strictly greater
//! than 1. Distinct indices give distinct paths and hence distinct values,
//! but rationals below 1 are never produced.
//!
//! # Example
//!
//! ```
//! use polyinj_search::rational::{enumerate, from_parts};
//!
//! assert_eq!(enumerate(0), from_parts(1, 1));
//! assert_eq!(enumerate(1), from_parts(2, 1));
//! assert_eq!(enumerate(2), from_parts(3, 2));
//! ```

use super::{from_parts, Rational};

/// Map an enumeration index to its rational.
///
/// Both terms grow at most like Fibonacci numbers in the number of bits, so
/// 64 steps stay well inside `u64`.
pub fn enumerate(n: u64) -> Rational {
    let (numer, denom) = stern_brocot_path(n);
    from_parts(numer, denom)
}

/// Follow the bit path of `n` and return the unreduced pair.
fn stern_brocot_path(mut n: u64) -> (u64, u64) {
    let mut numer = 1;
    let mut denom = 1;
    while n > 0 {
        if n % 2 == 1 {
            numer += denom;
        } else {
            denom += numer;
        }
        n /= 2;
    }
    (numer, denom)
}
