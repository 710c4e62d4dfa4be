// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact rational values.
//!
//! All arithmetic in the search is carried out on [`Rational`], an arbitrary
//! precision fraction that is kept in lowest terms with a positive denominator.
//! Equality on these values is exact, which is what collision detection needs.

pub mod enumerate;

pub use enumerate::enumerate;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Exact rational number, always reduced.
pub type Rational = BigRational;

/// Build a reduced rational from a numerator and denominator.
///
/// # Panics
///
/// Panics if `denom` is zero.
pub fn from_parts(numer: u64, denom: u64) -> Rational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Check that a rational is in canonical form: positive denominator and
/// coprime numerator and denominator.
pub fn is_canonical(value: &Rational) -> bool {
    *value.denom() > BigInt::zero() && value.numer().gcd(value.denom()).is_one()
}
