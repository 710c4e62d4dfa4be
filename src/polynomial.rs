// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The polynomial under test: f(x, y) = x^7 + 3y^7.
//!
//! The function is conjectured to be injective on the rationals. The search
//! looks for two distinct pairs with the same value.

use crate::rational::Rational;

/// Signature of a two-variable function checked for collisions.
pub type Evaluator = fn(&Rational, &Rational) -> Rational;

/// Raise `v` to the seventh power with four multiplications:
/// v^2, v^3 = v^2·v, v^6 = v^3·v^3, v^7 = v^6·v.
pub fn seventh_power(v: &Rational) -> Rational {
    let square = v * v;
    let cube = &square * v;
    let sixth = &cube * &cube;
    sixth * v
}

/// Evaluate x^7 + 3y^7 exactly.
///
/// The three copies of y^7 are added one at a time rather than multiplied
/// by 3.
pub fn evaluate(x: &Rational, y: &Rational) -> Rational {
    let x_seventh = seventh_power(x);
    let y_seventh = seventh_power(y);
    x_seventh + &y_seventh + &y_seventh + &y_seventh
}
