// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Floor-based integer primitives.
//!
//! Calendrical offsets are routinely negative (dates before an epoch), so
//! every calendar in this crate is written in terms of these helpers instead
//! of Rust's truncating `/` and `%`.

/// Floor division: the quotient rounded toward negative infinity.
#[inline]
pub const fn fldiv(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Floor modulo: `a − b·⌊a/b⌋`, in `[0, b)` for positive `b`.
#[inline]
pub const fn modulo(a: i64, b: i64) -> i64 {
    a - b * fldiv(a, b)
}

/// Adjusted modulo: like [`modulo`] but in `[1, b]` for positive `b`.
#[inline]
pub const fn amod(a: i64, b: i64) -> i64 {
    modulo(a - 1, b) + 1
}

/// Real-valued floor modulo, in `[0, b)` for positive `b`.
#[inline]
pub fn fmod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …` by Horner's rule.
#[inline]
pub fn poly(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}
