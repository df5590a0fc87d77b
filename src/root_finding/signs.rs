//! Sign utilities for bracketing root-finding algorithms.
//! - `same_sign`   : `true` if values share the same sign
//! - `sign_change` : `true` if a bracket [a, b] contains a sign change,
//!                   i.e. f(a)·f(b) <= 0 without evaluating the product

/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() == y.is_sign_positive()
}

/// Returns `true` if `fa` and `fb` admit a root between them.
///
/// Equivalent to `fa * fb <= 0` but immune to underflow of the product;
/// an exact zero at either endpoint counts as a sign change.
#[inline]
pub(crate) fn sign_change(fa: f64, fb: f64) -> bool {
    fa == 0.0 || fb == 0.0 || !same_sign(fa, fb)
}
