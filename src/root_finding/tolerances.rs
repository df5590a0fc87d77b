//! Relative-error measures for root-finding algorithms.
//!
//! Each method family scales the raw step `|xₙ - xₙ₋₁|` differently before
//! comparing against `tol`:
//!
//! - fixed-point iteration : `abs_err / (|p| + machine epsilon)`
//!     - the epsilon term guards the division when `p` is exactly zero
//! - open methods          : `2·abs_err / (|p| + tol)`
//! - Aitken acceleration   : `abs_err / (|p| + tol)`

/// Relative error for plain fixed-point iteration.
#[inline]
pub(crate) fn fixed_point_rel_err(abs_err: f64, p: f64) -> f64 {
    abs_err / (p.abs() + f64::EPSILON)
}

/// Relative error for the Newton-Raphson family and the secant method.
#[inline]
pub(crate) fn open_rel_err(abs_err: f64, p: f64, tol: f64) -> f64 {
    2.0 * abs_err / (p.abs() + tol)
}

/// Relative error for the Aitken-accelerated (Steffensen) methods.
#[inline]
pub(crate) fn aitken_rel_err(abs_err: f64, p: f64, tol: f64) -> f64 {
    abs_err / (p.abs() + tol)
}
