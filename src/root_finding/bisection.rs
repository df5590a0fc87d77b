//! Bisection (Bolzano) method

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::signs::{same_sign, sign_change};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}


/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`]; `tol` is the absolute tolerance on the
///   bracket width. `epsilon` is unused by this method.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`bisection`] uses the analytic bound
///   [`theoretical_iter`] (the number of halvings guaranteed to shrink the
///   bracket below `tol`), capped at [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);


/// Midpoint of [a, b].
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Number of bisections guaranteed to bring the bracket width below `tol`:
/// `ceil(1 + log2((b - a) / tol))`, or `0` if the bracket is already narrow
/// enough. Deterministic and finite; bisection converges geometrically, so
/// no separate iteration budget is needed.
#[inline]
pub(crate) fn theoretical_iter(a: f64, b: f64, tol: f64) -> usize {
    let w0 = b - a;
    if w0 < tol {
        0
    } else {
        (1.0 + (w0 / tol).log2()).ceil() as usize
    }
}


/// Finds a root of a function on a sign-changing bracket using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on `[a, b]` and that
/// `func(a)` and `func(b)` have opposite signs (`f(a)·f(b) <= 0`),
/// guaranteeing a root exists within the interval.
///
/// # Arguments
/// - `func` : the function whose root is to be found
/// - `a`    : lower bound of the search interval; finite and less than `b`
/// - `b`    : upper bound of the search interval; finite and greater than `a`
/// - `cfg`  : [`BisectionCfg`] (`tol` = width tolerance, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : midpoint of the final bracket
/// - `f_root`              : function value at `root` (one extra evaluation)
/// - `abs_err`             : final bracket width
/// - `rel_err`             : `None` (no relative measure for this method)
/// - `iterations`          : halvings performed; 0 if an endpoint is an
///                           exact root
/// - `evaluations`         : total function evaluations
/// - `tolerance_satisfied` : [`ToleranceSatisfied::WidthReached`], or
///                           [`ToleranceSatisfied::ExactZero`] if a midpoint
///                           or endpoint evaluated to exactly 0
/// - `stencil`             : [`Stencil::Bracket`] with the final bounds
/// - `algorithm_name`      : "bisection"
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a` or `b` NaN/inf, or `a >= b`
/// - [`BisectionError::NoSignChange`]  : `func(a)·func(b) > 0`; detected
///   before any iteration, never retried
///
/// * Propagated via [`BisectionError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::IterationLimit`]      : only reachable with a
///   caller-supplied `max_iter` below the analytic bound
///
/// # Behavior
/// - Each step evaluates the midpoint `c`. An exact zero collapses the
///   bracket to `[c, c]`. Otherwise the half-bracket preserving the sign
///   change is kept; the right endpoint's function value is carried to
///   avoid re-evaluation. The branch decision reads only `sign(yb·yc)`, so
///   the `a`-side value is not tracked past the precondition check.
/// - On success the returned root is the midpoint of the final bracket,
///   evaluated once more for reporting.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let tol       = cfg.common.tol();
    let max_iter  = cfg.common.max_iter();
    let algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    let algo_name = algorithm.algorithm_name();

    let num_iter = match max_iter {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None    => theoretical_iter(a, b, tol).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let ya     = eval(a)?;
    let mut yb = eval(b)?;

    // endpoint is an exact root
    if ya == 0.0 || yb == 0.0 {
        let (root, f_root) = if ya == 0.0 { (a, ya) } else { (b, yb) };
        return Ok(RootFindingReport {
            root,
            f_root,
            abs_err             : 0.0,
            rel_err             : None,
            iterations          : 0,
            evaluations         : evals,
            tolerance_satisfied : ToleranceSatisfied::ExactZero,
            stencil             : Stencil::Bracket { bounds: [a, b] },
            algorithm_name      : algo_name,
        });
    }

    if !sign_change(ya, yb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    // bracket already narrower than the tolerance; the midpoint and its
    // function value are still computed for reporting, costing exactly one
    // extra evaluation
    if b - a < tol {
        let root   = midpoint(a, b);
        let f_root = eval(root)?;
        return Ok(RootFindingReport {
            root,
            f_root,
            abs_err             : b - a,
            rel_err             : None,
            iterations          : 0,
            evaluations         : evals,
            tolerance_satisfied : ToleranceSatisfied::WidthReached,
            stencil             : Stencil::Bracket { bounds: [a, b] },
            algorithm_name      : algo_name,
        });
    }

    for iter in 1..=num_iter {
        let c  = midpoint(a, b);
        let yc = eval(c)?;

        if yc == 0.0 {
            // exact hit: collapse the bracket to c
            a = c;
            b = c;
        } else if same_sign(yb, yc) {
            b  = c;
            yb = yc;
        } else {
            a = c;
        }

        if b - a < tol {
            let root   = midpoint(a, b);
            let f_root = eval(root)?;
            let tolerance_satisfied = if f_root == 0.0 {
                ToleranceSatisfied::ExactZero
            } else {
                ToleranceSatisfied::WidthReached
            };
            return Ok(RootFindingReport {
                root,
                f_root,
                abs_err             : b - a,
                rel_err             : None,
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied,
                stencil             : Stencil::Bracket { bounds: [a, b] },
                algorithm_name      : algo_name,
            });
        }
    }

    Err(RootFindingError::IterationLimit { max_iter: num_iter }.into())
}
