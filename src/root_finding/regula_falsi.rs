//! Regula falsi (false position) method

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::signs::{same_sign, sign_change};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}


/// Regula falsi configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`]; `tol` bounds the step size, `epsilon`
///   bounds the residual `|f(c)|`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`regula_falsi`] resolves it using
///   [`Algorithm::default_max_iter`] for [`BracketFamily::RegulaFalsi`],
///   or [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable. Unlike bisection,
///   this method's convergence has no analytic iteration bound, so a
///   budget is always in force.
#[derive(Debug, Copy, Clone)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for RegulaFalsiCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(RegulaFalsiCfg);


/// Finds a root of a function on a sign-changing bracket using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same sign-bracketing precondition as bisection, but the candidate is the
/// secant-line crossing of the interval rather than its midpoint, giving
/// faster convergence on well-behaved functions at the price of an
/// unbounded (budgeted) iteration count.
///
/// # Arguments
/// - `func` : the function whose root is to be found
/// - `a`    : lower bound of the search interval; finite and less than `b`
/// - `b`    : upper bound of the search interval; finite and greater than `a`
/// - `cfg`  : [`RegulaFalsiCfg`] (`tol`, `epsilon`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : last secant crossing `c`
/// - `f_root`              : function value at `root`
/// - `abs_err`             : step bound `min(|dx|, |c - a|)`, where `dx` is
///                           the raw secant step; the `|c - a|` clamp stops
///                           the measure creeping toward a stalled endpoint
/// - `rel_err`             : `None`
/// - `iterations`          : iterations performed
/// - `evaluations`         : total function evaluations
/// - `tolerance_satisfied` : [`ToleranceSatisfied::AbsErrReached`] (step),
///                           [`ToleranceSatisfied::ResidualReached`]
///                           (|f(c)| < epsilon), or
///                           [`ToleranceSatisfied::ExactZero`] (f(c) == 0)
/// - `stencil`             : [`Stencil::Bracket`] with the final bounds
/// - `algorithm_name`      : "regula_falsi"
///
/// # Errors
/// - [`RegulaFalsiError::InvalidBounds`] : `a` or `b` NaN/inf, or `a >= b`
/// - [`RegulaFalsiError::NoSignChange`]  : `func(a)·func(b) > 0`; detected
///   before any iteration, never retried
///
/// * Propagated via [`RegulaFalsiError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
/// - [`RootFindingError::IterationLimit`]      : budget exhausted without a
///   convergence test passing
///
/// # Notes
/// - The secant denominator `f(b) - f(a)` cannot vanish while the bracket
///   invariant holds: the retained endpoint values always have opposite
///   signs and exact zeros terminate immediately.
pub fn regula_falsi<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg,
) -> Result<RootFindingReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RegulaFalsiError::InvalidBounds { a, b });
    }

    let tol       = cfg.common.tol();
    let epsilon   = cfg.common.epsilon();
    let max_iter  = cfg.common.max_iter();
    let algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsi);
    let algo_name = algorithm.algorithm_name();

    let num_iter = match max_iter {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, RegulaFalsiError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let mut ya = eval(a)?;
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
        return Err(RegulaFalsiError::NoSignChange { a, b });
    }

    for iter in 1..=num_iter {
        // secant-line crossing; note the asymmetric roles of a and b
        let dx = yb * (b - a) / (yb - ya);
        let c  = b - dx;
        let ac = c - a;
        let yc = eval(c)?;

        if yc == 0.0 {
            return Ok(RootFindingReport {
                root                : c,
                f_root              : yc,
                abs_err             : dx.abs(),
                rel_err             : None,
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied : ToleranceSatisfied::ExactZero,
                stencil             : Stencil::Bracket { bounds: [a, b] },
                algorithm_name      : algo_name,
            });
        } else if same_sign(yb, yc) {
            b  = c;
            yb = yc;
        } else {
            a  = c;
            ya = yc;
        }

        let step = dx.abs().min(ac.abs());
        let satisfied = if step < tol {
            Some(ToleranceSatisfied::AbsErrReached)
        } else if yc.abs() < epsilon {
            Some(ToleranceSatisfied::ResidualReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = satisfied {
            return Ok(RootFindingReport {
                root                : c,
                f_root              : yc,
                abs_err             : step,
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
