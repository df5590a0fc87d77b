//! Secant method

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil};
use super::tolerances::open_rel_err;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("degenerate secant step: f(x) equal at both window ends, fx0={fx0}, fx1={fx1}")]
    DegenerateSecantStep { fx0: f64, fx1: f64 },
}


/// Secant configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method):
/// `p₂ = p₁ - f(p₁)·(p₁ - p₀)/(f(p₁) - f(p₀))`, shifting the two-point
/// window after each step.
///
/// Derivative-free counterpart of [`super::newton::newton`], with the same
/// convergence tests and the same failure modes.
///
/// # Arguments
/// - `func` : the function whose root is to be found
/// - `x0`   : first initial guess; finite and distinct from `x1`
/// - `x1`   : second initial guess; finite and distinct from `x0`
/// - `cfg`  : [`SecantCfg`] (`tol`, `epsilon`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : approximate root
/// - `f_root`              : function value at `root`
/// - `abs_err`             : |p₂ - p₁| of the final step
/// - `rel_err`             : `Some(2·abs_err / (|p₂| + tol))`
/// - `iterations`          : iterations performed (0 on early residual exit)
/// - `evaluations`         : total function evaluations
/// - `tolerance_satisfied` : which convergence test fired
/// - `stencil`             : the two window iterates that formed the last step
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`]         : `x0`/`x1` NaN/inf or equal
/// - [`SecantError::DegenerateSecantStep`] : `f(p₁) == f(p₀)` exactly; the
///   secant line is horizontal and no crossing exists
///
/// * Propagated via [`SecantError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::StepNotFinite`]       : update overflowed
/// - [`RootFindingError::IterationLimit`]      : budget exhausted
///
/// # Notes
/// - No sign-bracketing precondition; convergence is superlinear (~1.618)
///   near simple roots but not guaranteed. For guaranteed convergence use a
///   bracketed method.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let tol       = cfg.common.tol();
    let epsilon   = cfg.common.epsilon();
    let max_iter  = cfg.common.max_iter();
    let algorithm = Algorithm::Open(OpenFamily::Secant);
    let algo_name = algorithm.algorithm_name();

    let num_iter = match max_iter {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    // early exit: x0 is a root
    let fx0 = eval(x0)?;
    if fx0.abs() < epsilon {
        return Ok(RootFindingReport {
            root                : x0,
            f_root              : fx0,
            abs_err             : 0.0,
            rel_err             : None,
            iterations          : 0,
            evaluations         : evals,
            tolerance_satisfied : if fx0 == 0.0 {
                ToleranceSatisfied::ExactZero
            } else {
                ToleranceSatisfied::ResidualReached
            },
            stencil             : Stencil::singleton(x0),
            algorithm_name      : algo_name,
        });
    }
    // early exit: x1 is a root
    let fx1 = eval(x1)?;
    if fx1.abs() < epsilon {
        return Ok(RootFindingReport {
            root                : x1,
            f_root              : fx1,
            abs_err             : 0.0,
            rel_err             : None,
            iterations          : 0,
            evaluations         : evals,
            tolerance_satisfied : if fx1 == 0.0 {
                ToleranceSatisfied::ExactZero
            } else {
                ToleranceSatisfied::ResidualReached
            },
            stencil             : Stencil::singleton(x1),
            algorithm_name      : algo_name,
        });
    }

    let mut p0 = x0;
    let mut p1 = x1;
    let mut fp0 = fx0;
    let mut fp1 = fx1;

    for iter in 1..=num_iter {
        let denom = fp1 - fp0;
        if denom == 0.0 {
            return Err(SecantError::DegenerateSecantStep { fx0: fp0, fx1: fp1 });
        }

        let step = -fp1 * (p1 - p0) / denom;
        let p2 = p1 + step;
        if !p2.is_finite() {
            return Err(RootFindingError::StepNotFinite { x: p1, step }.into());
        }

        let abs_err = (p2 - p1).abs();
        let rel_err = open_rel_err(abs_err, p2, tol);
        let fp2 = eval(p2)?;

        let satisfied = if abs_err < tol {
            Some(ToleranceSatisfied::AbsErrReached)
        } else if rel_err < tol {
            Some(ToleranceSatisfied::RelErrReached)
        } else if fp2.abs() < epsilon {
            Some(ToleranceSatisfied::ResidualReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = satisfied {
            return Ok(RootFindingReport {
                root                : p2,
                f_root              : fp2,
                abs_err,
                rel_err             : Some(rel_err),
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied,
                stencil             : Stencil::doubleton(p0, p1),
                algorithm_name      : algo_name,
            });
        }

        p0  = p1;
        fp0 = fp1;
        p1  = p2;
        fp1 = fp2;
    }

    Err(RootFindingError::IterationLimit { max_iter: num_iter }.into())
}
