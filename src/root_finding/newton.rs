//! Newton-Raphson method, plain and multiplicity-accelerated

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil};
use super::tolerances::open_rel_err;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid convergence order: must be finite and >= 1. got {got}")]
    InvalidOrder { got: f64 },
}


/// Newton-Raphson configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);


/// Evaluates `f(x)` with a finite-check, counting the evaluation.
#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize,
) -> Result<f64, NewtonError>
where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}


fn newton_loop<F, G>(
    mut f: F,
    mut df: G,
    x0: f64,
    order: f64,
    algorithm: Algorithm,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let algo_name = algorithm.algorithm_name();

    let tol      = cfg.common.tol();
    let epsilon  = cfg.common.epsilon();
    let max_iter = cfg.common.max_iter();

    let num_iter = match max_iter {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations (f and f' both count)
    let mut evals: usize = 0;

    // early exit: x0 is already a root
    let mut p0 = x0;
    let mut fx = eval_fx_checked(&mut f, p0, &mut evals)?;
    if fx.abs() < epsilon {
        return Ok(RootFindingReport {
            root                : p0,
            f_root              : fx,
            abs_err             : 0.0,
            rel_err             : None,
            iterations          : 0,
            evaluations         : evals,
            tolerance_satisfied : if fx == 0.0 {
                ToleranceSatisfied::ExactZero
            } else {
                ToleranceSatisfied::ResidualReached
            },
            stencil             : Stencil::singleton(p0),
            algorithm_name      : algo_name,
        });
    }

    for iter in 1..=num_iter {
        // the derivative is not special-cased; a vanishing f'(p0) surfaces
        // as a non-finite iterate below
        let dfx = { evals += 1; df(p0) };

        let step = -order * fx / dfx;
        let p1 = p0 + step;
        if !p1.is_finite() {
            return Err(RootFindingError::StepNotFinite { x: p0, step }.into());
        }

        let abs_err = (p1 - p0).abs();
        let rel_err = open_rel_err(abs_err, p1, tol);
        let fx1 = eval_fx_checked(&mut f, p1, &mut evals)?;

        tracing::trace!(
            "{algo_name}: k={iter} p={p1} f(p)={fx1} abs_err={abs_err} rel_err={rel_err}"
        );

        let satisfied = if abs_err < tol {
            Some(ToleranceSatisfied::AbsErrReached)
        } else if rel_err < tol {
            Some(ToleranceSatisfied::RelErrReached)
        } else if fx1.abs() < epsilon {
            Some(ToleranceSatisfied::ResidualReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = satisfied {
            return Ok(RootFindingReport {
                root                : p1,
                f_root              : fx1,
                abs_err,
                rel_err             : Some(rel_err),
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied,
                stencil             : Stencil::singleton(p0),
                algorithm_name      : algo_name,
            });
        }

        p0 = p1;
        fx = fx1;
    }

    Err(RootFindingError::IterationLimit { max_iter: num_iter }.into())
}


/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method):
/// `p₁ = p₀ - f(p₀)/f'(p₀)`.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its first derivative, supplied by the caller
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (`tol`, `epsilon`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : approximate root
/// - `f_root`              : function value at `root`
/// - `abs_err`             : |p₁ - p₀| of the final step
/// - `rel_err`             : `Some(2·abs_err / (|p₁| + tol))`
/// - `iterations`          : iterations performed (0 on early residual exit)
/// - `evaluations`         : total evaluations of `func` and `dfunc`
/// - `tolerance_satisfied` : which convergence test fired
/// - `stencil`             : previous iterate used to form the last step
/// - `algorithm_name`      : "newton"
///
/// # Errors
/// - [`NewtonError::InvalidGuess`] : `x0` non-finite
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::StepNotFinite`]       : the update produced a
///   non-finite iterate, e.g. from `f'(p₀) == 0`
/// - [`RootFindingError::IterationLimit`]      : budget exhausted
///
/// # Notes
/// - Open method: no bracket or sign precondition, and convergence is
///   *local only*. Poor guesses can diverge or cycle; for guaranteed
///   convergence use a bracketed method (e.g. [`super::bisection`]).
/// - At a root of multiplicity > 1 convergence degrades to linear; see
///   [`newton_accelerated`].
pub fn newton<F, G>(
    func: F,
    dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    newton_loop(func, dfunc, x0, 1.0, Algorithm::Open(OpenFamily::Newton), cfg)
}


/// Newton-Raphson with the update scaled by a convergence order `M`:
/// `p₁ = p₀ - M·f(p₀)/f'(p₀)`.
///
/// Compensates for roots of multiplicity `M > 1`, where the unscaled method
/// converges only linearly. `order = 1` reduces exactly to [`newton`].
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its first derivative, supplied by the caller
/// - `x0`    : finite initial guess
/// - `order` : root multiplicity `M`; finite and >= 1
/// - `cfg`   : [`NewtonCfg`]
///
/// # Returns / Errors
/// Same contract as [`newton`], with `algorithm_name` set to
/// `"newton_accelerated"` and the additional
/// [`NewtonError::InvalidOrder`] when `order` is non-finite or below 1.
pub fn newton_accelerated<F, G>(
    func: F,
    dfunc: G,
    x0: f64,
    order: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }
    if !order.is_finite() || order < 1.0 {
        return Err(NewtonError::InvalidOrder { got: order });
    }

    newton_loop(
        func,
        dfunc,
        x0,
        order,
        Algorithm::Open(OpenFamily::NewtonAccelerated),
        cfg,
    )
}
