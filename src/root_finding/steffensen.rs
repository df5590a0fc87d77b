//! Steffensen acceleration: Aitken Δ² over fixed-point or Newton-Raphson
//! inner steps

use super::algorithms::{Algorithm, FixedPointFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil};
use super::tolerances::aitken_rel_err;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum SteffensenError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: p0={p0} must be finite")]
    InvalidGuess { p0: f64 },

    #[error("division by zero: Aitken denominator r2 - 2*r1 + r0 = 0 at r0={r0}")]
    AitkenDenominatorZero { r0: f64 },

    #[error("division by zero: Newton-Raphson denominator f'({x}) = 0")]
    DerivativeZero { x: f64 },
}


/// Steffensen configuration, shared by [`steffensen`] and
/// [`steffensen_newton`].
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - If `common.max_iter` is `None`, the solvers resolve it using
///   [`Algorithm::default_max_iter`], or [`GLOBAL_MAX_ITER_FALLBACK`]
///   if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct SteffensenCfg {
    common: CommonCfg,
}
impl SteffensenCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for SteffensenCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SteffensenCfg);


/// Aitken Δ² estimate from three consecutive iterates.
///
/// The caller must reject a zero denominator `r2 - 2·r1 + r0` first.
#[inline]
fn aitken_estimate(r0: f64, r1: f64, r2: f64, denom: f64) -> f64 {
    r0 - (r1 - r0).powi(2) / denom
}


/// Estimates a fixed point of `g` using Steffensen's method: two ordinary
/// fixed-point applications per outer iteration, accelerated with
/// [Aitken's Δ²](https://en.wikipedia.org/wiki/Aitken%27s_delta-squared_process).
///
/// Each outer iteration computes `r1 = g(p0)`, `r2 = g(r1)` and the
/// accelerated estimate `r_est = p0 - (r1 - p0)² / (r2 - 2·r1 + p0)`.
///
/// # Arguments
/// - `g`   : fixed-point iteration function
/// - `p0`  : finite initial guess
/// - `cfg` : [`SteffensenCfg`] (`tol`, `epsilon`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : accelerated estimate `r_est`
/// - `f_root`              : `g(r_est)`
/// - `abs_err`             : |p₀ - r_est| of the final outer iteration
/// - `rel_err`             : `Some(abs_err / (|r_est| + tol))`
/// - `iterations`          : outer iterations performed
/// - `evaluations`         : total evaluations of `g` (three per iteration)
/// - `tolerance_satisfied` : which convergence test fired
/// - `stencil`             : the triple `(r0, r1, r2)` behind the last estimate
/// - `algorithm_name`      : "steffensen"
///
/// # Errors
/// - [`SteffensenError::InvalidGuess`]          : `p0` non-finite
/// - [`SteffensenError::AitkenDenominatorZero`] : `r2 - 2·r1 + r0 == 0`,
///   detected the moment it occurs; terminal, and distinct from exhausting
///   the iteration budget. Occurs in particular when the inner iterates have
///   already landed exactly on the fixed point.
///
/// * Propagated via [`SteffensenError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `g(x)` produced NaN/inf
/// - [`RootFindingError::IterationLimit`]      : budget exhausted without
///   the denominator ever vanishing
pub fn steffensen<G>(
    mut g: G,
    p0: f64,
    cfg: SteffensenCfg,
) -> Result<RootFindingReport, SteffensenError>
where G: FnMut(f64) -> f64 {

    if !p0.is_finite() {
        return Err(SteffensenError::InvalidGuess { p0 });
    }

    let tol       = cfg.common.tol();
    let epsilon   = cfg.common.epsilon();
    let max_iter  = cfg.common.max_iter();
    let algorithm = Algorithm::FixedPoint(FixedPointFamily::Steffensen);
    let algo_name = algorithm.algorithm_name();

    let num_iter = match max_iter {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps g, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SteffensenError> {
        let gx = { evals += 1; g(x) };
        if !gx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx: gx }.into());
        }
        Ok(gx)
    };

    let mut r0 = p0;
    for iter in 1..=num_iter {
        let r1 = eval(r0)?;
        let r2 = eval(r1)?;

        let denom = r2 - 2.0 * r1 + r0;
        if denom == 0.0 {
            return Err(SteffensenError::AitkenDenominatorZero { r0 });
        }

        let r_est   = aitken_estimate(r0, r1, r2, denom);
        let abs_err = (r0 - r_est).abs();
        let rel_err = aitken_rel_err(abs_err, r_est, tol);
        let g_est   = eval(r_est)?;

        tracing::trace!(
            "{algo_name}: k={iter} r_est={r_est} g(r_est)={g_est} abs_err={abs_err} rel_err={rel_err}"
        );

        let satisfied = if abs_err < tol {
            Some(ToleranceSatisfied::AbsErrReached)
        } else if rel_err < tol {
            Some(ToleranceSatisfied::RelErrReached)
        } else if g_est.abs() < epsilon {
            Some(ToleranceSatisfied::ResidualReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = satisfied {
            return Ok(RootFindingReport {
                root                : r_est,
                f_root              : g_est,
                abs_err,
                rel_err             : Some(rel_err),
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied,
                stencil             : Stencil::tripleton(r0, r1, r2),
                algorithm_name      : algo_name,
            });
        }

        r0 = r_est;
    }

    Err(RootFindingError::IterationLimit { max_iter: num_iter }.into())
}


/// Steffensen acceleration over Newton-Raphson inner steps: each outer
/// iteration performs two Newton updates
/// `rⱼ = rⱼ₋₁ - f(rⱼ₋₁)/f'(rⱼ₋₁)` and accelerates the triple with
/// Aitken's Δ².
///
/// # Arguments
/// - `f`   : function whose root is sought
/// - `df`  : its first derivative, supplied by the caller
/// - `p0`  : finite initial guess
/// - `cfg` : [`SteffensenCfg`] (`tol`, `epsilon`, optional `max_iter`)
///
/// # Returns
/// Same report shape as [`steffensen`], with `f_root = f(r_est)` and
/// `algorithm_name` set to `"steffensen_newton"`.
///
/// # Errors
/// Two distinct division-by-zero conditions, each detected the moment it
/// occurs:
/// - [`SteffensenError::DerivativeZero`]        : `f'(rⱼ) == 0` on an inner
///   Newton step, checked *before* the Aitken step is attempted
/// - [`SteffensenError::AitkenDenominatorZero`] : `r2 - 2·r1 + r0 == 0`
///
/// plus [`SteffensenError::InvalidGuess`] and the propagated
/// [`RootFindingError`] variants as in [`steffensen`].
pub fn steffensen_newton<F, G>(
    mut f: F,
    mut df: G,
    p0: f64,
    cfg: SteffensenCfg,
) -> Result<RootFindingReport, SteffensenError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !p0.is_finite() {
        return Err(SteffensenError::InvalidGuess { p0 });
    }

    let tol       = cfg.common.tol();
    let epsilon   = cfg.common.epsilon();
    let max_iter  = cfg.common.max_iter();
    let algorithm = Algorithm::FixedPoint(FixedPointFamily::SteffensenNewton);
    let algo_name = algorithm.algorithm_name();

    let num_iter = match max_iter {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations (f and f' both count)
    let mut evals: usize = 0;

    let mut r0 = p0;
    for iter in 1..=num_iter {
        // two Newton-Raphson inner steps
        let mut r = [r0, 0.0, 0.0];
        for j in 1..3 {
            let x   = r[j - 1];
            let dfx = { evals += 1; df(x) };
            if dfx == 0.0 {
                return Err(SteffensenError::DerivativeZero { x });
            }
            let fx = { evals += 1; f(x) };
            if !fx.is_finite() {
                return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
            }
            let next = x - fx / dfx;
            if !next.is_finite() {
                return Err(RootFindingError::StepNotFinite { x, step: -fx / dfx }.into());
            }
            r[j] = next;
        }

        let denom = r[2] - 2.0 * r[1] + r[0];
        if denom == 0.0 {
            return Err(SteffensenError::AitkenDenominatorZero { r0 });
        }

        let r_est   = aitken_estimate(r[0], r[1], r[2], denom);
        let abs_err = (r[0] - r_est).abs();
        let rel_err = aitken_rel_err(abs_err, r_est, tol);

        let f_est = { evals += 1; f(r_est) };
        if !f_est.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x: r_est, fx: f_est }.into());
        }

        tracing::trace!(
            "{algo_name}: k={iter} r_est={r_est} f(r_est)={f_est} abs_err={abs_err} rel_err={rel_err}"
        );

        let satisfied = if abs_err < tol {
            Some(ToleranceSatisfied::AbsErrReached)
        } else if rel_err < tol {
            Some(ToleranceSatisfied::RelErrReached)
        } else if f_est.abs() < epsilon {
            Some(ToleranceSatisfied::ResidualReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = satisfied {
            return Ok(RootFindingReport {
                root                : r_est,
                f_root              : f_est,
                abs_err,
                rel_err             : Some(rel_err),
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied,
                stencil             : Stencil::tripleton(r[0], r[1], r[2]),
                algorithm_name      : algo_name,
            });
        }

        r0 = r_est;
    }

    Err(RootFindingError::IterationLimit { max_iter: num_iter }.into())
}
