//! Fixed-point iteration

use super::algorithms::{Algorithm, FixedPointFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, ToleranceSatisfied, Stencil};
use super::tolerances::fixed_point_rel_err;
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: p0={p0} must be finite")]
    InvalidGuess { p0: f64 },
}


/// Fixed-point iteration configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction
/// - Use [`FixedPointCfg::new`] then optional setters.
/// - The tolerance may be given as a decimal-places count via `set_decimals`
///   (`tol = 10^-n`), the conventional form for this method.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`fixed_point`] resolves it using
///   [`Algorithm::default_max_iter`] for [`FixedPointFamily::FixedPoint`],
///   or [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for FixedPointCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(FixedPointCfg);


/// Estimates a solution of `x = g(x)` by the iteration `pₙ = g(pₙ₋₁)`
/// from an initial guess, retaining the full iterate sequence.
///
/// # Arguments
/// - `g`   : the iteration function; a root of the underlying problem must
///           be a fixed point of `g`
/// - `p0`  : finite initial guess
/// - `cfg` : [`FixedPointCfg`] (tolerance, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : fixed-point approximation `pₙ`
/// - `f_root`              : `g(root)` (approaches `root` itself at a fixed
///                           point, not zero); costs one extra evaluation
/// - `abs_err`             : |pₙ - pₙ₋₁|
/// - `rel_err`             : `Some(abs_err / (|pₙ| + machine epsilon))`
/// - `iterations`          : iterations performed
/// - `evaluations`         : total evaluations of `g`
/// - `tolerance_satisfied` : which error measure fired
/// - `stencil`             : [`Stencil::Sequence`] holding every iterate,
///                           `p0` first, grown one entry per iteration
/// - `algorithm_name`      : "fixed_point"
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`] : `p0` non-finite
///
/// * Propagated via [`FixedPointError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `g(p)` produced NaN/inf
/// - [`RootFindingError::IterationLimit`]      : budget exhausted with
///   neither error measure below `tol`; hard failure, since the iteration
///   may diverge or oscillate
///
/// # Notes
/// - Convergence requires `|g'(p)| < 1` near the fixed point; the returned
///   iterate sequence is useful for estimating the contraction rate.
/// - Restarting from a converged fixed point terminates on iteration 1 with
///   `abs_err = 0`.
pub fn fixed_point<G>(
    mut g: G,
    p0: f64,
    cfg: FixedPointCfg,
) -> Result<RootFindingReport, FixedPointError>
where G: FnMut(f64) -> f64 {

    if !p0.is_finite() {
        return Err(FixedPointError::InvalidGuess { p0 });
    }

    let tol       = cfg.common.tol();
    let max_iter  = cfg.common.max_iter();
    let algorithm = Algorithm::FixedPoint(FixedPointFamily::FixedPoint);

    let num_iter = match max_iter {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps g, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, FixedPointError> {
        let gx = { evals += 1; g(x) };
        if !gx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx: gx }.into());
        }
        Ok(gx)
    };

    let mut iterates = Vec::with_capacity(8);
    iterates.push(p0);

    for iter in 1..=num_iter {
        let p_prev = iterates[iter - 1];
        let p_next = eval(p_prev)?;

        let abs_err = (p_next - p_prev).abs();
        let rel_err = fixed_point_rel_err(abs_err, p_next);
        iterates.push(p_next);

        let satisfied = if abs_err < tol {
            Some(ToleranceSatisfied::AbsErrReached)
        } else if rel_err < tol {
            Some(ToleranceSatisfied::RelErrReached)
        } else {
            None
        };

        if let Some(tolerance_satisfied) = satisfied {
            let g_root = eval(p_next)?;
            return Ok(RootFindingReport {
                root                : p_next,
                f_root              : g_root,
                abs_err,
                rel_err             : Some(rel_err),
                iterations          : iter,
                evaluations         : evals,
                tolerance_satisfied,
                stencil             : Stencil::Sequence { iterates },
                algorithm_name      : algorithm.algorithm_name(),
            });
        }
    }

    Err(RootFindingError::IterationLimit { max_iter: num_iter }.into())
}
