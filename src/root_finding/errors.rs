//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation or iterate
//! │   ├ invalid global parameters (e.g. max_iter)
//! │   └ exhausted iteration budget
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     ├ invalid step/width tolerance
//!     ├ invalid residual tolerance (epsilon)
//!     └ invalid decimal-places count


use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// ├ Non-finite iterate produced by an update step
/// ├ Invalid global configuration (e.g. max_iter < 1)
/// └ Iteration budget exhausted without any convergence test passing
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")]
    StepNotFinite { x: f64, step: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("maximum number of iterations reached: max_iter={max_iter}")]
    IterationLimit { max_iter: usize },
}


/// Tolerance configuration errors.
///
/// ┌ Invalid step/width tolerance (`tol`)
/// ├ Invalid residual tolerance (`epsilon`)
/// └ Invalid decimal-places tolerance count
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTol { got: f64 },

    #[error("invalid `epsilon`: must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },

    #[error("invalid decimal places: must be in 1..=300. got {got}")]
    InvalidDecimals { got: u32 },
}
