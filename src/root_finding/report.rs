//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

/// Which convergence test was satisfied on success.
/// - [`ToleranceSatisfied::AbsErrReached`]
///     - All iterative methods
///     - |xₙ - xₙ₋₁| < tol
/// - [`ToleranceSatisfied::RelErrReached`]
///     - Open and fixed-point methods
///     - method-specific relative error measure < tol
/// - [`ToleranceSatisfied::ResidualReached`]
///     - Open, fixed-point, and regula falsi
///     - |f(x)| < epsilon
/// - [`ToleranceSatisfied::WidthReached`]
///     - Bracketing methods
///     - (b - a) < tol
/// - [`ToleranceSatisfied::ExactZero`]
///     - Bracketing methods (and open-method early exits)
///     - f(x) evaluated to exactly 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsErrReached,
    RelErrReached,
    ResidualReached,
    WidthReached,
    ExactZero,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`]  : bracketing methods
///     - `left`, `right` bounds of the final interval
/// - [`Stencil::Open`]     : open methods
///     - `x` = last iterates used to compute the root
/// - [`Stencil::Sequence`] : plain fixed-point iteration
///     - every iterate from `p0` to the converged value, in order
#[derive(Debug, Clone)]
pub enum Stencil {
    Bracket  { bounds: [f64; 2] },
    Open     { x: [f64; 3], len: usize },
    Sequence { iterates: Vec<f64> },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds }        => &bounds[..],
            Stencil::Open { x, len }           => &x[..*len],
            Stencil::Sequence { iterates }     => &iterates[..],
        }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2, 0.0], len: 2 }
    }
    pub fn tripleton(x1: f64, x2: f64, x3: f64) -> Self {
        Stencil::Open { x: [x1, x2, x3], len: 3 }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `f_root`              : function value at `root` (residual)
/// - `abs_err`             : |xₙ - xₙ₋₁| for iterative methods, final
///                           bracket width for bisection
/// - `rel_err`             : method-specific relative error, where defined
/// - `iterations`          : total iterations
/// - `evaluations`         : total function evaluations
/// - `tolerance_satisfied` : which convergence test fired ([`ToleranceSatisfied`])
/// - `stencil`             : last set of points used in update formula
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub abs_err             : f64,
    pub rel_err             : Option<f64>,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}
