//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`].
/// This cap is only applied when a bracket algorithm's theoretical iteration
/// bound would otherwise exceed it (e.g. [`BracketFamily::Bisection`]).
///
/// Serves as a practical safeguard against iteration counts that are
/// mathematically valid but computationally excessive.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`]    contains bracket methods for root-finding
/// - [`Algorithm::Open`]       contains open methods for root-finding
/// - [`Algorithm::FixedPoint`] contains fixed-point iteration methods
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
    FixedPoint(FixedPointFamily),
}

#[derive(Debug, Copy, Clone)]
pub enum BracketFamily {
    Bisection,
    RegulaFalsi,
}

#[derive(Debug, Copy, Clone)]
pub enum OpenFamily {
    Newton,
    NewtonAccelerated,
    Secant,
}

#[derive(Debug, Copy, Clone)]
pub enum FixedPointFamily {
    FixedPoint,
    Steffensen,
    SteffensenNewton,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - Values are heuristic and method-specific.
    /// - Methods with theoretical bounds (e.g. [`BracketFamily::Bisection`])
    ///   return `None`, meaning "compute theoretical bound instead".
    ///   - If that bound exceeds practical limits,
    ///     [`GLOBAL_MAX_ITER_FALLBACK`] is used.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)                => None,
            Algorithm::Bracket(BracketFamily::RegulaFalsi)              => Some(100),
            Algorithm::Open(OpenFamily::Newton)
            | Algorithm::Open(OpenFamily::NewtonAccelerated)            => Some(50),
            Algorithm::Open(OpenFamily::Secant)                         => Some(100),
            Algorithm::FixedPoint(FixedPointFamily::FixedPoint)         => Some(100),
            Algorithm::FixedPoint(FixedPointFamily::Steffensen)
            | Algorithm::FixedPoint(FixedPointFamily::SteffensenNewton) => Some(50),
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)                => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsi)              => "regula_falsi",
            Algorithm::Open(OpenFamily::Newton)                         => "newton",
            Algorithm::Open(OpenFamily::NewtonAccelerated)              => "newton_accelerated",
            Algorithm::Open(OpenFamily::Secant)                         => "secant",
            Algorithm::FixedPoint(FixedPointFamily::FixedPoint)         => "fixed_point",
            Algorithm::FixedPoint(FixedPointFamily::Steffensen)         => "steffensen",
            Algorithm::FixedPoint(FixedPointFamily::SteffensenNewton)   => "steffensen_newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
