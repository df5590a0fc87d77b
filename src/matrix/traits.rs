//! Element trait for the matrix utilities.

use core::fmt::Debug;
use num_traits::{Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types, and `num_complex::Complex`
/// over any of them — one generic implementation per operation instead of
/// per-type duplication.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}
