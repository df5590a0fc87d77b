//! Fast inverse square root.
//!
//! The Quake III bit trick: reinterpret the float's bits, subtract the
//! shifted bits from a magic constant to get a first estimate of
//! `1/sqrt(x)`, then sharpen it with Newton-Raphson steps
//! `y ← y·(1.5 - x/2·y²)`. The caller picks the refinement count; each
//! step roughly squares the relative accuracy until the format's
//! precision floor.

use thiserror::Error;

/// Lomont's refinement of the 32-bit magic constant.
const MAGIC_F32: u32 = 0x5F37_5A86;
/// Robertson's 64-bit magic constant.
const MAGIC_F64: u64 = 0x5FE6_EB50_C7B5_37A9;


#[derive(Debug, Error, PartialEq)]
pub enum FastInvSqrtError {
    #[error("undefined inverse square root: input {got} is negative")]
    NegativeInput { got: f64 },

    #[error("iterations must be >= 1")]
    InvalidIterations,
}


/// Fast inverse square root of an `f32`.
///
/// # Arguments
/// - `input`      : non-negative radicand
/// - `iterations` : Newton-Raphson refinement steps; must be >= 1. One step
///   reaches ~0.2% relative error, two ~5e-6; beyond three the estimate sits
///   at the f32 precision floor.
///
/// # Errors
/// - [`FastInvSqrtError::NegativeInput`]     : `input < 0`
/// - [`FastInvSqrtError::InvalidIterations`] : `iterations == 0`
pub fn fast_inv_sqrt32(input: f32, iterations: usize) -> Result<f32, FastInvSqrtError> {
    if input < 0.0 {
        return Err(FastInvSqrtError::NegativeInput { got: f64::from(input) });
    }
    if iterations == 0 {
        return Err(FastInvSqrtError::InvalidIterations);
    }

    let half = input * 0.5;
    let bits = MAGIC_F32 - (input.to_bits() >> 1);
    let mut estimate = f32::from_bits(bits);
    for _ in 0..iterations {
        estimate *= 1.5 - half * estimate * estimate;
    }
    Ok(estimate)
}


/// Fast inverse square root of an `f64`.
///
/// Same contract as [`fast_inv_sqrt32`]; with four refinement steps the
/// result reaches the f64 precision floor.
pub fn fast_inv_sqrt64(input: f64, iterations: usize) -> Result<f64, FastInvSqrtError> {
    if input < 0.0 {
        return Err(FastInvSqrtError::NegativeInput { got: input });
    }
    if iterations == 0 {
        return Err(FastInvSqrtError::InvalidIterations);
    }

    let half = input * 0.5;
    let bits = MAGIC_F64 - (input.to_bits() >> 1);
    let mut estimate = f64::from_bits(bits);
    for _ in 0..iterations {
        estimate *= 1.5 - half * estimate * estimate;
    }
    Ok(estimate)
}
