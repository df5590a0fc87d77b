//! Scalar function abstraction.
//!
//! Every solver in this module consumes a plain `FnMut(f64) -> f64` closure.
//! Families of functions that are specialized by an ordered parameter vector
//! (e.g. a net-present-value curve parametrized by its cash flows) are bound
//! to that signature with [`with_params`], so a single generic algorithm
//! family serves both parameter-free and parametrized use cases.

/// Binds an ordered parameter vector to a parametrized scalar function,
/// producing the `FnMut(f64) -> f64` closure the solvers consume.
///
/// # Arguments
/// - `f`      : function of the scalar argument and a parameter slice
/// - `params` : parameter vector, moved into the returned closure and
///              passed through opaquely on every evaluation
///
/// # Example
/// A net-present-value function parametrized by cash flows, solved for its
/// internal rate of return:
///
/// ```text
/// let npv = |r: f64, cf: &[f64]| {
///     cf.iter()
///         .enumerate()
///         .map(|(t, c)| c / (1.0 + r).powi(t as i32))
///         .sum::<f64>()
/// };
/// let f = with_params(npv, vec![-1000.0, 500.0, 500.0, 500.0]);
/// ```
pub fn with_params<F>(mut f: F, params: Vec<f64>) -> impl FnMut(f64) -> f64
where
    F: FnMut(f64, &[f64]) -> f64,
{
    move |x| f(x, &params)
}
