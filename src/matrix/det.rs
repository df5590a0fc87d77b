//! Determinant via LU-style elimination.

use core::ops::Neg;

use super::algebra::is_square;
use super::errors::MatrixError;
use super::traits::Scalar;


/// Determinant of a square matrix by fraction-free LU-style elimination.
///
/// Rows are eliminated with cross-multiplication
/// (`row_j ← pivot·row_j - m[j][i]·row_i`), accumulating the product of
/// pivots, and the determinant is recovered with a single division at the
/// end. Row swaps move a non-zero pivot into place and flip the sign once
/// per swap. Deferring the division keeps integer matrices exact (the final
/// division is always exact over the integers) and lets the same code serve
/// real and complex elements.
///
/// # Arguments
/// - `m` : square input matrix; read-only, eliminated in a local copy
///
/// # Errors
/// - shape errors from [`is_square`]
/// - [`MatrixError::Singular`] : no non-zero pivot exists in some column,
///   i.e. the determinant is zero
pub fn determinant<T>(m: &[Vec<T>]) -> Result<T, MatrixError>
where
    T: Scalar + Neg<Output = T>,
{
    let (n, _) = is_square(m)?;

    let mut work: Vec<Vec<T>> = m.to_vec();
    let mut total = T::one();
    let mut odd_swaps = false;

    for i in 0..n {
        // find a row with a non-zero value in column i
        let mut index = i;
        while index < n && work[index][i] == T::zero() {
            index += 1;
        }
        if index == n {
            return Err(MatrixError::Singular);
        }
        if index != i {
            work.swap(i, index);
            odd_swaps = !odd_swaps;
        }

        let pivot_row = work[i].clone();
        for j in (i + 1)..n {
            let pivot = pivot_row[i];
            let below = work[j][i];
            for k in 0..n {
                work[j][k] = pivot * work[j][k] - below * pivot_row[k];
            }
            total = total * pivot;
        }
    }

    let mut det = T::one();
    for (i, row) in work.iter().enumerate() {
        det = det * row[i];
    }
    if odd_swaps {
        det = -det;
    }
    Ok(det / total)
}
