//! Elementary matrix algebra.
//!
//! Row-major `&[Vec<T>]` matrices, generic over [`Scalar`] elements.
//! Every operation validates the shape invariants (non-empty, rectangular,
//! dimensions agree) up front and never panics on caller data.

use super::errors::MatrixError;
use super::traits::Scalar;


/// Returns the `(rows, columns)` size of a validated matrix.
///
/// # Errors
/// - [`MatrixError::EmptyMatrix`] : no rows, or a first row with no columns
/// - [`MatrixError::RaggedRows`]  : rows of differing length
pub fn size<T: Scalar>(m: &[Vec<T>]) -> Result<(usize, usize), MatrixError> {
    if m.is_empty() || m[0].is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }
    let cols = m[0].len();
    for (row, r) in m.iter().enumerate().skip(1) {
        if r.len() != cols {
            return Err(MatrixError::RaggedRows { row, got: r.len(), expected: cols });
        }
    }
    Ok((m.len(), cols))
}

/// Returns the size if the matrix is square.
///
/// # Errors
/// Shape errors from [`size`], plus [`MatrixError::NotSquare`].
pub fn is_square<T: Scalar>(m: &[Vec<T>]) -> Result<(usize, usize), MatrixError> {
    let (rows, cols) = size(m)?;
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    Ok((rows, cols))
}

fn same_size<T: Scalar>(
    a: &[Vec<T>],
    b: &[Vec<T>],
) -> Result<(usize, usize), MatrixError> {
    let (a_rows, a_cols) = size(a)?;
    let (b_rows, b_cols) = size(b)?;
    if a_rows != b_rows || a_cols != b_cols {
        return Err(MatrixError::SizeMismatch { a_rows, a_cols, b_rows, b_cols });
    }
    Ok((a_rows, a_cols))
}

/// Element-wise sum `a + b` of two equally-sized matrices.
pub fn add<T: Scalar>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>, MatrixError> {
    same_size(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| x + y).collect())
        .collect())
}

/// Element-wise difference `a - b` of two equally-sized matrices.
pub fn subtract<T: Scalar>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>, MatrixError> {
    same_size(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| x - y).collect())
        .collect())
}

/// Multiplies every element of `m` by the scalar `k`.
pub fn scalar_multiply<T: Scalar>(k: T, m: &[Vec<T>]) -> Result<Vec<Vec<T>>, MatrixError> {
    size(m)?;
    Ok(m.iter()
        .map(|row| row.iter().map(|&x| k * x).collect())
        .collect())
}

/// Matrix product `a · b`.
///
/// # Errors
/// Shape errors from [`size`], plus [`MatrixError::SizeMismatch`] when the
/// inner dimensions disagree (`a` is m×n, `b` must be n×p).
pub fn multiply<T: Scalar>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>, MatrixError> {
    let (a_rows, a_cols) = size(a)?;
    let (b_rows, b_cols) = size(b)?;
    if a_cols != b_rows {
        return Err(MatrixError::SizeMismatch { a_rows, a_cols, b_rows, b_cols });
    }

    let mut out = vec![vec![T::zero(); b_cols]; a_rows];
    for i in 0..a_rows {
        for k in 0..a_cols {
            let aik = a[i][k];
            for j in 0..b_cols {
                out[i][j] = out[i][j] + aik * b[k][j];
            }
        }
    }
    Ok(out)
}
