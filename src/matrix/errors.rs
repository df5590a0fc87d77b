//! Matrix error types.
//!
//! [`MatrixError`] covers the size/shape invariants every operation
//! validates before touching element data, plus the singular-matrix
//! condition raised by the determinant.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("empty matrix: at least one row and one column required")]
    EmptyMatrix,

    #[error("ragged matrix: row {row} has {got} columns, expected {expected}")]
    RaggedRows { row: usize, got: usize, expected: usize },

    #[error("size mismatch: left is {a_rows}x{a_cols}, right is {b_rows}x{b_cols}")]
    SizeMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },

    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("singular matrix")]
    Singular,
}
