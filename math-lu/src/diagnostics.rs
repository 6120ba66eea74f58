//! Printing and exact comparison of matrices

use crate::matrix::DenseMatrix;
use crate::traits::Scalar;
use std::io::{self, Write};

/// Matrices of this dimension or larger are not printed
pub const PRINT_LIMIT: usize = 100;

/// Write `matrix` as space-separated rows, one per line
///
/// Does nothing when `n >= PRINT_LIMIT`.
pub fn print_matrix<T: Scalar, W: Write>(out: &mut W, matrix: &DenseMatrix<T>) -> io::Result<()> {
    if matrix.dimension() >= PRINT_LIMIT {
        return Ok(());
    }

    for row in matrix.as_array().rows() {
        let mut first = true;
        for value in row.iter() {
            if !first {
                write!(out, " ")?;
            }
            write!(out, "{value}")?;
            first = false;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Exact element-wise equality
///
/// Returns `false` without looking at the contents when the dimensions differ.
pub fn compare_matrix<T: Scalar>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> bool {
    if a.dimension() != b.dimension() {
        return false;
    }
    a.as_array()
        .iter()
        .zip(b.as_array().iter())
        .all(|(x, y)| x == y)
}
