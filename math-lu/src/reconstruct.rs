//! Working with the combined L/U storage
//!
//! - [`split_lu`]: separate unit lower L and upper U matrices
//! - [`reconstruct`]: the product `L·U`, computed straight from the combined
//!   storage
//! - [`max_relative_error`]: distance between two matrices for verification

use crate::error::{LuError, Result};
use crate::matrix::DenseMatrix;
use crate::parallel::{parallel_map_indexed, parallel_max_indexed};
use crate::traits::Scalar;

/// Split a decomposed matrix into `(L, U)`
pub fn split_lu<T: Scalar>(
    decomposed: &DenseMatrix<T>,
) -> Result<(DenseMatrix<T>, DenseMatrix<T>)> {
    let n = decomposed.dimension();
    let lu = decomposed.as_array();
    let mut lower = DenseMatrix::identity(n)?;
    let mut upper = DenseMatrix::zeros(n)?;

    {
        let mut l = lower.as_array_mut();
        let mut u = upper.as_array_mut();
        for ((i, j), &value) in lu.indexed_iter() {
            if i > j {
                l[[i, j]] = value;
            } else {
                u[[i, j]] = value;
            }
        }
    }

    Ok((lower, upper))
}

/// Multiply the factors held in a decomposed matrix back together
///
/// Rows are computed in parallel when the `native` feature is enabled.
pub fn reconstruct<T: Scalar>(decomposed: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    let n = decomposed.dimension();
    let lu = decomposed.as_array();

    let rows = parallel_map_indexed(n, |i| {
        (0..n)
            .map(|j| {
                // L(i, p) U(p, j) for p <= min(i, j), with L(i, i) = 1
                let mut sum = if i <= j { lu[[i, j]] } else { T::zero() };
                for p in 0..i.min(j + 1) {
                    sum += lu[[i, p]] * lu[[p, j]];
                }
                sum
            })
            .collect::<Vec<T>>()
    });

    DenseMatrix::from_row_major(n, rows.into_iter().flatten().collect())
}

/// Largest entry-wise `|a - b| / max(|a|, 1)`
pub fn max_relative_error<T: Scalar>(
    expected: &DenseMatrix<T>,
    actual: &DenseMatrix<T>,
) -> Result<f64> {
    let n = expected.dimension();
    if actual.dimension() != n {
        return Err(LuError::DimensionMismatch {
            expected: n,
            got: actual.dimension(),
        });
    }

    let a = expected.as_array();
    let b = actual.as_array();
    Ok(parallel_max_indexed(n, 0.0, |i| {
        a.row(i)
            .iter()
            .zip(b.row(i).iter())
            .map(|(&x, &y)| {
                let (x, y) = (x.to_real(), y.to_real());
                (x - y).abs() / x.abs().max(1.0)
            })
            .fold(0.0, f64::max)
    }))
}
