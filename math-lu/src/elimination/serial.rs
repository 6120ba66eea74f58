//! Sequential forward elimination

use super::{LuConfig, check_pivot, eliminate_row};
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::traits::Scalar;
use ndarray::Axis;

/// Factor `matrix` in place with the default [`LuConfig`]
pub fn gaussian_serial<T: Scalar>(matrix: &mut DenseMatrix<T>) -> Result<()> {
    gaussian_serial_with_config(matrix, &LuConfig::default())
}

/// Factor `matrix` in place into combined L/U storage
///
/// On `SingularPivot` the matrix is left reduced up to the failing step and
/// must not be used as a decomposition.
pub fn gaussian_serial_with_config<T: Scalar>(
    matrix: &mut DenseMatrix<T>,
    config: &LuConfig<T>,
) -> Result<()> {
    let n = matrix.dimension();
    let steps = n.saturating_sub(1);
    log::debug!("serial elimination: n = {n}");

    let mut a = matrix.as_array_mut();

    // the last pivot has no rows below it
    for k in 0..steps {
        let (top, mut bottom) = a.view_mut().split_at(Axis(0), k + 1);
        let pivot_row = top.row(k);

        if let Err(err) = check_pivot(pivot_row[k], k, config) {
            log::warn!("serial elimination stopped: {err}");
            return Err(err);
        }

        for row in bottom.rows_mut() {
            eliminate_row(row, pivot_row, k);
        }

        if config.reports_step(k) {
            log::info!("serial elimination step {}/{}", k + 1, steps);
        }
    }

    Ok(())
}
