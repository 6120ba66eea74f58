//! Gaussian elimination without pivoting
//!
//! Both variants factor a [`DenseMatrix`] in place into combined L/U storage:
//!
//! ```text
//!         u u u u u
//!         l u u u u
//!   mtx = l l u u u
//!         l l l u u
//!         l l l l u
//! ```
//!
//! - [`gaussian_serial`]: one thread, rows reduced in order
//! - [`gaussian_parallel`]: `thread_count` workers, rows dealt out cyclically
//!   per pivot step, one barrier wait per step
//!
//! Both share [`eliminate_row`], so their results are bit-for-bit identical.
//! [`doolittle`] computes the same factors out of place and is used as an
//! independent cross-check.
//!
//! [`DenseMatrix`]: crate::DenseMatrix

mod doolittle;
mod parallel;
mod serial;
mod shared;

pub use doolittle::doolittle;
pub use parallel::{gaussian_parallel, gaussian_parallel_with_config};
pub use serial::{gaussian_serial, gaussian_serial_with_config};

use crate::error::{LuError, Result};
use crate::traits::Scalar;
use ndarray::{ArrayView1, ArrayViewMut1, Zip, s};

/// Elimination configuration
#[derive(Debug, Clone)]
pub struct LuConfig<T> {
    /// Pivots with a magnitude below this value abort the decomposition
    pub pivot_tolerance: T,
    /// Log progress every N pivot steps (0 = no output)
    pub print_interval: usize,
}

impl<T: Scalar> Default for LuConfig<T> {
    fn default() -> Self {
        Self {
            pivot_tolerance: T::from_real(1e-30),
            print_interval: 0,
        }
    }
}

impl<T> LuConfig<T> {
    #[inline]
    pub(crate) fn reports_step(&self, step: usize) -> bool {
        self.print_interval > 0 && (step + 1) % self.print_interval == 0
    }
}

/// Reject a pivot that cannot be divided by
#[inline]
pub(crate) fn check_pivot<T: Scalar>(pivot: T, step: usize, config: &LuConfig<T>) -> Result<()> {
    if pivot.is_unusable_pivot(config.pivot_tolerance) {
        return Err(LuError::SingularPivot {
            step,
            value: pivot.to_real(),
        });
    }
    Ok(())
}

/// Reduce one row against the pivot row of step `k`
///
/// `row[j] -= lik * pivot_row[j]` for `j > k`, then the multiplier
/// `lik = row[k] / pivot_row[k]` is stored in `row[k]`.
#[inline]
pub(crate) fn eliminate_row<T: Scalar>(
    mut row: ArrayViewMut1<'_, T>,
    pivot_row: ArrayView1<'_, T>,
    k: usize,
) {
    let lik = row[k] / pivot_row[k];

    Zip::from(row.slice_mut(s![k + 1..]))
        .and(pivot_row.slice(s![k + 1..]))
        .for_each(|x, &p| *x -= lik * p);

    row[k] = lik;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_eliminate_row() {
        let pivot = array![4.0_f64, 3.0, 2.0];
        let mut row = array![6.0_f64, 3.0, 1.0];

        eliminate_row(row.view_mut(), pivot.view(), 0);

        assert_relative_eq!(row[0], 1.5);
        assert_relative_eq!(row[1], -1.5);
        assert_relative_eq!(row[2], -2.0);
    }

    #[test]
    fn test_eliminate_row_leaves_left_part() {
        let pivot = array![9.0_f64, 2.0, 4.0];
        let mut row = array![0.25_f64, 1.0, 5.0];

        eliminate_row(row.view_mut(), pivot.view(), 1);

        assert_relative_eq!(row[0], 0.25);
        assert_relative_eq!(row[1], 0.5);
        assert_relative_eq!(row[2], 3.0);
    }

    #[test]
    fn test_check_pivot() {
        let config = LuConfig::<f64>::default();
        assert!(check_pivot(2.0, 0, &config).is_ok());

        let err = check_pivot(0.0, 3, &config).unwrap_err();
        assert!(matches!(err, LuError::SingularPivot { step: 3, .. }));

        let strict = LuConfig {
            pivot_tolerance: 1e-3,
            print_interval: 0,
        };
        assert!(check_pivot(1e-4, 0, &strict).is_err());
    }

    #[test]
    fn test_reports_step() {
        let quiet = LuConfig::<f64>::default();
        assert!(!quiet.reports_step(0));

        let every_two = LuConfig {
            pivot_tolerance: 1e-30,
            print_interval: 2,
        };
        assert!(!every_two.reports_step(0));
        assert!(every_two.reports_step(1));
        assert!(every_two.reports_step(3));
    }
}
