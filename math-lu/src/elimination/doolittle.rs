//! Doolittle factorization into combined L/U storage
//!
//! Computes U row by row and L column by column from explicit dot products
//! instead of rank-one updates. Without pivoting the LU factors are unique,
//! so the result agrees with the elimination kernels up to rounding.

use super::{LuConfig, check_pivot};
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::traits::Scalar;

/// Factor `matrix` out of place, leaving the input untouched
pub fn doolittle<T: Scalar>(
    matrix: &DenseMatrix<T>,
    config: &LuConfig<T>,
) -> Result<DenseMatrix<T>> {
    let n = matrix.dimension();
    let a = matrix.as_array();
    let mut out = DenseMatrix::zeros(n)?;
    let mut lu = out.as_array_mut();

    for i in 0..n {
        // U(i, k) = A(i, k) - sum_j L(i, j) U(j, k)
        for k in i..n {
            let sum = (0..i).fold(T::zero(), |acc, j| acc + lu[[i, j]] * lu[[j, k]]);
            lu[[i, k]] = a[[i, k]] - sum;
        }

        if i + 1 < n {
            check_pivot(lu[[i, i]], i, config)?;
        }

        // L(k, i) = (A(k, i) - sum_j L(k, j) U(j, i)) / U(i, i)
        for k in i + 1..n {
            let sum = (0..i).fold(T::zero(), |acc, j| acc + lu[[k, j]] * lu[[j, i]]);
            lu[[k, i]] = (a[[k, i]] - sum) / lu[[i, i]];
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::gaussian_serial;
    use crate::error::LuError;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_doolittle_2x2() {
        let m = DenseMatrix::from_rows(&[vec![4.0, 3.0], vec![6.0, 3.0]]).unwrap();
        let lu = doolittle(&m, &LuConfig::default()).unwrap();

        assert_relative_eq!(lu.get(0, 0).unwrap(), 4.0);
        assert_relative_eq!(lu.get(0, 1).unwrap(), 3.0);
        assert_relative_eq!(lu.get(1, 0).unwrap(), 1.5);
        assert_relative_eq!(lu.get(1, 1).unwrap(), -1.5);
        // input untouched
        assert_relative_eq!(m.get(1, 0).unwrap(), 6.0);
    }

    #[test]
    fn test_doolittle_agrees_with_elimination() {
        let mut rng = StdRng::seed_from_u64(99);
        let m = DenseMatrix::<f64>::random_diagonally_dominant(24, &mut rng).unwrap();

        let reference = doolittle(&m, &LuConfig::default()).unwrap();
        let mut eliminated = m.clone();
        gaussian_serial(&mut eliminated).unwrap();

        for (x, y) in reference.as_array().iter().zip(eliminated.as_array().iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_doolittle_singular() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        // a trailing zero in U is not a division
        assert!(doolittle(&m, &LuConfig::default()).is_ok());

        let m = DenseMatrix::from_rows(&[vec![0.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let err = doolittle(&m, &LuConfig::default()).unwrap_err();
        assert!(matches!(err, LuError::SingularPivot { step: 0, .. }));
    }
}
