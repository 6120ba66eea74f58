//! Dense square matrix storage
//!
//! [`DenseMatrix`] owns a contiguous row-major `n×n` buffer. The dimension is
//! fixed at construction. Access through [`DenseMatrix::get`] and
//! [`DenseMatrix::set`] is bounds-checked.

use crate::error::{LuError, Result};
use crate::traits::Scalar;
use ndarray::{Array2, ArrayView2, ArrayViewMut2};
use rand::Rng;

/// Square dense matrix
///
/// After a decomposition the same buffer holds the combined factors: the
/// strictly lower part is L (unit diagonal implicit), the rest is U.
#[derive(Debug, Clone)]
pub struct DenseMatrix<T: Scalar = f64> {
    data: Array2<T>,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Allocate a zero-filled `n×n` matrix
    ///
    /// `n = 0` gives a valid empty matrix with no accessible cells.
    pub fn zeros(n: usize) -> Result<Self> {
        let len = n.checked_mul(n).ok_or(LuError::Allocation { n })?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| LuError::Allocation { n })?;
        buffer.resize(len, T::zero());
        Self::from_row_major(n, buffer)
    }

    /// Identity matrix of dimension `n`
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n)?;
        m.data.diag_mut().fill(T::one());
        Ok(m)
    }

    /// Build from a row-major buffer of exactly `n*n` values
    pub fn from_row_major(n: usize, buffer: Vec<T>) -> Result<Self> {
        let got = buffer.len();
        Array2::from_shape_vec((n, n), buffer)
            .map(|data| Self { data })
            .map_err(|_| LuError::DimensionMismatch {
                expected: n * n,
                got,
            })
    }

    /// Build from a list of rows; every row must have as many entries as there are rows
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let n = rows.len();
        let mut m = Self::zeros(n)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LuError::DimensionMismatch {
                    expected: n,
                    got: row.len(),
                });
            }
            m.data
                .row_mut(i)
                .iter_mut()
                .zip(row)
                .for_each(|(dst, &src)| *dst = src);
        }
        Ok(m)
    }

    /// Take ownership of an `ndarray` matrix, which must be square
    pub fn from_array(data: Array2<T>) -> Result<Self> {
        if data.nrows() != data.ncols() {
            return Err(LuError::DimensionMismatch {
                expected: data.nrows(),
                got: data.ncols(),
            });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Matrix with entries drawn uniformly from `[min, max)`
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn random<R: Rng + ?Sized>(n: usize, min: T, max: T, rng: &mut R) -> Result<Self> {
        let mut m = Self::zeros(n)?;
        m.data
            .iter_mut()
            .for_each(|x| *x = rng.random_range(min..max));
        Ok(m)
    }

    /// Strictly row diagonally dominant matrix
    ///
    /// Off-diagonal entries are uniform in `[-1, 1)` and each diagonal entry is
    /// one more than the absolute row sum of the off-diagonal part. Elimination
    /// without pivoting never meets a zero pivot on such a matrix.
    pub fn random_diagonally_dominant<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        let mut m = Self::random(n, -T::one(), T::one(), rng)?;
        for (i, mut row) in m.data.rows_mut().into_iter().enumerate() {
            let off_diag = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(T::zero(), |acc, (_, x)| acc + x.abs());
            row[i] = off_diag + T::one();
        }
        Ok(m)
    }

    /// Dimension `n`
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.nrows()
    }

    /// `true` for the `0×0` matrix
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dimension() == 0
    }

    /// Checked read of cell `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(self.out_of_range(row, col))
    }

    /// Checked write of cell `(row, col)`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let err = self.out_of_range(row, col);
        let cell = self.data.get_mut((row, col)).ok_or(err)?;
        *cell = value;
        Ok(())
    }

    /// Read-only view of the underlying array
    pub fn as_array(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Consume the matrix and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    pub(crate) fn as_array_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }

    fn out_of_range(&self, row: usize, col: usize) -> LuError {
        LuError::IndexOutOfRange {
            row,
            col,
            n: self.dimension(),
        }
    }
}

impl<T: Scalar> TryFrom<Array2<T>> for DenseMatrix<T> {
    type Error = LuError;

    fn try_from(data: Array2<T>) -> Result<Self> {
        Self::from_array(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zeros() {
        let m = DenseMatrix::<f64>::zeros(3).unwrap();
        assert_eq!(m.dimension(), 3);
        assert!(m.as_array().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_matrix() {
        let m = DenseMatrix::<f64>::zeros(0).unwrap();
        assert!(m.is_empty());
        assert!(m.get(0, 0).is_err());
    }

    #[test]
    fn test_allocation_overflow() {
        let err = DenseMatrix::<f64>::zeros(usize::MAX).unwrap_err();
        assert!(matches!(err, LuError::Allocation { .. }));
    }

    #[test]
    fn test_checked_access() {
        let mut m = DenseMatrix::<f64>::zeros(2).unwrap();
        m.set(1, 0, 6.0).unwrap();
        assert_relative_eq!(m.get(1, 0).unwrap(), 6.0);

        let err = m.get(2, 0).unwrap_err();
        assert!(matches!(
            err,
            LuError::IndexOutOfRange {
                row: 2,
                col: 0,
                n: 2
            }
        ));
        assert!(m.set(0, 5, 1.0).is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut a = DenseMatrix::from_rows(&[vec![4.0, 3.0], vec![6.0, 3.0]]).unwrap();
        let b = a.clone();
        a.set(0, 0, -1.0).unwrap();
        assert_relative_eq!(b.get(0, 0).unwrap(), 4.0);
        assert_relative_eq!(a.get(0, 0).unwrap(), -1.0);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap_err();
        assert!(err.is_index_error());
    }

    #[test]
    fn test_from_array() {
        let m = DenseMatrix::from_array(array![[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
        assert_relative_eq!(m.get(1, 0).unwrap(), 3.0);

        // transposed view owns a column-major buffer
        let transposed = array![[1.0_f64, 2.0], [3.0, 4.0]].reversed_axes();
        let t = DenseMatrix::from_array(transposed).unwrap();
        assert_relative_eq!(t.get(1, 0).unwrap(), 2.0);
        assert!(t.as_array().is_standard_layout());

        assert!(DenseMatrix::try_from(Array2::<f64>::zeros((2, 3))).is_err());
    }

    #[test]
    fn test_identity() {
        let m = DenseMatrix::<f32>::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(m.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_random_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = DenseMatrix::random(8, -10.0_f64, 10.0, &mut rng).unwrap();
        assert!(m.as_array().iter().all(|&x| (-10.0..10.0).contains(&x)));
    }

    #[test]
    fn test_random_diagonally_dominant() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = DenseMatrix::<f64>::random_diagonally_dominant(16, &mut rng).unwrap();
        let a = m.as_array();
        for i in 0..16 {
            let off: f64 = (0..16).filter(|&j| j != i).map(|j| a[[i, j]].abs()).sum();
            assert!(a[[i, i]] > off);
        }
    }
}
