//! Scalar abstraction for matrix entries
//!
//! [`Scalar`] is the bound used by storage, elimination and I/O. It is
//! implemented for `f64` (the default everywhere) and `f32`.

use num_traits::{Float, NumAssign};
use rand::distr::uniform::SampleUniform;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Trait for real floating-point types that can be stored in a [`DenseMatrix`].
///
/// [`DenseMatrix`]: crate::DenseMatrix
pub trait Scalar:
    Float
    + NumAssign
    + FromStr
    + Display
    + Debug
    + SampleUniform
    + Default
    + Send
    + Sync
    + 'static
{
    /// Convert from an `f64` literal or computed value (may round)
    fn from_real(r: f64) -> Self;

    /// Widen to `f64` for reporting
    fn to_real(self) -> f64;

    /// Check whether this value cannot be used as a divisor
    ///
    /// A pivot is unusable if it is not finite or its magnitude is below `tol`.
    #[inline]
    fn is_unusable_pivot(self, tol: Self) -> bool {
        !self.is_finite() || self.abs() < tol
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_real(r: f64) -> Self {
        r
    }

    #[inline]
    fn to_real(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_real(r: f64) -> Self {
        r as f32
    }

    #[inline]
    fn to_real(self) -> f64 {
        self as f64
    }
}
