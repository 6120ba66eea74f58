//! In-place LU decomposition by Gaussian elimination
//!
//! This crate factors a dense square matrix into a unit lower triangular L and
//! an upper triangular U, without pivoting, and stores both factors in the
//! input buffer. It exists to compare a sequential elimination against a
//! barrier-synchronized multi-threaded variant of the same algorithm.
//!
//! # Features
//!
//! - **Storage**: [`DenseMatrix`], a bounds-checked square matrix over `ndarray`
//! - **Serial elimination**: [`gaussian_serial`]
//! - **Parallel elimination**: [`gaussian_parallel`], one worker thread per
//!   requested thread, cyclic row distribution and one barrier per pivot step
//! - **Verification**: [`compare_matrix`], [`reconstruct`], [`doolittle`]
//! - **I/O**: [`load_matrix`] and [`print_matrix`]
//!
//! # Example
//!
//! ```
//! use math_audio_lu::{DenseMatrix, compare_matrix, gaussian_parallel, gaussian_serial};
//!
//! let original = DenseMatrix::from_rows(&[vec![4.0, 3.0], vec![6.0, 3.0]]).unwrap();
//!
//! let mut serial = original.clone();
//! gaussian_serial(&mut serial).unwrap();
//! assert_eq!(serial.get(1, 0).unwrap(), 1.5);
//! assert_eq!(serial.get(1, 1).unwrap(), -1.5);
//!
//! let mut parallel = original.clone();
//! gaussian_parallel(&mut parallel, 2).unwrap();
//! assert!(compare_matrix(&serial, &parallel));
//! ```

pub mod diagnostics;
pub mod elimination;
pub mod error;
pub mod io;
pub mod matrix;
pub mod parallel;
pub mod reconstruct;
pub mod traits;

// Re-export main types
pub use error::{LuError, Result};
pub use matrix::DenseMatrix;
pub use traits::Scalar;

// Re-export elimination entry points
pub use elimination::{
    LuConfig, doolittle, gaussian_parallel, gaussian_parallel_with_config, gaussian_serial,
    gaussian_serial_with_config,
};

// Re-export helpers
pub use diagnostics::{PRINT_LIMIT, compare_matrix, print_matrix};
pub use io::{load_matrix, parse_matrix};
pub use reconstruct::{max_relative_error, reconstruct, split_lu};
