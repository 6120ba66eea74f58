//! Error types for LU decomposition.
//!
//! Every fallible operation in this crate returns [`LuError`]. Errors abort
//! the current call; nothing is retried or swallowed.

use thiserror::Error;

/// Errors that can occur while building, loading or decomposing a matrix.
#[derive(Debug, Error)]
pub enum LuError {
    /// The `n×n` buffer could not be allocated.
    #[error("cannot allocate a {n}x{n} matrix")]
    Allocation {
        /// Requested dimension
        n: usize,
    },

    /// A token in the input could not be parsed as a number.
    #[error("line {line}, column {column}: cannot parse {token:?} as a number")]
    Parse {
        /// 1-based line number
        line: usize,
        /// 1-based token position within the line
        column: usize,
        /// The offending token
        token: String,
    },

    /// A row of the input does not have `n` entries.
    #[error("line {line}: expected {expected} values, got {got}")]
    RaggedRow {
        /// 1-based line number
        line: usize,
        /// Dimension fixed by the first line
        expected: usize,
        /// Number of values found
        got: usize,
    },

    /// The input does not have `n` rows.
    #[error("expected {expected} rows, got {got}")]
    RowCount {
        /// Dimension fixed by the first line
        expected: usize,
        /// Number of rows found
        got: usize,
    },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Checked access outside `[0, n)`.
    #[error("index ({row}, {col}) out of range for a {n}x{n} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix dimension
        n: usize,
    },

    /// The pivot at an elimination step is zero, too small or not finite.
    #[error("singular pivot at step {step}: {value:e}")]
    SingularPivot {
        /// Elimination step (pivot index)
        step: usize,
        /// Pivot value, widened to f64 for reporting
        value: f64,
    },

    /// The parallel variant needs at least one worker.
    #[error("invalid thread count: {0} (must be >= 1)")]
    InvalidThreadCount(usize),

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker {id}: {source}")]
    ThreadSpawn {
        /// Worker id
        id: usize,
        /// Underlying error
        source: std::io::Error,
    },

    /// Operand shapes are incompatible.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        got: usize,
    },
}

/// A specialized `Result` type for LU operations.
pub type Result<T> = std::result::Result<T, LuError>;

impl LuError {
    /// Returns `true` if the input could not be turned into a matrix.
    ///
    /// This includes `Parse`, `RaggedRow`, `RowCount` and `Io`.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            LuError::Parse { .. }
                | LuError::RaggedRow { .. }
                | LuError::RowCount { .. }
                | LuError::Io(_)
        )
    }

    /// Returns `true` if elimination stopped on a numerical failure.
    pub fn is_numeric_error(&self) -> bool {
        matches!(self, LuError::SingularPivot { .. })
    }

    /// Returns `true` for out-of-range access or incompatible shapes.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            LuError::IndexOutOfRange { .. } | LuError::DimensionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LuError::IndexOutOfRange {
            row: 3,
            col: 0,
            n: 2,
        };
        assert_eq!(
            err.to_string(),
            "index (3, 0) out of range for a 2x2 matrix"
        );

        let err = LuError::Parse {
            line: 2,
            column: 3,
            token: "x1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 2, column 3: cannot parse \"x1\" as a number"
        );
    }

    #[test]
    fn test_is_parse_error() {
        let parse_err = LuError::RowCount {
            expected: 3,
            got: 2,
        };
        let pivot_err = LuError::SingularPivot {
            step: 0,
            value: 0.0,
        };

        assert!(parse_err.is_parse_error());
        assert!(!pivot_err.is_parse_error());
    }

    #[test]
    fn test_is_numeric_error() {
        let pivot_err = LuError::SingularPivot {
            step: 1,
            value: 0.0,
        };
        assert!(pivot_err.is_numeric_error());
        assert!(!LuError::InvalidThreadCount(0).is_numeric_error());
    }

    #[test]
    fn test_is_index_error() {
        let dim_err = LuError::DimensionMismatch {
            expected: 4,
            got: 3,
        };
        assert!(dim_err.is_index_error());
        assert!(!LuError::Allocation { n: 1 }.is_index_error());
    }
}
