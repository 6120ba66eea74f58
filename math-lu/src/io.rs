//! Plain-text matrix input
//!
//! One row per line, values separated by whitespace. The number of values on
//! the first line fixes `n`; the input must then contain exactly `n` rows of
//! `n` values. Blank lines are skipped.

use crate::error::{LuError, Result};
use crate::matrix::DenseMatrix;
use crate::traits::Scalar;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a matrix from a text file
pub fn load_matrix<T: Scalar, P: AsRef<Path>>(path: P) -> Result<DenseMatrix<T>> {
    let path = path.as_ref();
    log::debug!("loading matrix from {}", path.display());
    let file = File::open(path)?;
    parse_matrix(BufReader::new(file))
}

/// Parse a matrix from any buffered reader
pub fn parse_matrix<T: Scalar, R: BufRead>(reader: R) -> Result<DenseMatrix<T>> {
    let mut n = None;
    let mut buffer: Vec<T> = Vec::new();
    let mut rows = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let before = buffer.len();
        for (col, token) in line.split_whitespace().enumerate() {
            let value = token.parse::<T>().map_err(|_| LuError::Parse {
                line: line_no,
                column: col + 1,
                token: token.to_string(),
            })?;
            buffer.push(value);
        }
        let got = buffer.len() - before;

        let expected = *n.get_or_insert(got);
        if got != expected {
            return Err(LuError::RaggedRow {
                line: line_no,
                expected,
                got,
            });
        }
        rows += 1;
        if rows > expected {
            return Err(LuError::RowCount {
                expected,
                got: rows,
            });
        }
    }

    let n = n.unwrap_or(0);
    if rows != n {
        return Err(LuError::RowCount { expected: n, got: rows });
    }
    log::debug!("parsed {n}x{n} matrix");
    DenseMatrix::from_row_major(n, buffer)
}
