//! # Matrix Generation Contract
//!
//! Every animation state has a generator that turns its parameters into a full
//! frame. Frames are verified against the configured shape before they leave
//! this crate; a shape mismatch means a generator or glyph is defective, so it
//! is reported as an error instead of being patched up.

use crate::config::GridConfig;
use crate::Matrix;
use thiserror::Error;

/// Errors that abort frame generation.
///
/// None of these are retryable: generation is deterministic, so the same input
/// always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Grid has the wrong number of rows
    #[error("no of rows should be {expected} but found {found}")]
    RowCount { expected: usize, found: usize },

    /// A row has the wrong number of columns
    #[error("no of columns in row {row} should be {expected} but found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A digit glyph anchored at this position would overflow the frame
    #[error("digit anchored at ({row}, {column}) does not fit in the frame")]
    DigitOutOfBounds { row: usize, column: usize },

    /// Digit catalog lookup outside 0-9
    #[error("matrix not defined for digit {0}")]
    UndefinedDigit(i64),

    /// Formatted time is not exactly four digits
    #[error("time `{0}` is not four digits")]
    MalformedTime(String),
}

/// Produces the frame for one animation state.
pub trait MatrixGenerator {
    /// Compute the raw frame for the configured grid.
    fn generate_matrix(&self, grid: &GridConfig) -> Result<Matrix, MatrixError>;

    /// Compute the frame and check it has exactly `grid.rows x grid.columns` clocks.
    fn verified_matrix(&self, grid: &GridConfig) -> Result<Matrix, MatrixError> {
        let matrix = self.generate_matrix(grid)?;
        verify_matrix(&matrix, grid.rows, grid.columns)?;
        Ok(matrix)
    }
}

/// Check that `matrix` has `rows` rows of `columns` cells each.
///
/// Generic over the cell type so digit glyphs go through the same check.
pub fn verify_matrix<T>(matrix: &[Vec<T>], rows: usize, columns: usize) -> Result<(), MatrixError> {
    if matrix.len() != rows {
        return Err(MatrixError::RowCount {
            expected: rows,
            found: matrix.len(),
        });
    }
    for (row, cells) in matrix.iter().enumerate() {
        if cells.len() != columns {
            return Err(MatrixError::ColumnCount {
                row,
                expected: columns,
                found: cells.len(),
            });
        }
    }
    Ok(())
}
