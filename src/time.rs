//! # Time Display
//!
//! Spells a 24-hour `HHMM` time with digit glyphs laid over the standby frame.
//! Glyph cells without a value keep the standby pose, so the idle clocks fill
//! the space around the strokes.

use crate::config::GridConfig;
use crate::digits::digit_matrix;
use crate::generator::{MatrixError, MatrixGenerator};
use crate::standby::StandByMatrixGenerator;
use crate::{DigitMatrix, Matrix};
use chrono::NaiveDateTime;

/// Top-left `(row, column)` of the h1, h2, m1 and m2 glyphs.
///
/// Derived for a 8x15 frame with 6x3 glyphs.
pub const DIGIT_ANCHORS: [(usize, usize); 4] = [(1, 1), (1, 4), (1, 8), (1, 11)];

#[derive(Debug, Clone, Copy)]
pub struct TimeMatrixGenerator {
    pub instant: NaiveDateTime,
}

impl TimeMatrixGenerator {
    pub fn new(instant: NaiveDateTime) -> Self {
        TimeMatrixGenerator { instant }
    }
}

impl MatrixGenerator for TimeMatrixGenerator {
    fn generate_matrix(&self, grid: &GridConfig) -> Result<Matrix, MatrixError> {
        let formatted = self.instant.format("%H%M").to_string();
        log::debug!("time frame for {}", formatted);

        let digits = split_digits(&formatted)?;
        let mut matrix = StandByMatrixGenerator.verified_matrix(grid)?;

        for (digit, anchor) in digits.into_iter().zip(DIGIT_ANCHORS) {
            let glyph = digit_matrix(digit, grid)?;
            overlay(&mut matrix, glyph, anchor, grid)?;
        }

        Ok(matrix)
    }
}

/// Split `HHMM` into its four digits
fn split_digits(formatted: &str) -> Result<[i64; 4], MatrixError> {
    let malformed = || MatrixError::MalformedTime(formatted.to_string());

    let digits: Vec<i64> = formatted
        .chars()
        .map(|c| c.to_digit(10).map(i64::from))
        .collect::<Option<_>>()
        .ok_or_else(malformed)?;

    digits.try_into().map_err(|_| malformed())
}

/// Copy every filled glyph cell onto `matrix`, starting at `anchor`
fn overlay(
    matrix: &mut Matrix,
    glyph: &DigitMatrix,
    (anchor_row, anchor_column): (usize, usize),
    grid: &GridConfig,
) -> Result<(), MatrixError> {
    if anchor_row + grid.digit_rows > grid.rows || anchor_column + grid.digit_columns > grid.columns
    {
        return Err(MatrixError::DigitOutOfBounds {
            row: anchor_row,
            column: anchor_column,
        });
    }

    for (i, glyph_row) in glyph.iter().enumerate() {
        for (j, cell) in glyph_row.iter().enumerate() {
            if let Some(clock) = cell {
                matrix[anchor_row + i][anchor_column + j] = *clock;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 16)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn splits_four_digits() {
        assert_eq!(split_digits("0930"), Ok([0, 9, 3, 0]));
        assert_eq!(split_digits("2359"), Ok([2, 3, 5, 9]));
    }

    #[test]
    fn rejects_malformed_time() {
        assert_eq!(
            split_digits("930"),
            Err(MatrixError::MalformedTime("930".to_string()))
        );
        assert_eq!(
            split_digits("09:30"),
            Err(MatrixError::MalformedTime("09:30".to_string()))
        );
        assert!(split_digits("").is_err());
    }

    #[test]
    fn frame_keeps_configured_shape() {
        let grid = GridConfig::default();
        let matrix = TimeMatrixGenerator::new(at(18, 47))
            .verified_matrix(&grid)
            .unwrap();
        assert_eq!(matrix.len(), 8);
        assert!(matrix.iter().all(|row| row.len() == 15));
    }

    #[test]
    fn anchors_outside_smaller_frame_fail() {
        let grid = GridConfig {
            columns: 12,
            ..GridConfig::default()
        };
        assert_eq!(
            TimeMatrixGenerator::new(at(12, 0)).verified_matrix(&grid),
            Err(MatrixError::DigitOutOfBounds { row: 1, column: 11 })
        );
    }
}
