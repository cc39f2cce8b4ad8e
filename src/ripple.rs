//! # Ripple Sweep
//!
//! A radial sweep built from four interpolated base rows. The rows form the
//! top-left quadrant; the other three quadrants are mirrored copies of it:
//!
//! ```text
//! +-----------+-------------------------+
//! | base rows | reversed + mirrored     |
//! +-----------+-------------------------+
//! | flipped   | flipped, reversed +     |
//! | upside    | mirrored                |
//! +-----------+-------------------------+
//! ```
//!
//! Quadrants are `RIPPLE_ROW_CLOCKS` wide, so two of them side by side cover one
//! column more than a 15-wide frame; the overlap is truncated, not blended.

use crate::config::GridConfig;
use crate::generator::{MatrixError, MatrixGenerator};
use crate::movement::RippleTo;
use crate::transform::{interpolate_row, mirror_vertically, reverse_and_mirror_horizontally};
use crate::{ClockData, Matrix};
use std::sync::OnceLock;

/// Clocks per base row (and per quadrant row)
pub const RIPPLE_ROW_CLOCKS: usize = 8;

/// Start and end angles of each base row, top to bottom
const BASE_ROWS: [(ClockData, ClockData); 4] = [
    (ClockData::new(80.0, 160.0), ClockData::new(110.0, 170.0)),
    (ClockData::new(85.0, 150.0), ClockData::new(120.0, 160.0)),
    (ClockData::new(85.0, 130.0), ClockData::new(130.0, 150.0)),
    (ClockData::new(80.0, 120.0), ClockData::new(135.0, 135.0)),
];

static QUADRANTS: OnceLock<RippleQuadrants> = OnceLock::new();

/// The four mirrored quadrants a ripple frame is tiled from.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleQuadrants {
    pub top_left: Matrix,
    pub top_right: Matrix,
    pub bottom_left: Matrix,
    pub bottom_right: Matrix,
}

impl RippleQuadrants {
    /// Build all quadrants from the base rows.
    pub fn build() -> Self {
        let top_left: Matrix = BASE_ROWS
            .iter()
            .map(|(start, end)| interpolate_row(*start, *end, RIPPLE_ROW_CLOCKS))
            .collect();

        let top_right = top_left
            .iter()
            .map(|row| reverse_and_mirror_horizontally(row))
            .collect();

        // Bottom half runs back up through the base rows
        let bottom_left: Matrix = top_left.iter().rev().map(|row| mirror_vertically(row)).collect();

        let bottom_right = bottom_left
            .iter()
            .map(|row| reverse_and_mirror_horizontally(row))
            .collect();

        RippleQuadrants {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Quadrants shared by every ripple frame, built on first use
    pub fn shared() -> &'static RippleQuadrants {
        QUADRANTS.get_or_init(Self::build)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RippleMatrixGenerator {
    pub to: RippleTo,
}

impl RippleMatrixGenerator {
    pub fn new(to: RippleTo) -> Self {
        RippleMatrixGenerator { to }
    }
}

impl MatrixGenerator for RippleMatrixGenerator {
    fn generate_matrix(&self, grid: &GridConfig) -> Result<Matrix, MatrixError> {
        log::debug!("ripple frame towards {:?}", self.to);
        let quadrants = RippleQuadrants::shared();

        let top = quadrants.top_left.iter().zip(&quadrants.top_right);
        let bottom = quadrants.bottom_left.iter().zip(&quadrants.bottom_right);

        let matrix = top
            .chain(bottom)
            .map(|(left, right)| {
                let row = merge_horizontally(left, right, grid.columns);
                match self.to {
                    RippleTo::Start => row,
                    RippleTo::End => unwind(row),
                }
            })
            .collect();

        Ok(matrix)
    }
}

/// Concatenate two quadrant rows and keep the first `columns` clocks
fn merge_horizontally(left: &[ClockData], right: &[ClockData], columns: usize) -> Vec<ClockData> {
    left.iter().chain(right).copied().take(columns).collect()
}

/// One extra full turn: first hand forwards, second hand backwards.
///
/// The result deliberately leaves `[0, 360)`.
fn unwind(row: Vec<ClockData>) -> Vec<ClockData> {
    row.into_iter()
        .map(|clock| ClockData::new(clock.degree_one + 360.0, clock.degree_two - 360.0))
        .collect()
}
