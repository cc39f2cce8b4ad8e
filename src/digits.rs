//! # Digit Glyphs
//!
//! Ten fixed glyphs, one per decimal digit, each `digit_rows x digit_columns`
//! clocks. Strokes are drawn with a handful of hand presets; empty cells
//! (`None`) keep the backdrop's pose so the idle clocks frame the digit.
//!
//! ```text
//! zero          BR = right-angled bottom-right (arms right and down)
//! BR  H  BL     BL = right-angled bottom-left  (arms left and down)
//! V   VB V      TR = right-angled top-right    (arms up and right)
//! V   V  V      TL = right-angled top-left     (arms up and left)
//! V   V  V      VT / VB = top / bottom half of a vertical stroke
//! V   VT V
//! TR  H  TL
//! ```

use crate::config::GridConfig;
use crate::generator::{verify_matrix, MatrixError};
use crate::{ClockData, DigitMatrix};
use std::sync::OnceLock;

/// Full vertical stroke
pub const VERTICAL: ClockData = ClockData::new(0.0, 180.0);
/// Upper half of a vertical stroke
pub const VERTICAL_TOP_HALF: ClockData = ClockData::new(0.0, 0.0);
/// Lower half of a vertical stroke
pub const VERTICAL_BOTTOM_HALF: ClockData = ClockData::new(180.0, 180.0);
/// Full horizontal stroke
pub const HORIZONTAL: ClockData = ClockData::new(90.0, 270.0);
pub const RIGHT_ANGLED_TOP_LEFT: ClockData = ClockData::new(0.0, 270.0);
pub const RIGHT_ANGLED_TOP_RIGHT: ClockData = ClockData::new(0.0, 90.0);
pub const RIGHT_ANGLED_BOTTOM_LEFT: ClockData = ClockData::new(180.0, 270.0);
pub const RIGHT_ANGLED_BOTTOM_RIGHT: ClockData = ClockData::new(90.0, 180.0);

type Cell = Option<ClockData>;
type Template = [[Cell; 3]; 6];

const V: Cell = Some(VERTICAL);
const VT: Cell = Some(VERTICAL_TOP_HALF);
const VB: Cell = Some(VERTICAL_BOTTOM_HALF);
const H: Cell = Some(HORIZONTAL);
const TL: Cell = Some(RIGHT_ANGLED_TOP_LEFT);
const TR: Cell = Some(RIGHT_ANGLED_TOP_RIGHT);
const BL: Cell = Some(RIGHT_ANGLED_BOTTOM_LEFT);
const BR: Cell = Some(RIGHT_ANGLED_BOTTOM_RIGHT);
const __: Cell = None;

const TEMPLATES: [Template; 10] = [
    // 0
    [
        [BR, H, BL],
        [V, VB, V],
        [V, V, V],
        [V, V, V],
        [V, VT, V],
        [TR, H, TL],
    ],
    // 1
    [
        [__, BR, BL],
        [__, V, V],
        [__, V, V],
        [__, V, V],
        [__, V, V],
        [__, TR, TL],
    ],
    // 2
    [
        [H, H, BL],
        [__, __, V],
        [BR, H, TL],
        [V, __, __],
        [V, __, __],
        [TR, H, H],
    ],
    // 3
    [
        [H, H, BL],
        [__, __, V],
        [H, H, V],
        [__, __, V],
        [__, __, V],
        [H, H, TL],
    ],
    // 4
    [
        [VB, __, VB],
        [V, __, V],
        [TR, H, V],
        [__, __, V],
        [__, __, V],
        [__, __, VT],
    ],
    // 5
    [
        [BR, H, H],
        [V, __, __],
        [TR, H, BL],
        [__, __, V],
        [__, __, V],
        [H, H, TL],
    ],
    // 6
    [
        [BR, H, H],
        [V, __, __],
        [V, H, BL],
        [V, __, V],
        [V, __, V],
        [TR, H, TL],
    ],
    // 7
    [
        [H, H, BL],
        [__, __, V],
        [__, __, V],
        [__, __, V],
        [__, __, V],
        [__, __, VT],
    ],
    // 8
    [
        [BR, H, BL],
        [V, __, V],
        [V, H, V],
        [V, __, V],
        [V, __, V],
        [TR, H, TL],
    ],
    // 9
    [
        [BR, H, BL],
        [V, __, V],
        [TR, H, V],
        [__, __, V],
        [__, __, V],
        [H, H, TL],
    ],
];

static CATALOG: OnceLock<Vec<DigitMatrix>> = OnceLock::new();

/// Build the glyphs for digits 0-9, indexed by digit.
pub fn build_catalog() -> Vec<DigitMatrix> {
    TEMPLATES
        .iter()
        .map(|template| template.iter().map(|row| row.to_vec()).collect())
        .collect()
}

/// Verified glyph for `digit`.
///
/// Anything outside 0-9 is an [`MatrixError::UndefinedDigit`]; there is no
/// blank fallback glyph.
pub fn digit_matrix(digit: i64, grid: &GridConfig) -> Result<&'static DigitMatrix, MatrixError> {
    let catalog = CATALOG.get_or_init(build_catalog);
    let matrix = usize::try_from(digit)
        .ok()
        .and_then(|index| catalog.get(index))
        .ok_or(MatrixError::UndefinedDigit(digit))?;
    verify_digit_matrix(matrix, grid)?;
    Ok(matrix)
}

/// Check a glyph has exactly `digit_rows x digit_columns` cells.
pub fn verify_digit_matrix(matrix: &DigitMatrix, grid: &GridConfig) -> Result<(), MatrixError> {
    verify_matrix(matrix, grid.digit_rows, grid.digit_columns)
}
