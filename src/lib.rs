//! # Klokk Matrix Engine
//!
//! This library computes the hand angles for a wall of simulated analog clocks.
//! Every clock has two hands; a frame is a rectangular grid of clocks, and an
//! animation state ("movement") maps to exactly one frame.
//!
//! ## Design Philosophy
//!
//! ### Pure Frames
//! - **No state between calls**: every frame is recomputed from the movement's
//!   parameters and the injected [`config::GridConfig`]
//! - **Validated output**: a generator either returns a grid of exactly
//!   `rows x columns` clocks or a [`generator::MatrixError`], never a partial grid
//! - **Build-once catalogs**: digit glyphs and ripple quadrants are built lazily
//!   on first use and can be rebuilt by tests for re-verification
//!
//! ### Angle Convention
//! Angles are degrees, 0° points to twelve o'clock and angles grow clockwise.
//! Generators may emit values outside `[0, 360)` (the ripple unwind adds a full
//! turn); renderers are expected to animate raw degree values.
//!
//! ### Data Flow
//! 1. **Select**: the caller picks a [`movement::Movement`]
//! 2. **Generate**: the movement yields its [`generator::MatrixGenerator`]
//! 3. **Verify**: the generator's grid is checked against the configured shape
//! 4. **Render**: an external renderer maps each cell to a clock face
//!
//! ## Core Types
//! - [`ClockData`]: both hand angles of a single clock
//! - [`Matrix`]: a full frame of clocks
//! - [`DigitMatrix`]: a digit glyph whose empty cells leave the backdrop untouched

use serde::{Deserialize, Serialize};

pub mod config;
pub mod digits;
pub mod generator;
pub mod movement;
pub mod ripple;
pub mod standby;
pub mod time;
pub mod trance;
pub mod transform;


/// Hand angles of a single clock, in degrees.
///
/// Two values are equal only when both angles match exactly; transforms always
/// build new instances instead of mutating existing ones.
///
/// # Example
/// ```
/// use klokk::ClockData;
///
/// // Both hands resting at half past seven
/// let idle = ClockData::new(225.0, 225.0);
/// assert_eq!(idle, ClockData { degree_one: 225.0, degree_two: 225.0 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockData {
    /// Angle of the first hand
    pub degree_one: f32,
    /// Angle of the second hand
    pub degree_two: f32,
}

impl ClockData {
    pub const fn new(degree_one: f32, degree_two: f32) -> Self {
        ClockData {
            degree_one,
            degree_two,
        }
    }
}

/// A full frame: rows of clocks.
pub type Matrix = Vec<Vec<ClockData>>;

/// A digit glyph. `None` cells keep whatever the backdrop already shows.
pub type DigitMatrix = Vec<Vec<Option<ClockData>>>;
