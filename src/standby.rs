//! Idle pose: every clock shows the same resting angles.

use crate::config::GridConfig;
use crate::generator::{MatrixError, MatrixGenerator};
use crate::{ClockData, Matrix};

/// Both hands rest at half past seven
pub const STANDBY_CLOCK: ClockData = ClockData::new(225.0, 225.0);

#[derive(Debug, Clone, Copy, Default)]
pub struct StandByMatrixGenerator;

impl MatrixGenerator for StandByMatrixGenerator {
    fn generate_matrix(&self, grid: &GridConfig) -> Result<Matrix, MatrixError> {
        log::debug!("standby frame {}x{}", grid.rows, grid.columns);
        Ok(vec![vec![STANDBY_CLOCK; grid.columns]; grid.rows])
    }
}
