//! # Trance Shapes
//!
//! Each trance shape is computed per clock from its bearing relative to the
//! centre of the frame (0° = straight up, clockwise), so the shapes scale with
//! whatever grid is configured. The animator interpolates between consecutive
//! shapes; see [`TranceTo::waypoints`].

use crate::config::GridConfig;
use crate::generator::{verify_matrix, MatrixError, MatrixGenerator};
use crate::movement::TranceTo;
use crate::transform::normalize_angle;
use crate::{ClockData, Matrix};

/// Wing angle of the top row of a fly frame
const FLY_TOP_WING: f32 = 60.0;
/// Extra wing angle gained by the bottom row
const FLY_WING_SWEEP: f32 = 30.0;
/// Half opening of a flower petal
const PETAL_HALF_ANGLE: f32 = 45.0;

#[derive(Debug, Clone, Copy)]
pub struct TranceMatrixGenerator {
    pub to: TranceTo,
}

impl TranceMatrixGenerator {
    pub fn new(to: TranceTo) -> Self {
        TranceMatrixGenerator { to }
    }

    /// One verified frame per shape the trance passes through
    pub fn waypoint_matrices(&self, grid: &GridConfig) -> Result<Vec<Matrix>, MatrixError> {
        self.to
            .waypoints()
            .iter()
            .map(|shape| {
                let matrix = shape_matrix(*shape, grid);
                verify_matrix(&matrix, grid.rows, grid.columns)?;
                Ok(matrix)
            })
            .collect()
    }
}

impl MatrixGenerator for TranceMatrixGenerator {
    fn generate_matrix(&self, grid: &GridConfig) -> Result<Matrix, MatrixError> {
        log::debug!("trance frame towards {:?}", self.to);
        Ok(shape_matrix(self.to, grid))
    }
}

/// Position of a clock relative to the centre of the frame
struct Offset {
    /// Columns to the right of centre
    dx: f32,
    /// Rows below centre
    dy: f32,
    /// `dx` scaled so the frame's edge is at 1
    nx: f32,
    /// `dy` scaled so the frame's edge is at 1
    ny: f32,
}

impl Offset {
    fn bearing(&self) -> f32 {
        normalize_angle(self.dx.atan2(-self.dy).to_degrees())
    }
}

fn shape_matrix(shape: TranceTo, grid: &GridConfig) -> Matrix {
    let center_row = grid.rows.saturating_sub(1) as f32 / 2.0;
    let center_column = grid.columns.saturating_sub(1) as f32 / 2.0;

    (0..grid.rows)
        .map(|row| {
            (0..grid.columns)
                .map(|column| {
                    let dx = column as f32 - center_column;
                    let dy = row as f32 - center_row;
                    let offset = Offset {
                        dx,
                        dy,
                        nx: dx.abs() / center_column.max(1.0),
                        ny: dy.abs() / center_row.max(1.0),
                    };
                    shape_clock(shape, &offset, row, grid.rows)
                })
                .collect()
        })
        .collect()
}

fn shape_clock(shape: TranceTo, offset: &Offset, row: usize, rows: usize) -> ClockData {
    let (one, two) = match shape {
        TranceTo::Circle => {
            let bearing = offset.bearing();
            (bearing + 90.0, bearing + 270.0)
        }
        TranceTo::Star => {
            let bearing = offset.bearing();
            (bearing, bearing + 180.0)
        }
        TranceTo::Flower => {
            let bearing = offset.bearing();
            (bearing - PETAL_HALF_ANGLE, bearing + PETAL_HALF_ANGLE)
        }
        TranceTo::Square => {
            if offset.nx >= offset.ny {
                (0.0, 180.0)
            } else {
                (90.0, 270.0)
            }
        }
        TranceTo::Fly => {
            let depth = if rows > 1 {
                row as f32 / (rows - 1) as f32
            } else {
                0.0
            };
            let wing = FLY_TOP_WING + FLY_WING_SWEEP * depth;
            (wing, 360.0 - wing)
        }
    };
    ClockData::new(normalize_angle(one), normalize_angle(two))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        let diff = normalize_angle(a - b);
        diff < 1e-3 || diff > 360.0 - 1e-3
    }

    fn frame(to: TranceTo) -> Matrix {
        TranceMatrixGenerator::new(to)
            .verified_matrix(&GridConfig::default())
            .unwrap()
    }

    #[test]
    fn all_angles_stay_within_one_turn() {
        for to in [
            TranceTo::Circle,
            TranceTo::Square,
            TranceTo::Flower,
            TranceTo::Star,
            TranceTo::Fly,
        ] {
            for clock in frame(to).iter().flatten() {
                assert!((0.0..360.0).contains(&clock.degree_one), "{to:?}: {clock:?}");
                assert!((0.0..360.0).contains(&clock.degree_two), "{to:?}: {clock:?}");
            }
        }
    }

    #[test]
    fn circle_hands_are_opposite_and_tangent() {
        let circle = frame(TranceTo::Circle);
        let star = frame(TranceTo::Star);
        for (circle_row, star_row) in circle.iter().zip(&star) {
            for (c, s) in circle_row.iter().zip(star_row) {
                assert!(close(c.degree_two - c.degree_one, 180.0));
                assert!(close(c.degree_one - s.degree_one, 90.0));
            }
        }
    }

    #[test]
    fn star_points_away_from_centre() {
        let star = frame(TranceTo::Star);
        // Top middle clock points straight up, bottom middle straight down
        assert!(close(star[0][7].degree_one, 0.0));
        assert!(close(star[0][7].degree_two, 180.0));
        assert!(close(star[7][7].degree_one, 180.0));
    }

    #[test]
    fn flower_opens_around_the_bearing() {
        let flower = frame(TranceTo::Flower);
        assert!(close(flower[0][7].degree_one, 315.0));
        assert!(close(flower[0][7].degree_two, 45.0));
    }

    #[test]
    fn square_sides_are_straight() {
        let square = frame(TranceTo::Square);
        assert_eq!(square[0][7], ClockData::new(90.0, 270.0));
        assert_eq!(square[3][0], ClockData::new(0.0, 180.0));
        assert_eq!(square[4][14], ClockData::new(0.0, 180.0));
    }

    #[test]
    fn fly_wings_flatten_towards_bottom() {
        let fly = frame(TranceTo::Fly);
        assert_eq!(fly[0][0], ClockData::new(60.0, 300.0));
        assert_eq!(fly[7][14], ClockData::new(90.0, 270.0));
        assert!(fly.iter().all(|row| row.windows(2).all(|w| w[0] == w[1])));
    }

    #[test]
    fn star_waypoints_start_with_circle() {
        let grid = GridConfig::default();
        let frames = TranceMatrixGenerator::new(TranceTo::Star)
            .waypoint_matrices(&grid)
            .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frame(TranceTo::Circle));
        assert_eq!(frames[1], frame(TranceTo::Star));
    }

    #[test]
    fn shapes_follow_configured_grid() {
        let grid = GridConfig {
            rows: 5,
            columns: 9,
            ..GridConfig::default()
        };
        let matrix = TranceMatrixGenerator::new(TranceTo::Flower)
            .verified_matrix(&grid)
            .unwrap();
        assert_eq!(matrix.len(), 5);
        assert!(matrix.iter().all(|row| row.len() == 9));
    }
}
