//! # Movements
//!
//! A [`Movement`] names one animation state: which frame to show and how long
//! the animator should take to reach it. Sequencing movements is left to the
//! caller; this module only maps a movement to its generator and duration.

use crate::config::TimingConfig;
use crate::generator::MatrixGenerator;
use crate::ripple::RippleMatrixGenerator;
use crate::standby::StandByMatrixGenerator;
use crate::time::TimeMatrixGenerator;
use crate::trance::TranceMatrixGenerator;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target shape of a trance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranceTo {
    Circle,
    #[default]
    Square,
    Flower,
    Star,
    Fly,
}

impl TranceTo {
    /// Shapes a trance towards `self` passes through, in order.
    ///
    /// A star is always reached through a circle.
    pub fn waypoints(self) -> &'static [TranceTo] {
        match self {
            TranceTo::Circle => &[TranceTo::Circle],
            TranceTo::Square => &[TranceTo::Square],
            TranceTo::Flower => &[TranceTo::Flower],
            TranceTo::Star => &[TranceTo::Circle, TranceTo::Star],
            TranceTo::Fly => &[TranceTo::Fly],
        }
    }

    fn label(self) -> &'static str {
        match self {
            TranceTo::Circle => "circle",
            TranceTo::Square => "square",
            TranceTo::Flower => "flower",
            TranceTo::Star => "star",
            TranceTo::Fly => "fly",
        }
    }
}

/// Direction of a ripple sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RippleTo {
    /// Sweep in
    Start,
    /// Sweep out, unwinding one extra turn
    End,
}

/// One animation state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "movement", rename_all = "lowercase")]
pub enum Movement {
    #[default]
    StandBy,
    Trance { to: TranceTo },
    Ripple { to: RippleTo },
    /// Show `instant` as HHMM, in the wall-clock time it was taken
    Time { instant: NaiveDateTime },
}

impl Movement {
    pub fn trance(to: TranceTo) -> Self {
        Movement::Trance { to }
    }

    pub fn ripple(to: RippleTo) -> Self {
        Movement::Ripple { to }
    }

    /// Time movement for the current local time
    pub fn time_now() -> Self {
        Self::time_at(Local::now())
    }

    /// Time movement for a zoned timestamp, rendered in that zone's wall-clock time
    pub fn time_at<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Movement::Time {
            instant: instant.naive_local(),
        }
    }

    /// Generator that produces this movement's frame
    pub fn matrix_generator(&self) -> Box<dyn MatrixGenerator> {
        match self {
            Movement::StandBy => Box::new(StandByMatrixGenerator),
            Movement::Trance { to } => Box::new(TranceMatrixGenerator::new(*to)),
            Movement::Ripple { to } => Box::new(RippleMatrixGenerator::new(*to)),
            Movement::Time { instant } => Box::new(TimeMatrixGenerator::new(*instant)),
        }
    }

    /// How long the animator takes to move the hands into this frame
    pub fn duration_millis(&self, timing: &TimingConfig) -> u64 {
        match self {
            Movement::StandBy => timing.standby_millis,
            Movement::Trance { .. } => timing.trance_millis,
            Movement::Ripple { .. } => timing.ripple_millis,
            Movement::Time { .. } => timing.time_millis,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Movement::StandBy => "standby",
            Movement::Trance { .. } => "trance",
            Movement::Ripple { .. } => "ripple",
            Movement::Time { .. } => "time",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::StandBy => write!(f, "standby"),
            Movement::Trance { to } => write!(f, "trance to {}", to.label()),
            Movement::Ripple { to } => write!(f, "ripple to {}", to.label()),
            Movement::Time { instant } => write!(f, "time {}", instant.format("%H:%M")),
        }
    }
}

impl RippleTo {
    fn label(self) -> &'static str {
        match self {
            RippleTo::Start => "start",
            RippleTo::End => "end",
        }
    }
}

impl FromStr for TranceTo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(TranceTo::Circle),
            "square" => Ok(TranceTo::Square),
            "flower" => Ok(TranceTo::Flower),
            "star" => Ok(TranceTo::Star),
            "fly" => Ok(TranceTo::Fly),
            other => Err(format!("unknown trance shape: {other}")),
        }
    }
}

impl FromStr for RippleTo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(RippleTo::Start),
            "end" => Ok(RippleTo::End),
            other => Err(format!("unknown ripple direction: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use chrono::{NaiveDate, Utc};

    fn all_movements() -> Vec<Movement> {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        vec![
            Movement::StandBy,
            Movement::trance(TranceTo::Circle),
            Movement::trance(TranceTo::Square),
            Movement::trance(TranceTo::Flower),
            Movement::trance(TranceTo::Star),
            Movement::trance(TranceTo::Fly),
            Movement::ripple(RippleTo::Start),
            Movement::ripple(RippleTo::End),
            Movement::Time { instant },
        ]
    }

    #[test]
    fn every_movement_yields_a_verified_frame() {
        let grid = GridConfig::default();
        for movement in all_movements() {
            let matrix = movement
                .matrix_generator()
                .verified_matrix(&grid)
                .unwrap_or_else(|e| panic!("{movement} failed: {e}"));
            assert_eq!(matrix.len(), grid.rows);
            assert!(matrix.iter().all(|row| row.len() == grid.columns));
        }
    }

    #[test]
    fn durations_follow_timing_config() {
        let timing = TimingConfig::default();
        assert_eq!(Movement::StandBy.duration_millis(&timing), 1000);
        assert_eq!(Movement::trance(TranceTo::Star).duration_millis(&timing), 3000);
        assert_eq!(Movement::ripple(RippleTo::End).duration_millis(&timing), 2500);
        assert_eq!(Movement::time_now().duration_millis(&timing), 2000);
    }

    #[test]
    fn star_passes_through_circle() {
        assert_eq!(TranceTo::Star.waypoints(), &[TranceTo::Circle, TranceTo::Star]);
        assert_eq!(TranceTo::Fly.waypoints(), &[TranceTo::Fly]);
    }

    #[test]
    fn time_at_keeps_wall_clock() {
        let zoned = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
        match Movement::time_at(zoned) {
            Movement::Time { instant } => assert_eq!(instant.format("%H%M").to_string(), "0930"),
            other => panic!("unexpected movement {other:?}"),
        }
    }

    #[test]
    fn movement_deserializes_from_tagged_json() {
        let movement: Movement =
            serde_json::from_str(r#"{"movement":"ripple","to":"end"}"#).unwrap();
        assert_eq!(movement, Movement::ripple(RippleTo::End));

        let movement: Movement = serde_json::from_str(r#"{"movement":"standby"}"#).unwrap();
        assert_eq!(movement, Movement::StandBy);
    }

    #[test]
    fn parses_shape_names() {
        assert_eq!("Flower".parse::<TranceTo>(), Ok(TranceTo::Flower));
        assert_eq!("end".parse::<RippleTo>(), Ok(RippleTo::End));
        assert!("hexagon".parse::<TranceTo>().is_err());
    }
}
