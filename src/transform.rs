//! # Row Transforms
//!
//! Mirroring and interpolation primitives over rows of [`ClockData`]. The ripple
//! quadrants are built entirely from these; every function returns a new row.

use crate::ClockData;

/// Reverse the row and mirror every hand across the vertical axis (`a -> 360 - a`).
///
/// Turns the left half of a symmetric pattern into its right half.
pub fn reverse_and_mirror_horizontally(row: &[ClockData]) -> Vec<ClockData> {
    row.iter()
        .rev()
        .map(|clock| ClockData::new(360.0 - clock.degree_one, 360.0 - clock.degree_two))
        .collect()
}

/// Mirror every hand across the horizontal axis of the clock face.
///
/// Turns the top half of a pattern into its bottom half. See [`mirrored_angle`].
pub fn mirror_vertically(row: &[ClockData]) -> Vec<ClockData> {
    row.iter()
        .map(|clock| {
            ClockData::new(
                mirrored_angle(clock.degree_one),
                mirrored_angle(clock.degree_two),
            )
        })
        .collect()
}

/// Reflect a single angle top-to-bottom.
///
/// `180 - a` inside `(0, 180)`, `360 - (a % 180)` everywhere else. Note that
/// `0` maps to `360`, not `180`; ripple frames depend on this exact folding.
pub fn mirrored_angle(current: f32) -> f32 {
    if current > 0.0 && current < 180.0 {
        180.0 - current
    } else {
        360.0 - (current % 180.0)
    }
}

/// Evenly spaced linear ramp of `count` clocks from `start` towards `end`.
///
/// Sample `i` is `start + i * (end - start) / count`, so `end` itself is never
/// reached.
pub fn interpolate_row(start: ClockData, end: ClockData, count: usize) -> Vec<ClockData> {
    let interval_one = (end.degree_one - start.degree_one) / count as f32;
    let interval_two = (end.degree_two - start.degree_two) / count as f32;

    (0..count)
        .map(|i| {
            ClockData::new(
                start.degree_one + i as f32 * interval_one,
                start.degree_two + i as f32 * interval_two,
            )
        })
        .collect()
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_angle(degree: f32) -> f32 {
    let wrapped = degree.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
