//! Range checks for the `(whole, fraction)` pair of an axis.
//!
//! The checks never prevent a value from being stored,
//! they only tell whether the stored value is inside the legal envelope:
//! `|whole| <= max` where the boundary `|whole| == max` is legal only with a zero fraction.

use crate::{Axis, OutOfRange};

fn within(whole: i32, fraction: u32, max: u32) -> bool {
    let degrees = whole.unsigned_abs();
    degrees < max || (degrees == max && fraction == 0)
}

/// Latitude in `-90..=90` degrees
pub fn is_latitude_valid(whole: i32, fraction: u32) -> bool {
    within(whole, fraction, Axis::Latitude.max_degrees())
}

/// Longitude in `-180..=180` degrees
pub fn is_longitude_valid(whole: i32, fraction: u32) -> bool {
    within(whole, fraction, Axis::Longitude.max_degrees())
}

/// Check the components against the envelope of the given axis
pub fn is_valid(axis: Axis, whole: i32, fraction: u32) -> bool {
    match axis {
        Axis::Latitude => is_latitude_valid(whole, fraction),
        Axis::Longitude => is_longitude_valid(whole, fraction),
    }
}

/// Same as [`is_valid`] but describes the violation.
///
/// # Errors
/// `OutOfRange` when the components are outside of the axis' envelope.
pub fn check(axis: Axis, whole: i32, fraction: u32) -> Result<(), OutOfRange> {
    if is_valid(axis, whole, fraction) {
        Ok(())
    } else {
        Err(OutOfRange {
            axis,
            whole,
            fraction,
            max: axis.max_degrees(),
        })
    }
}
