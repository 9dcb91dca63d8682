//! Text codec of the position notations.
//!
//! Decimal degree and DMS notations render and parse a single axis.
//! UTM notation is joint: the two text fields are derived from the pair
//! of values at once, so it has its own [`utm`] module working with
//! projected coordinates.

use std::fmt;

use latlon_types::{Axis, PositionValue};

use crate::settings::DecimalStyle;

mod consts;
pub mod dd;
pub mod dms;
mod errors;
pub mod utm;

pub use errors::FormatError;

/// A notation which can render and parse one axis alone
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AxisNotation {
    /// Decimal degree with the given sign style
    DecimalDegree(DecimalStyle),
    /// Degrees, minutes and seconds
    Dms,
}

impl fmt::Display for AxisNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecimalDegree(style) => write!(f, "{style} decimal degree"),
            Self::Dms => write!(f, "degree-minute-second"),
        }
    }
}

/// Render the value in the notation
pub fn encode(value: &PositionValue, notation: AxisNotation) -> String {
    match notation {
        AxisNotation::DecimalDegree(style) => dd::encode(value, style),
        AxisNotation::Dms => dms::encode(value),
    }
}

/// Parse the text into `(whole, fraction)` components of the axis.
///
/// The decimal degree notation accepts both sign styles.
/// The components are not quantized: feed them into
/// [`PositionValue::set_components`].
///
/// # Errors
/// `FormatError` when the text does not match the notation.
pub fn decode(text: &str, notation: AxisNotation, axis: Axis) -> Result<(i32, u32), FormatError> {
    match notation {
        AxisNotation::DecimalDegree(_) => dd::decode(text, axis),
        AxisNotation::Dms => dms::decode(text, axis),
    }
}

/// Apply the hemisphere letter to the parsed whole degrees
fn apply_direction(whole: i32, letter: &str, axis: Axis) -> Result<i32, FormatError> {
    let mut chars = letter.chars();
    let negative = match (chars.next(), chars.next()) {
        (Some(ch), None) => axis.is_negative_letter(ch),
        _ => None,
    }
    .ok_or_else(|| FormatError::Direction {
        found: letter.into(),
        axis,
    })?;

    Ok(if negative { -whole } else { whole })
}
