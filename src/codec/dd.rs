//! Decimal degree notation: `+52.520000°`, `-013.405000°`, `N 52.520000°`, `W 013.405000°`.
//!
//! The whole degrees are padded to 2 (latitude) or 3 (longitude) digits,
//! the fraction is always shown with 6 digits.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use latlon_types::{Axis, PositionValue, FRACTION_DIGITS};

use crate::settings::DecimalStyle;

use super::{apply_direction, consts::DEGREE_SIGN, FormatError};

const NOTATION: &str = "decimal degree";

lazy_static! {
    static ref RE_DECIMAL: Regex = Regex::new(
        r"(?x)                              # enables verbose mode (to allow these comments)
        ^                                       # match the whole line from the start
        (?:
            (?P<sign>[-+])                          # the sign without the space
            |
            (?P<dir>[A-Za-z])\x20?                  # or the hemisphere letter with an optional space
        )
        (?P<whole>\d{1,3})                      # whole degrees, the range is checked elsewhere
        \.
        (?P<fract>\d{0,6})                      # up to 6 decimal digits
        $                                       # match the whole line till the end
        "
    )
    .expect("Decimal degree regex is valid");
}

/// Render the value with the sign or the hemisphere letter
pub fn encode(value: &PositionValue, style: DecimalStyle) -> String {
    let axis = value.axis();
    let negative = value.whole() < 0;
    let width = axis.degree_width() + 1 + FRACTION_DIGITS;
    // re-rendering the float carries the overflowed fraction into the degrees
    let number = format!(
        "{:0width$.prec$}",
        value.value().abs(),
        prec = FRACTION_DIGITS
    );

    match style {
        DecimalStyle::Signed => {
            let sign = if negative { '-' } else { '+' };
            format!("{sign}{number}{DEGREE_SIGN}")
        }
        DecimalStyle::Directional => {
            let direction = axis.direction_letter(negative);
            format!("{direction} {number}{DEGREE_SIGN}")
        }
    }
}

/// Parse the signed or directional decimal degree.
///
/// Fractions shorter than 6 digits are padded with zeros on the right,
/// so `12.5°` is `(12, 500_000)`.
///
/// # Errors
/// - `Empty` for the blank text;
/// - `MissingUnit` without the trailing degree sign;
/// - `Grammar` if the number is malformed;
/// - `Direction` if the letter does not belong to the axis.
pub fn decode(text: &str, axis: Axis) -> Result<(i32, u32), FormatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormatError::Empty);
    }

    let body = text
        .strip_suffix(DEGREE_SIGN)
        .ok_or_else(|| FormatError::MissingUnit {
            token: text.into(),
            unit: DEGREE_SIGN,
        })?;

    let capture = RE_DECIMAL
        .captures(body)
        .ok_or_else(|| FormatError::Grammar {
            notation: NOTATION,
            text: text.into(),
        })?;

    let whole = capture.name("whole").map_or("", |m| m.as_str());
    let whole: i32 = whole
        .parse()
        .map_err(|_| FormatError::NotNumeric(whole.into()))?;

    let whole = match (capture.name("sign"), capture.name("dir")) {
        (Some(sign), _) if sign.as_str() == "-" => -whole,
        (Some(_), _) => whole,
        (None, Some(letter)) => apply_direction(whole, letter.as_str(), axis)?,
        (None, None) => {
            return Err(FormatError::Grammar {
                notation: NOTATION,
                text: text.into(),
            })
        }
    };

    let fract = capture.name("fract").map_or("", |m| m.as_str());
    let fract = format!("{:0<width$}", fract, width = FRACTION_DIGITS);
    let fraction = fract
        .parse()
        .map_err(|_| FormatError::NotNumeric(fract.clone()))?;

    trace!("{text:?} parsed as {axis} ({whole}, {fraction})");
    Ok((whole, fraction))
}
