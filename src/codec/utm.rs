//! UTM notation of the two fields: `33U 5820072 m` and `391779 m`.
//!
//! The first field holds the zone label and the northing,
//! the second one holds the easting. Both are whole metres
//! padded with zeros up to 6 digits.

use lazy_static::lazy_static;
use regex::Regex;

use crate::projection::UtmCoordinate;

use super::{
    consts::{METRES_WIDTH, METRE_SIGN},
    FormatError,
};

lazy_static! {
    static ref RE_NORTHING: Regex = Regex::new(
        r"(?x)
        ^
        (?P<zone>[0-9A-Za-z]{3})        # zone number and band, checked by the projection
        \x20
        (?P<northing>\d{1,8})
        \x20m
        $
        "
    )
    .expect("Northing regex is valid");
    static ref RE_EASTING: Regex = Regex::new(
        r"(?x)
        ^
        (?P<easting>\d{1,7})
        \x20m
        $
        "
    )
    .expect("Easting regex is valid");
}

/// The rendered pair of the UTM fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmTexts {
    /// Zone label and the northing
    pub northing: String,
    /// The easting
    pub easting: String,
}

/// Render the projected coordinate into the two fields
pub fn encode(coordinate: &UtmCoordinate) -> UtmTexts {
    UtmTexts {
        northing: format!(
            "{} {:0width$.0} {METRE_SIGN}",
            coordinate.zone,
            coordinate.northing,
            width = METRES_WIDTH
        ),
        easting: format!(
            "{:0width$.0} {METRE_SIGN}",
            coordinate.easting,
            width = METRES_WIDTH
        ),
    }
}

fn metres(
    text: &str,
    capture: Option<regex::Match<'_>>,
    notation: &'static str,
) -> Result<f64, FormatError> {
    let digits = capture.ok_or_else(|| FormatError::Grammar {
        notation,
        text: text.into(),
    })?;
    digits
        .as_str()
        .parse()
        .map_err(|_| FormatError::NotNumeric(digits.as_str().into()))
}

/// Parse both fields together.
///
/// # Errors
/// - `Empty` if any of the fields is blank;
/// - `Grammar` if a field does not follow its layout.
///
/// The zone label is only checked for its length here.
pub fn decode(northing_text: &str, easting_text: &str) -> Result<UtmCoordinate, FormatError> {
    const NORTHING: &str = "UTM northing";
    const EASTING: &str = "UTM easting";

    let northing_text = northing_text.trim();
    let easting_text = easting_text.trim();
    if northing_text.is_empty() || easting_text.is_empty() {
        return Err(FormatError::Empty);
    }

    let north = RE_NORTHING
        .captures(northing_text)
        .ok_or_else(|| FormatError::Grammar {
            notation: NORTHING,
            text: northing_text.into(),
        })?;
    let east = RE_EASTING
        .captures(easting_text)
        .ok_or_else(|| FormatError::Grammar {
            notation: EASTING,
            text: easting_text.into(),
        })?;

    let zone = north.name("zone").map_or("", |m| m.as_str()).to_owned();
    let northing = metres(northing_text, north.name("northing"), NORTHING)?;
    let easting = metres(easting_text, east.name("easting"), EASTING)?;

    Ok(UtmCoordinate {
        zone,
        northing,
        easting,
    })
}
