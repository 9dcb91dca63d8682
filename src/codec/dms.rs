//! Degree-minute-second notation: `N 52° 31' 12.00"`, `W 013° 24' 18.00"`.
//!
//! The fraction is rounded to whole centi-seconds before splitting it
//! into minutes and seconds. The rounding carries into the minutes and the degrees,
//! so every rendered text parses back.

use log::trace;
use num_traits::ToPrimitive;

use latlon_types::{Axis, PositionValue, UNITS_IN_DEGREE};

use super::{
    apply_direction,
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, CENTIS_IN_SECOND, DEGREE_SIGN, MINUTES_IN_DEGREE,
        SECONDS_FD, SECONDS_IN_MINUTE,
    },
    FormatError,
};

// direction, degrees, minutes, seconds
const TOKENS: usize = 4;

fn seconds_in_degree() -> f64 {
    f64::from(MINUTES_IN_DEGREE) * f64::from(SECONDS_IN_MINUTE)
}

/// Render the value as the hemisphere letter, degrees, minutes and seconds
pub fn encode(value: &PositionValue) -> String {
    let axis = value.axis();
    let (whole, fraction) = value.components();
    let direction = axis.direction_letter(whole < 0);

    let units = u64::from(UNITS_IN_DEGREE);
    let centis_in_minute = u64::from(SECONDS_IN_MINUTE) * CENTIS_IN_SECOND;
    let centis_in_degree = u64::from(MINUTES_IN_DEGREE) * centis_in_minute;
    let centis = (u64::from(fraction) * centis_in_degree + units / 2) / units;

    let deg = u64::from(whole.unsigned_abs()) + centis / centis_in_degree;
    let centis = centis % centis_in_degree;
    let minutes = centis / centis_in_minute;
    let centis = centis % centis_in_minute;

    format!(
        "{direction} {deg:0deg_width$}{DEGREE_SIGN} {minutes:02}{ARC_MINUTE_SIGN} {sec:02}.{sub:0prec$}{ARC_SECOND_SIGN}",
        deg_width = axis.degree_width(),
        sec = centis / CENTIS_IN_SECOND,
        sub = centis % CENTIS_IN_SECOND,
        prec = SECONDS_FD,
    )
}

/// Strip the unit marker off the number
fn unit_value(token: &str, unit: char) -> Result<&str, FormatError> {
    token
        .strip_suffix(unit)
        .ok_or_else(|| FormatError::MissingUnit {
            token: token.into(),
            unit,
        })
}

fn check_arc(value: f64, token: &str) -> Result<f64, FormatError> {
    let limit = f64::from(SECONDS_IN_MINUTE);
    if (0.0..limit).contains(&value) {
        Ok(value)
    } else {
        Err(FormatError::ArcRange {
            token: token.into(),
        })
    }
}

/// Parse the four space-separated parts of the notation.
///
/// The fraction is the rounded number of micro-degrees in the minutes and seconds.
///
/// # Errors
/// - `TokenCount` if the text is not made of 4 parts;
/// - `MissingUnit` if some number lacks its `°`, `'` or `"` sign;
/// - `NotNumeric` for the malformed numbers;
/// - `ArcRange` for minutes or seconds not in `[0, 60)` (both may be fractional);
/// - `Direction` if the letter does not belong to the axis.
pub fn decode(text: &str, axis: Axis) -> Result<(i32, u32), FormatError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [direction, degrees, minutes, seconds] = tokens.as_slice() else {
        if tokens.is_empty() {
            return Err(FormatError::Empty);
        }
        return Err(FormatError::TokenCount {
            expected: TOKENS,
            found: tokens.len(),
        });
    };

    let deg_str = unit_value(degrees, DEGREE_SIGN)?;
    let min_str = unit_value(minutes, ARC_MINUTE_SIGN)?;
    let sec_str = unit_value(seconds, ARC_SECOND_SIGN)?;

    let whole: u16 = deg_str
        .parse()
        .map_err(|_| FormatError::NotNumeric((*degrees).into()))?;
    let arc_minutes: f64 = min_str
        .parse()
        .map_err(|_| FormatError::NotNumeric((*minutes).into()))?;
    let arc_seconds: f64 = sec_str
        .parse()
        .map_err(|_| FormatError::NotNumeric((*seconds).into()))?;

    let arc_minutes = check_arc(arc_minutes, minutes)?;
    let arc_seconds = check_arc(arc_seconds, seconds)?;

    let fraction = (arc_minutes / f64::from(MINUTES_IN_DEGREE) + arc_seconds / seconds_in_degree())
        * f64::from(UNITS_IN_DEGREE);
    let fraction = fraction
        .round()
        .to_u32()
        .ok_or_else(|| FormatError::NotNumeric(text.into()))?;

    let whole = apply_direction(i32::from(whole), direction, axis)?;
    trace!("{text:?} parsed as {axis} ({whole}, {fraction})");
    Ok((whole, fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_degree() {
        let lat = PositionValue::with_components(Axis::Latitude, 10, 500_000);
        assert_eq!(encode(&lat), "N 10° 30' 00.00\"");
    }

    #[test]
    fn western_longitude() {
        let lon = PositionValue::with_components(Axis::Longitude, -122, 427_478);
        assert_eq!(encode(&lon), "W 122° 25' 38.92\"");
    }

    #[test]
    fn southern_latitude() {
        let lat = PositionValue::with_components(Axis::Latitude, -33, 450_000);
        assert_eq!(encode(&lat), "S 33° 27' 00.00\"");
    }

    #[test]
    fn eastern_padding() {
        let lon = PositionValue::with_components(Axis::Longitude, 5, 0);
        assert_eq!(encode(&lon), "E 005° 00' 00.00\"");
    }

    #[test]
    fn almost_a_minute() {
        let lat = PositionValue::with_components(Axis::Latitude, 1, 999_998);
        assert_eq!(encode(&lat), "N 01° 59' 59.99\"");
    }

    #[test]
    fn rounding_carries_into_minutes() {
        let lat = PositionValue::with_components(Axis::Latitude, 1, 16_666);
        assert_eq!(encode(&lat), "N 01° 01' 00.00\"");

        let lat = PositionValue::with_components(Axis::Latitude, -1, 516_666);
        assert_eq!(encode(&lat), "S 01° 31' 00.00\"");
    }

    #[test]
    fn overflowed_fraction_renders_next_degree() {
        let lon = PositionValue::with_components(Axis::Longitude, -10, 999_999);
        assert_eq!(lon.fraction(), 1_000_000);
        assert_eq!(encode(&lon), "W 011° 00' 00.00\"");
    }

    #[test]
    fn parse_fractional_minutes() {
        assert_eq!(
            decode("N 10° 30.5' 00.00\"", Axis::Latitude).unwrap(),
            (10, 508_333)
        );
    }

    #[test]
    fn parse_western() {
        assert_eq!(
            decode("W 122° 25' 38.92\"", Axis::Longitude).unwrap(),
            (-122, 427_478)
        );
    }

    #[test]
    fn parse_lowercase_direction() {
        assert_eq!(
            decode("s 33° 27' 00.00\"", Axis::Latitude).unwrap(),
            (-33, 450_000)
        );
    }

    #[test]
    fn parse_integer_seconds() {
        assert_eq!(decode("N 59° 56' 15\"", Axis::Latitude).unwrap(), (59, 937_500));
    }

    #[test]
    fn missing_seconds() {
        assert_eq!(
            decode("N 10° 30'", Axis::Latitude),
            Err(FormatError::TokenCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn missing_degree_sign() {
        assert_eq!(
            decode("N 10 30' 00.00\"", Axis::Latitude),
            Err(FormatError::MissingUnit {
                token: "10".into(),
                unit: '°'
            })
        );
    }

    #[test]
    #[should_panic(expected = "MissingUnit")]
    fn missing_second_sign() {
        let _c = decode("N 10° 30' 00.00", Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "NotNumeric")]
    fn not_a_number() {
        let _c = decode("N 1x° 30' 00.00\"", Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "NotNumeric")]
    fn negative_degrees() {
        let _c = decode("N -10° 30' 00.00\"", Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcRange")]
    fn too_many_minutes() {
        let _c = decode("N 10° 75' 00.00\"", Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcRange")]
    fn too_many_seconds() {
        let _c = decode("N 10° 15' 60.00\"", Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcRange")]
    fn infinite_seconds() {
        let _c = decode("N 10° 15' inf\"", Axis::Latitude).unwrap();
    }

    #[test]
    #[should_panic(expected = "Direction")]
    fn foreign_direction() {
        let _c = decode("E 10° 15' 00.00\"", Axis::Latitude).unwrap();
    }

    #[test]
    fn round_trip_within_centi_second() {
        // one centi-second is ~2.8 micro-degrees
        for whole in [-179, -90, -45, -1, 0, 1, 33, 89, 120, 180] {
            for fraction in [0, 1, 16_667, 250_000, 427_478, 500_001, 937_500, 999_000] {
                let value = PositionValue::with_components(Axis::Longitude, whole, fraction);
                let (parsed_whole, parsed_fraction) =
                    decode(&encode(&value), Axis::Longitude).unwrap();
                assert_eq!(parsed_whole, value.whole());
                let diff = i64::from(parsed_fraction) - i64::from(value.fraction());
                assert!(diff.abs() <= 3, "{value:?} -> {parsed_fraction}");
            }
        }
    }

    #[test]
    fn round_trip_near_whole_minutes() {
        for fraction in [16_666, 516_666, 999_999, 983_333, 999_998] {
            for whole in [-1, 0, 1, 89] {
                let value = PositionValue::with_components(Axis::Latitude, whole, fraction);
                let text = encode(&value);
                let (parsed_whole, parsed_fraction) = decode(&text, Axis::Latitude).unwrap();

                let parsed =
                    PositionValue::with_components(Axis::Latitude, parsed_whole, parsed_fraction);
                assert!(
                    (parsed.value() - value.value()).abs() < 3e-6,
                    "{value:?} -> {text} -> {parsed:?}"
                );
            }
        }
    }
}
