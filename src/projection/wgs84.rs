//! Transverse Mercator on the WGS84 ellipsoid with the UTM zoning
//! <https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system>
//!
//! The series are the classic ones from
//! Snyder, "Map Projections: A Working Manual" (USGS, 1987), pp. 60-64.

use std::{fmt, str::FromStr};

use num_traits::ToPrimitive;

use super::{ConversionError, Projection, UtmCoordinate};

// Semi-major axis a
const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
const WGS84_F: f64 = 1.0 / 298.257223563;
// First eccentricity squared
const ECC_SQ: f64 = WGS84_F * (2.0 - WGS84_F);
// Second eccentricity squared
const ECC_PRIME_SQ: f64 = ECC_SQ / (1.0 - ECC_SQ);

// UTM central scale factor
const UTM_K0: f64 = 9996.0 / 10_000.;
const FALSE_EASTING: f64 = 500_000.;
const FALSE_NORTHING: f64 = 10_000_000.;

const ZONE_WIDTH_DEG: f64 = 6.;
const MAX_ZONE: u8 = 60;

// 8 degrees each, the last one (X) is 12 degrees
const BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";
const BAND_HEIGHT_DEG: f64 = 8.;
const MIN_LATITUDE: f64 = -80.;
const MAX_LATITUDE: f64 = 84.;

/// Standard WGS84 UTM projection
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Wgs84Utm;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Zone {
    number: u8,
    band: char,
}

/// Longitude into `[-180, 180)`
fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.).rem_euclid(360.) - 180.
}

impl Zone {
    fn locate(latitude: f64, longitude: f64) -> Result<Self, ConversionError> {
        if !(latitude.is_finite() && longitude.is_finite()) {
            return Err(ConversionError::NotFinite);
        }

        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(ConversionError::OutsideUtmBands(latitude));
        }

        let longitude = wrap_longitude(longitude);
        let number = ((longitude + 180.) / ZONE_WIDTH_DEG)
            .floor()
            .to_u8()
            .ok_or(ConversionError::NotFinite)?;
        // the wrapped 180 meridian can round into the 61st zone
        let mut number = (number + 1).min(MAX_ZONE);

        // south-western Norway
        if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
            number = 32;
        }

        // Svalbard
        if (72.0..=MAX_LATITUDE).contains(&latitude) {
            number = match longitude {
                lon if (0.0..9.0).contains(&lon) => 31,
                lon if (9.0..21.0).contains(&lon) => 33,
                lon if (21.0..33.0).contains(&lon) => 35,
                lon if (33.0..42.0).contains(&lon) => 37,
                _ => number,
            };
        }

        let last_band = BANDS.len() - 1;
        let band = ((latitude - MIN_LATITUDE) / BAND_HEIGHT_DEG)
            .floor()
            .to_usize()
            .map_or(last_band, |idx| idx.min(last_band));
        let band = BANDS
            .chars()
            .nth(band)
            .ok_or(ConversionError::OutsideUtmBands(latitude))?;

        Ok(Self { number, band })
    }

    fn central_meridian(self) -> f64 {
        f64::from(self.number) * ZONE_WIDTH_DEG - 180. - ZONE_WIDTH_DEG / 2.
    }

    fn is_southern(self) -> bool {
        self.band < 'N'
    }
}

impl FromStr for Zone {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConversionError::ZoneLabel(s.into());

        if s.len() != 3 || !s.is_ascii() {
            return Err(malformed());
        }

        let (number, band) = s.split_at(2);
        let number: u8 = number.parse().map_err(|_| malformed())?;
        if !(1..=MAX_ZONE).contains(&number) {
            return Err(malformed());
        }

        let band = band
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| BANDS.contains(*c))
            .ok_or_else(malformed)?;

        Ok(Self { number, band })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{}", self.number, self.band)
    }
}

/// Distance along the meridian from the equator to the latitude (radians)
fn meridian_arc(lat: f64) -> f64 {
    let e4 = ECC_SQ * ECC_SQ;
    let e6 = e4 * ECC_SQ;

    WGS84_A
        * ((1. - ECC_SQ / 4. - 3. * e4 / 64. - 5. * e6 / 256.) * lat
            - (3. * ECC_SQ / 8. + 3. * e4 / 32. + 45. * e6 / 1024.) * (2. * lat).sin()
            + (15. * e4 / 256. + 45. * e6 / 1024.) * (4. * lat).sin()
            - (35. * e6 / 3072.) * (6. * lat).sin())
}

impl Projection for Wgs84Utm {
    fn forward(&self, latitude: f64, longitude: f64) -> Result<UtmCoordinate, ConversionError> {
        let zone = Zone::locate(latitude, longitude)?;

        let lat = latitude.to_radians();
        let lon_diff = (wrap_longitude(longitude) - zone.central_meridian()).to_radians();

        let (sin, cos) = lat.sin_cos();
        let tan = lat.tan();
        let n = WGS84_A / (1. - ECC_SQ * sin * sin).sqrt();
        let t = tan * tan;
        let c = ECC_PRIME_SQ * cos * cos;
        let a = cos * lon_diff;

        let easting = UTM_K0
            * n
            * (a + (1. - t + c) * a.powi(3) / 6.
                + (5. - 18. * t + t * t + 72. * c - 58. * ECC_PRIME_SQ) * a.powi(5) / 120.)
            + FALSE_EASTING;

        let mut northing = UTM_K0
            * (meridian_arc(lat)
                + n * tan
                    * (a * a / 2.
                        + (5. - t + 9. * c + 4. * c * c) * a.powi(4) / 24.
                        + (61. - 58. * t + t * t + 600. * c - 330. * ECC_PRIME_SQ) * a.powi(6)
                            / 720.));
        if zone.is_southern() {
            northing += FALSE_NORTHING;
        }

        Ok(UtmCoordinate {
            zone: zone.to_string(),
            northing,
            easting,
        })
    }

    fn inverse(
        &self,
        northing: f64,
        easting: f64,
        zone: &str,
    ) -> Result<(f64, f64), ConversionError> {
        let zone: Zone = zone.parse()?;
        if !(northing.is_finite() && easting.is_finite()) {
            return Err(ConversionError::NotFinite);
        }

        let x = easting - FALSE_EASTING;
        let y = if zone.is_southern() {
            northing - FALSE_NORTHING
        } else {
            northing
        };

        let e4 = ECC_SQ * ECC_SQ;
        let e6 = e4 * ECC_SQ;
        let root = (1. - ECC_SQ).sqrt();
        let e1 = (1. - root) / (1. + root);

        let mu = y / UTM_K0 / (WGS84_A * (1. - ECC_SQ / 4. - 3. * e4 / 64. - 5. * e6 / 256.));
        let phi1 = mu
            + (3. * e1 / 2. - 27. * e1.powi(3) / 32.) * (2. * mu).sin()
            + (21. * e1 * e1 / 16. - 55. * e1.powi(4) / 32.) * (4. * mu).sin()
            + (151. * e1.powi(3) / 96.) * (6. * mu).sin();

        let (sin1, cos1) = phi1.sin_cos();
        let tan1 = phi1.tan();
        let denom = 1. - ECC_SQ * sin1 * sin1;
        let n1 = WGS84_A / denom.sqrt();
        let t1 = tan1 * tan1;
        let c1 = ECC_PRIME_SQ * cos1 * cos1;
        let r1 = WGS84_A * (1. - ECC_SQ) / denom.powf(1.5);
        let d = x / (n1 * UTM_K0);

        let lat = phi1
            - (n1 * tan1 / r1)
                * (d * d / 2.
                    - (5. + 3. * t1 + 10. * c1 - 4. * c1 * c1 - 9. * ECC_PRIME_SQ) * d.powi(4)
                        / 24.
                    + (61. + 90. * t1 + 298. * c1 + 45. * t1 * t1
                        - 252. * ECC_PRIME_SQ
                        - 3. * c1 * c1)
                        * d.powi(6)
                        / 720.);
        let lon = (d - (1. + 2. * t1 + c1) * d.powi(3) / 6.
            + (5. - 2. * c1 + 28. * t1 - 3. * c1 * c1 + 8. * ECC_PRIME_SQ + 24. * t1 * t1)
                * d.powi(5)
                / 120.)
            / cos1;

        Ok((
            lat.to_degrees(),
            wrap_longitude(zone.central_meridian() + lon.to_degrees()),
        ))
    }
}
