//! The map projection used by the UTM notation.
//!
//! The editor only consumes the [`Projection`] trait:
//! forward from the geographic pair into a zone, northing and easting,
//! and the inverse of that.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::wgs84::Wgs84Utm;

mod wgs84;

/// A point projected into a UTM zone
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtmCoordinate {
    /// Two digits of the zone number and the latitude band letter, e.g. `33U`
    pub zone: String,
    /// Metres from the equator (with the false northing in the southern hemisphere)
    pub northing: f64,
    /// Metres from the zone's central meridian plus the false easting
    pub easting: f64,
}

/// The projection cannot resolve the zone or the coordinate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Not a valid zone number (1..=60) followed by a band letter
    #[error("Cannot convert position: malformed UTM zone {0:?}")]
    ZoneLabel(String),
    /// UTM covers the latitudes from 80°S to 84°N
    #[error("Cannot convert position: latitude {0} is outside of the UTM bands")]
    OutsideUtmBands(f64),
    /// NaN or infinity as an input
    #[error("Cannot convert position: non-finite coordinate")]
    NotFinite,
}

/// The forward and inverse UTM projection
pub trait Projection {
    /// Project the geographic position (degrees)
    ///
    /// # Errors
    /// When the position cannot be expressed in UTM.
    fn forward(&self, latitude: f64, longitude: f64) -> Result<UtmCoordinate, ConversionError>;

    /// Find the geographic position (degrees) of the projected point
    ///
    /// # Errors
    /// When the zone is malformed or the metres are not finite.
    fn inverse(&self, northing: f64, easting: f64, zone: &str)
        -> Result<(f64, f64), ConversionError>;
}

impl<P: Projection + ?Sized> Projection for &P {
    fn forward(&self, latitude: f64, longitude: f64) -> Result<UtmCoordinate, ConversionError> {
        (**self).forward(latitude, longitude)
    }

    fn inverse(
        &self,
        northing: f64,
        easting: f64,
        zone: &str,
    ) -> Result<(f64, f64), ConversionError> {
        (**self).inverse(northing, easting, zone)
    }
}
