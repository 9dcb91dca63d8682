use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::direction::{Pole, RotationalDirection};

/// Which coordinate a value represents
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// North-south position, `-90..=90` degrees
    Latitude,
    /// East-west position, `-180..=180` degrees
    Longitude,
}

impl Axis {
    /// Both axes in the display order
    pub const ALL: [Self; 2] = [Self::Latitude, Self::Longitude];

    /// The largest absolute number of whole degrees
    pub const fn max_degrees(self) -> u32 {
        match self {
            Self::Latitude => 90,
            Self::Longitude => 180,
        }
    }

    /// How many digits the whole degrees occupy when rendered
    pub const fn degree_width(self) -> usize {
        match self {
            Self::Latitude => 2,
            Self::Longitude => 3,
        }
    }

    /// The hemisphere letter for the positive or negative half of the axis
    pub fn direction_letter(self, negative: bool) -> char {
        match self {
            Self::Latitude => Pole::from(!negative).symbol(),
            Self::Longitude => RotationalDirection::from(!negative).symbol(),
        }
    }

    /// Interpret a hemisphere letter of this axis.
    ///
    /// Returns `Some(true)` for the negative half (`S` or `W`),
    /// `None` when the letter does not belong to the axis.
    pub fn is_negative_letter(self, letter: char) -> Option<bool> {
        match self {
            Self::Latitude => Pole::try_from(letter).ok().map(Pole::is_negative),
            Self::Longitude => RotationalDirection::try_from(letter)
                .ok()
                .map(RotationalDirection::is_negative),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        };
        write!(f, "{name}")
    }
}
