//! Per-editor display settings

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::AxisNotation;

/// The textual notation of an editor
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// `+52.520000°` or `N 52.520000°`
    #[default]
    DecimalDegree,
    /// `N 52° 31' 12.00"`
    Dms,
    /// `33U 5820300 m` and `392200 m`
    Utm,
}

impl Notation {
    /// All the notations in the selection order
    pub const ALL: [Self; 3] = [Self::DecimalDegree, Self::Dms, Self::Utm];

    /// The per-axis codec of the notation.
    /// UTM has none: its fields are derived jointly from both axes.
    pub const fn per_axis(self, style: DecimalStyle) -> Option<AxisNotation> {
        match self {
            Self::DecimalDegree => Some(AxisNotation::DecimalDegree(style)),
            Self::Dms => Some(AxisNotation::Dms),
            Self::Utm => None,
        }
    }
}

/// How the hemisphere of a decimal degree is shown
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecimalStyle {
    /// `+` or `-` in front of the number
    #[default]
    Signed,
    /// A hemisphere letter and a space in front of the number
    Directional,
}

/// The editor configuration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorSettings {
    /// Active notation of both fields
    pub notation: Notation,
    /// Sign style of the decimal degree notation
    pub decimal_style: DecimalStyle,
    /// Reject the user input
    pub read_only: bool,
}

impl EditorSettings {
    /// Settings with the given notation and the defaults for the rest
    pub fn with_notation(notation: Notation) -> Self {
        Self {
            notation,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} {value:?}")]
/// The setting name is not recognized
pub struct ParseSettingError {
    kind: &'static str,
    value: String,
}

impl FromStr for Notation {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dd" | "decimal" | "decimal-degree" => Ok(Self::DecimalDegree),
            "dms" => Ok(Self::Dms),
            "utm" => Ok(Self::Utm),
            _ => Err(ParseSettingError {
                kind: "notation",
                value: s.into(),
            }),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DecimalDegree => "dd",
            Self::Dms => "dms",
            Self::Utm => "utm",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DecimalStyle {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signed" | "sign" => Ok(Self::Signed),
            "directional" | "direction" => Ok(Self::Directional),
            _ => Err(ParseSettingError {
                kind: "decimal style",
                value: s.into(),
            }),
        }
    }
}

impl fmt::Display for DecimalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Signed => "signed",
            Self::Directional => "directional",
        };
        write!(f, "{name}")
    }
}
