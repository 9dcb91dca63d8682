use thiserror::Error;

use latlon_types::Axis;

/// The text does not follow the grammar of the notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Nothing to parse
    #[error("Cannot parse position: empty string provided")]
    Empty,
    /// The notation consists of another number of space-separated parts
    #[error("Cannot parse position: expected {expected} tokens, found {found}")]
    TokenCount {
        /// Parts in the notation
        expected: usize,
        /// Parts in the text
        found: usize,
    },
    /// A number without its unit marker
    #[error("Cannot parse position: {token:?} does not end with {unit:?}")]
    MissingUnit {
        /// The offending part of the text
        token: String,
        /// The expected marker
        unit: char,
    },
    /// A part of the text is not a number
    #[error("Cannot parse position: {0:?} is not a number")]
    NotNumeric(String),
    /// The hemisphere letter is not one of the axis
    #[error("Cannot parse position: {found:?} is not a {axis} hemisphere")]
    Direction {
        /// The offending part of the text
        found: String,
        /// The axis being parsed
        axis: Axis,
    },
    /// Arc minutes or seconds outside of `[0, 60)`
    #[error("Cannot parse position: {token:?} is not in range [0..60)")]
    ArcRange {
        /// The offending part of the text
        token: String,
    },
    /// The text does not match the notation's layout
    #[error("Cannot parse position: {text:?} is not a {notation} notation")]
    Grammar {
        /// Name of the notation
        notation: &'static str,
        /// The whole text
        text: String,
    },
}
