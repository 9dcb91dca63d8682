//! Hemisphere letters of the two axes

use std::{convert::TryFrom, fmt, ops::Neg};

use thiserror::Error;

/// Implements simple two variants enum associated with the boolean type
/// and parsed from a single (case-insensitive) letter
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl $name {
            /// The letter used in the textual notations
            pub const fn symbol(self) -> char {
                match self {
                    Self::$truthy => $true_ch,
                    Self::$falsy => $false_ch,
                }
            }

            /// Is this the negative half (south or west)?
            pub const fn is_negative(self) -> bool {
                matches!(self, Self::$falsy)
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    Self::$falsy => Self::$truthy,
                    Self::$truthy => Self::$falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        #[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
        #[error("Cannot parse {expected} from {failed:?}")]
        #[allow(missing_docs)]
        pub struct $parse_err {
            failed: char,
            expected: &'static str,
        }

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c.to_ascii_uppercase() {
                    $true_ch => Ok(Self::$truthy),
                    $false_ch => Ok(Self::$falsy),
                    _ => Err($parse_err {
                        failed: c,
                        expected: stringify!($name),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

bool_enum!(
    /// Hemisphere of a latitude
    Pole: North and South; parse from 'N':'S' with ParsePoleError
);

bool_enum!(
    /// Hemisphere of a longitude
    RotationalDirection: East and West; parse from 'E':'W' with ParseRotationalDirectionError
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(Pole::North.symbol(), 'N');
        assert_eq!(RotationalDirection::West.to_string(), "W");
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Pole::try_from('s').unwrap(), Pole::South);
        assert_eq!(
            RotationalDirection::try_from('e').unwrap(),
            RotationalDirection::East
        );
    }

    #[test]
    #[should_panic(expected = "Cannot parse Pole from 'E'")]
    fn pole_is_not_east() {
        let _p = Pole::try_from('E').map_err(|e| e.to_string()).unwrap();
    }

    #[test]
    fn opposite() {
        assert_eq!(-Pole::North, Pole::South);
        assert_eq!(-RotationalDirection::West, RotationalDirection::East);
        assert!(RotationalDirection::from(false).is_negative());
    }
}
