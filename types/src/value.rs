//! Fixed-point storage of one coordinate axis.
//!
//! The value is kept as the signed number of whole degrees
//! and the unsigned decimal fraction in micro-degrees (6 digits).
//! The sign of the whole value is the sign of the entire coordinate,
//! so values in `(-1, 0)` cannot be represented and lose their hemisphere.

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{validate, Axis, ValueError};

/// The number of decimal digits kept in the fraction
pub const FRACTION_DIGITS: usize = 6;

/// Fraction units (micro-degrees) in a whole degree
pub const UNITS_IN_DEGREE: u32 = 1_000_000;

// the last five digits of the fraction that get bumped by one unit
const REPEATED_TAILS: [u32; 3] = [33_333, 66_666, 99_999];
const TAIL_MODULUS: u32 = 100_000;

/// A latitude or a longitude stored as `(whole, fraction)`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionValue {
    axis: Axis,
    whole: i32,
    fraction: u32,
}

impl PositionValue {
    /// Zero value for the axis
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            whole: 0,
            fraction: 0,
        }
    }

    /// Construct from the components (see [`Self::set_components`])
    pub fn with_components(axis: Axis, whole: i32, fraction: u32) -> Self {
        let mut value = Self::new(axis);
        value.set_components(whole, fraction);
        value
    }

    /// Construct from a floating number (see [`Self::set_value`])
    ///
    /// # Errors
    /// The same as for [`Self::set_value`].
    pub fn with_value(axis: Axis, value: f64) -> Result<Self, ValueError> {
        let mut self_ = Self::new(axis);
        self_.set_value(value)?;
        Ok(self_)
    }

    /// The axis cannot be changed after construction
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Signed whole degrees
    pub const fn whole(&self) -> i32 {
        self.whole
    }

    /// Micro-degrees of the fractional part
    pub const fn fraction(&self) -> u32 {
        self.fraction
    }

    /// The pair `(whole, fraction)`
    pub const fn components(&self) -> (i32, u32) {
        (self.whole, self.fraction)
    }

    /// Store the number rounded to 6 decimal digits.
    ///
    /// # Errors
    /// - `NotFinite` for NaN and infinities;
    /// - `WholeOverflow` when the whole part exceeds 32 bits.
    ///
    /// The stored value is not changed on error.
    pub fn set_value(&mut self, value: f64) -> Result<(), ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite(value));
        }

        let fixed = format!("{value:.prec$}", prec = FRACTION_DIGITS);
        let (whole, fraction) = fixed
            .split_once('.')
            .ok_or(ValueError::NotFinite(value))?;

        // "-0" parses into the plain zero here
        let whole = whole
            .parse()
            .map_err(|_| ValueError::WholeOverflow(value))?;
        let fraction = fraction
            .parse()
            .map_err(|_| ValueError::WholeOverflow(value))?;

        self.whole = whole;
        self.fraction = fraction;
        Ok(())
    }

    /// Store the components as is, except for the fractions
    /// ending with `33333`, `66666` or `99999`: those get one more micro-degree
    /// to compensate the truncation when a third of a unit was rendered with 6 digits.
    ///
    /// The increment is never carried into the whole degrees,
    /// so the fraction `999_999` becomes `1_000_000`.
    pub fn set_components(&mut self, whole: i32, fraction: u32) {
        let fraction = if has_repeated_tail(fraction) {
            trace!("{} fraction {fraction} is bumped by one unit", self.axis);
            fraction.saturating_add(1)
        } else {
            fraction
        };

        self.whole = whole;
        self.fraction = fraction;
    }

    /// The value as a floating number, negative when the whole degrees are
    pub fn value(&self) -> f64 {
        let fraction = f64::from(self.fraction) / f64::from(UNITS_IN_DEGREE);
        if self.whole < 0 {
            f64::from(self.whole) - fraction
        } else {
            f64::from(self.whole) + fraction
        }
    }

    /// Is the value inside the axis' legal range
    pub fn is_valid(&self) -> bool {
        validate::is_valid(self.axis, self.whole, self.fraction)
    }
}

/// Only the 6-digit rendering of the fraction counts
fn has_repeated_tail(fraction: u32) -> bool {
    let tail = (fraction % UNITS_IN_DEGREE) % TAIL_MODULUS;
    REPEATED_TAILS.contains(&tail)
}
