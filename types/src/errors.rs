use thiserror::Error;

use crate::Axis;

/// A number which cannot be stored as a fixed-point position value
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ValueError {
    /// NaN or infinity
    #[error("Cannot store a non-finite number {0} as a position")]
    NotFinite(f64),
    /// The whole degrees do not fit into 32 bits
    #[error("The whole degrees of {0} do not fit into the position value")]
    WholeOverflow(f64),
}

/// The components are outside of the axis' legal envelope.
///
/// This error is never raised on a write: out-of-range values are stored anyway
/// and only marked as invalid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("{axis} {whole}.{fraction:06} is out of range (max is {max} degrees)")]
pub struct OutOfRange {
    /// The axis of the checked value
    pub axis: Axis,
    /// Signed whole degrees
    pub whole: i32,
    /// Micro-degrees of the fraction
    pub fraction: u32,
    /// The largest legal number of whole degrees
    pub max: u32,
}
