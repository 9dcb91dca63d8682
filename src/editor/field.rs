use std::fmt;

use latlon_types::Axis;

/// Which of the two text fields of an editor.
///
/// In the UTM notation the latitude field shows the zone with the northing
/// and the longitude field shows the easting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// The first field
    Latitude,
    /// The second field
    Longitude,
}

impl FieldRole {
    /// Both fields in the display order
    pub const ALL: [Self; 2] = [Self::Latitude, Self::Longitude];

    /// The axis rendered in the field (outside of the UTM notation)
    pub const fn axis(self) -> Axis {
        match self {
            Self::Latitude => Axis::Latitude,
            Self::Longitude => Axis::Longitude,
        }
    }

    pub(super) const fn index(self) -> usize {
        match self {
            Self::Latitude => 0,
            Self::Longitude => 1,
        }
    }
}

impl From<Axis> for FieldRole {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Latitude => Self::Latitude,
            Axis::Longitude => Self::Longitude,
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.axis())
    }
}

/// Edit state of a field.
///
/// `Idle -> Editing -> {Valid, Invalid} -> Idle` on commit;
/// a notation change puts every field back to `Idle`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FieldState {
    /// Not focused, shows the rendered value
    #[default]
    Idle,
    /// The user is typing
    Editing,
    /// The last input was parsed and is inside the range
    Valid,
    /// The last input was malformed or out of range
    Invalid,
}

impl FieldState {
    /// Does the field take the user input (focused)?
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone)]
pub(super) struct Field {
    pub(super) text: String,
    pub(super) state: FieldState,
    pub(super) valid: bool,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            text: String::new(),
            state: FieldState::Idle,
            valid: true,
        }
    }
}
