pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ARC_SECOND_SIGN: char = '"';
pub(crate) const METRE_SIGN: &str = "m";

pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

// seconds are shown with the centi-second precision
pub(crate) const SECONDS_FD: usize = 2;
pub(crate) const CENTIS_IN_SECOND: u64 = 100;

// the UTM metres are padded up to this number of digits
pub(crate) const METRES_WIDTH: usize = 6;
