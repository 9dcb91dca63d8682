//! Latitude/longitude editing in decimal degrees, DMS and UTM notations.
//!
//! A [`PositionEditor`] keeps the pair of values behind two text fields,
//! renders them in the active [`Notation`] and parses the user input back.
//! The UTM notation goes through a [`Projection`] in both directions.

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// #![warn(unreachable_pub)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use latlon_types::{
    validate, Axis, OutOfRange, Pole, PositionValue, RotationalDirection, ValueError,
    FRACTION_DIGITS, UNITS_IN_DEGREE,
};

pub use codec::{decode, encode, AxisNotation, FormatError};
pub use editor::{
    copy_position, EditorError, FieldRole, FieldState, PositionEditor, PositionEvent,
    SuppressionToken, SyncCoordinator,
};
pub use projection::{ConversionError, Projection, UtmCoordinate, Wgs84Utm};
pub use settings::{DecimalStyle, EditorSettings, Notation, ParseSettingError};

pub mod codec;
mod editor;
mod projection;
mod settings;
