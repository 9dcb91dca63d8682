//! The pair of text fields editing one position.
//!
//! The editor owns the latitude and longitude values, renders them into
//! two fields in the active notation and parses the user input back.
//! Out-of-range input is stored anyway and only flagged as invalid.
//!
//! Every text written into a field is reported back as a field change,
//! the same way a UI toolkit emits the change signal for programmatic updates.
//! Programmatic writes arm a [`SuppressionToken`] so that the rendered texts
//! are not mistaken for user edits.

use log::{debug, trace, warn};
use thiserror::Error;

use latlon_types::{validate, Axis, PositionValue, ValueError};

use crate::{
    codec::{self, utm, AxisNotation, FormatError},
    projection::{ConversionError, Projection},
    settings::{DecimalStyle, EditorSettings, Notation},
};

use self::field::Field;
pub use self::{
    field::{FieldRole, FieldState},
    sync::{SuppressionToken, SyncCoordinator},
};

mod field;
mod sync;

/// Why the edit was not applied
#[derive(Debug, Error)]
pub enum EditorError {
    /// The text does not follow the notation; the values are unchanged
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The projection failed; the values and texts are unchanged
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The number cannot be stored; the values are unchanged
    #[error(transparent)]
    Value(#[from] ValueError),
    /// The editor does not accept the user input
    #[error("The {0} field is read-only")]
    ReadOnly(FieldRole),
}

/// Notification about an applied user edit
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PositionEvent {
    /// New latitude in degrees
    LatitudeChanged(f64),
    /// New longitude in degrees
    LongitudeChanged(f64),
    /// Both values became valid (`true`) or one of them became invalid
    ValidityChanged(bool),
}

/// Two text fields editing the latitude and the longitude of one position
#[derive(Debug)]
pub struct PositionEditor<P> {
    latitude: PositionValue,
    longitude: PositionValue,
    settings: EditorSettings,
    fields: [Field; 2],
    projection: P,
    sync: SyncCoordinator,
    events: Vec<PositionEvent>,
}

impl<P: Projection> PositionEditor<P> {
    /// Zero position in the default notation
    pub fn new(projection: P) -> Self {
        Self::with_settings(projection, EditorSettings::default())
    }

    /// Zero position rendered with the given settings
    pub fn with_settings(projection: P, settings: EditorSettings) -> Self {
        let mut editor = Self {
            latitude: PositionValue::new(Axis::Latitude),
            longitude: PositionValue::new(Axis::Longitude),
            settings,
            fields: Default::default(),
            projection,
            sync: SyncCoordinator::new(),
            events: Vec::new(),
        };

        if let Err(err) = editor.render(None) {
            warn!("Cannot render the initial position: {err}");
        }
        editor
    }

    /// Current settings
    pub const fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Active notation
    pub const fn notation(&self) -> Notation {
        self.settings.notation
    }

    /// The projection used for the UTM notation
    pub const fn projection(&self) -> &P {
        &self.projection
    }

    /// Text of the field
    pub fn text(&self, role: FieldRole) -> &str {
        &self.field(role).text
    }

    /// Edit state of the field
    pub fn state(&self, role: FieldRole) -> FieldState {
        self.field(role).state
    }

    /// Stored value of the axis
    pub const fn value(&self, axis: Axis) -> &PositionValue {
        match axis {
            Axis::Latitude => &self.latitude,
            Axis::Longitude => &self.longitude,
        }
    }

    /// The pair `(latitude, longitude)` in degrees
    pub fn position(&self) -> (f64, f64) {
        (self.latitude.value(), self.longitude.value())
    }

    /// Is the axis' value inside its range (the presentation flag)
    pub fn is_valid(&self, axis: Axis) -> bool {
        self.field(axis.into()).valid
    }

    /// Are both values inside their ranges
    pub fn is_position_valid(&self) -> bool {
        Axis::ALL.iter().all(|&axis| self.is_valid(axis))
    }

    /// Drain the notifications about the applied user edits
    pub fn take_events(&mut self) -> Vec<PositionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Store the position and re-render both fields.
    ///
    /// # Errors
    /// - `Value` if some of the numbers cannot be stored (nothing is changed then);
    /// - `Conversion` if the UTM rendering fails (the previous values and texts are kept).
    pub fn set_position(&mut self, latitude: f64, longitude: f64) -> Result<(), EditorError> {
        self.write_and_render(latitude, longitude)
    }

    /// Switch the notation: every field goes idle and gets re-rendered.
    ///
    /// # Errors
    /// `Conversion` when the position cannot be shown in UTM.
    /// The previous notation is kept then.
    pub fn set_notation(&mut self, notation: Notation) -> Result<(), EditorError> {
        let previous = std::mem::replace(&mut self.settings.notation, notation);
        debug!("Notation {previous} -> {notation}");
        self.reset_fields();

        if let Err(err) = self.render(None) {
            warn!("Staying in the {previous} notation: {err}");
            self.settings.notation = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Switch between the signed and directional decimal degrees.
    ///
    /// # Errors
    /// The same as for [`Self::set_notation`].
    pub fn set_decimal_style(&mut self, style: DecimalStyle) -> Result<(), EditorError> {
        debug!("Decimal style {} -> {style}", self.settings.decimal_style);
        self.settings.decimal_style = style;
        self.reset_fields();
        self.render(None)
    }

    /// Accept or reject the user input
    pub fn set_read_only(&mut self, read_only: bool) {
        self.settings.read_only = read_only;
    }

    /// The field gets the focus
    pub fn begin_edit(&mut self, role: FieldRole) {
        let field = self.field_mut(role);
        if field.state == FieldState::Idle {
            field.state = FieldState::Editing;
        }
    }

    /// The user changed the text of the field.
    ///
    /// Decimal degree and DMS input updates the field's axis only,
    /// UTM input updates both axes and re-renders both fields.
    ///
    /// # Errors
    /// - `ReadOnly` for the read-only editor;
    /// - `Format` for the malformed text (the field becomes `Invalid`, the values are unchanged);
    /// - `Conversion` when the UTM zone cannot be resolved.
    pub fn input(&mut self, role: FieldRole, text: &str) -> Result<FieldState, EditorError> {
        if self.settings.read_only {
            return Err(EditorError::ReadOnly(role));
        }

        self.field_mut(role).state = FieldState::Editing;
        self.apply_text(role, text.to_owned())?;
        Ok(self.state(role))
    }

    /// The field loses the focus. Returns the state it had.
    pub fn commit(&mut self, role: FieldRole) -> FieldState {
        let field = self.field_mut(role);
        std::mem::replace(&mut field.state, FieldState::Idle)
    }

    fn field(&self, role: FieldRole) -> &Field {
        &self.fields[role.index()]
    }

    fn field_mut(&mut self, role: FieldRole) -> &mut Field {
        &mut self.fields[role.index()]
    }

    fn value_mut(&mut self, axis: Axis) -> &mut PositionValue {
        match axis {
            Axis::Latitude => &mut self.latitude,
            Axis::Longitude => &mut self.longitude,
        }
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.state = FieldState::Idle;
        }
    }

    /// Both values are written or none
    fn write_pair(&mut self, latitude: f64, longitude: f64) -> Result<(), ValueError> {
        let lat = PositionValue::with_value(Axis::Latitude, latitude)?;
        let lon = PositionValue::with_value(Axis::Longitude, longitude)?;
        self.latitude = lat;
        self.longitude = lon;
        self.refresh_flags();
        debug!("Position set to {lat:?}, {lon:?}");
        Ok(())
    }

    fn refresh_flags(&mut self) {
        for role in FieldRole::ALL {
            let valid = self.value(role.axis()).is_valid();
            self.field_mut(role).valid = valid;
        }
    }

    /// Programmatic joint write followed by the suppressed render pass.
    /// The previous pair is restored if the render fails.
    fn write_and_render(&mut self, latitude: f64, longitude: f64) -> Result<(), EditorError> {
        let previous = (self.latitude, self.longitude);

        let token = self.sync.arm();
        if let Err(err) = self.write_pair(latitude, longitude) {
            self.sync.release(token);
            return Err(err.into());
        }

        if let Err(err) = self.render(Some(token)) {
            debug!("Restoring {previous:?}: {err}");
            (self.latitude, self.longitude) = previous;
            self.refresh_flags();
            return Err(err);
        }
        Ok(())
    }

    fn apply_text(&mut self, role: FieldRole, text: String) -> Result<(), EditorError> {
        self.field_mut(role).text = text;
        self.text_changed(role)
    }

    fn text_changed(&mut self, role: FieldRole) -> Result<(), EditorError> {
        if self.sync.is_suppressing() {
            trace!("Rendered {role} text is not an edit");
            return Ok(());
        }

        if !self.state(role).is_active() {
            return Ok(());
        }

        let was_valid = self.is_position_valid();
        let edited = match self.settings.notation.per_axis(self.settings.decimal_style) {
            Some(notation) => self.edit_axis(role, notation).map(|()| vec![role.axis()]),
            None => self.edit_projected(role).map(|()| Axis::ALL.to_vec()),
        };

        match edited {
            Ok(axes) => {
                for axis in axes {
                    let value = self.value(axis).value();
                    self.events.push(match axis {
                        Axis::Latitude => PositionEvent::LatitudeChanged(value),
                        Axis::Longitude => PositionEvent::LongitudeChanged(value),
                    });
                }

                let valid = self.is_position_valid();
                if valid != was_valid {
                    self.events.push(PositionEvent::ValidityChanged(valid));
                }
                Ok(())
            }
            Err(err) => {
                debug!("Rejected the {role} input: {err}");
                self.field_mut(role).state = FieldState::Invalid;
                Err(err)
            }
        }
    }

    fn edit_axis(&mut self, role: FieldRole, notation: AxisNotation) -> Result<(), EditorError> {
        let axis = role.axis();
        let (whole, fraction) = codec::decode(self.text(role), notation, axis)?;

        let valid = match validate::check(axis, whole, fraction) {
            Ok(()) => true,
            Err(err) => {
                debug!("Storing anyway: {err}");
                false
            }
        };

        self.value_mut(axis).set_components(whole, fraction);
        debug!("{axis} set to {:?}", self.value(axis).components());

        let field = self.field_mut(role);
        field.valid = valid;
        field.state = if valid {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
        Ok(())
    }

    /// Both UTM fields are parsed together and both values are written at once
    fn edit_projected(&mut self, role: FieldRole) -> Result<(), EditorError> {
        let utm = utm::decode(
            self.text(FieldRole::Latitude),
            self.text(FieldRole::Longitude),
        )?;
        let (latitude, longitude) = self
            .projection
            .inverse(utm.northing, utm.easting, &utm.zone)?;

        self.write_and_render(latitude, longitude)?;

        let field = self.field_mut(role);
        field.state = if field.valid {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
        Ok(())
    }

    /// Render both fields from the stored values, releasing the token at the end
    fn render(&mut self, token: Option<SuppressionToken>) -> Result<(), EditorError> {
        let rendered = match self.settings.notation.per_axis(self.settings.decimal_style) {
            Some(notation) => self.render_axes(notation),
            None => self.render_projected(),
        };

        if let Some(token) = token {
            self.sync.release(token);
        }
        rendered
    }

    fn render_axes(&mut self, notation: AxisNotation) -> Result<(), EditorError> {
        for role in FieldRole::ALL {
            let text = codec::encode(self.value(role.axis()), notation);
            self.apply_text(role, text)?;
        }
        Ok(())
    }

    fn render_projected(&mut self) -> Result<(), EditorError> {
        let (latitude, longitude) = self.position();
        let projected = self.projection.forward(latitude, longitude)?;
        let texts = utm::encode(&projected);

        self.apply_text(FieldRole::Latitude, texts.northing)?;
        self.apply_text(FieldRole::Longitude, texts.easting)
    }
}

/// Copy the position of one editor into another one
///
/// # Errors
/// The same as for [`PositionEditor::set_position`] of the target.
pub fn copy_position<P, Q>(
    from: &PositionEditor<P>,
    to: &mut PositionEditor<Q>,
) -> Result<(), EditorError>
where
    P: Projection,
    Q: Projection,
{
    let (latitude, longitude) = from.position();
    to.set_position(latitude, longitude)
}
