use std::cell::Cell;

use assert_approx_eq::assert_approx_eq;

use latlon::{
    copy_position, Axis, ConversionError, EditorError, EditorSettings, FieldRole, FieldState,
    Notation, PositionEditor, PositionEvent, Projection, UtmCoordinate, Wgs84Utm,
};

/// Counts the projection calls made by the editor
#[derive(Debug, Default)]
struct Probe {
    forward: Cell<usize>,
    inverse: Cell<usize>,
}

impl Probe {
    fn calls(&self) -> (usize, usize) {
        (self.forward.get(), self.inverse.get())
    }

    fn reset(&self) {
        self.forward.set(0);
        self.inverse.set(0);
    }
}

impl Projection for Probe {
    fn forward(&self, latitude: f64, longitude: f64) -> Result<UtmCoordinate, ConversionError> {
        self.forward.set(self.forward.get() + 1);
        Wgs84Utm.forward(latitude, longitude)
    }

    fn inverse(
        &self,
        northing: f64,
        easting: f64,
        zone: &str,
    ) -> Result<(f64, f64), ConversionError> {
        self.inverse.set(self.inverse.get() + 1);
        Wgs84Utm.inverse(northing, easting, zone)
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn utm_editor(probe: &Probe) -> PositionEditor<&Probe> {
    let editor = PositionEditor::with_settings(probe, EditorSettings::with_notation(Notation::Utm));
    probe.reset();
    editor
}

#[test]
fn programmatic_write_projects_once() {
    init_logger();
    let probe = Probe::default();
    let mut editor = utm_editor(&probe);

    editor.set_position(52.52, 13.405).unwrap();
    assert_eq!(probe.calls(), (1, 0));
    assert_eq!(editor.text(FieldRole::Latitude), "33U 5820072 m");
    assert_eq!(editor.text(FieldRole::Longitude), "391779 m");
    assert!(editor.take_events().is_empty());
}

#[test]
fn programmatic_write_while_editing_projects_once() {
    init_logger();
    let probe = Probe::default();
    let mut editor = utm_editor(&probe);

    editor.begin_edit(FieldRole::Latitude);
    editor.begin_edit(FieldRole::Longitude);
    editor.set_position(-33.45, -70.666_667).unwrap();

    assert_eq!(probe.calls(), (1, 0));
    assert_eq!(editor.state(FieldRole::Latitude), FieldState::Editing);
    assert!(editor.text(FieldRole::Latitude).starts_with("19H "));
    assert!(editor.take_events().is_empty());
}

#[test]
fn user_utm_edit_round_trips_once() {
    init_logger();
    let probe = Probe::default();
    let mut editor = utm_editor(&probe);
    editor.set_position(52.52, 13.405).unwrap();
    probe.reset();

    // put back the very same texts
    let northing = editor.text(FieldRole::Latitude).to_owned();
    let state = editor.input(FieldRole::Latitude, &northing).unwrap();

    assert_eq!(state, FieldState::Valid);
    assert_eq!(probe.calls(), (1, 1));
    assert_eq!(editor.text(FieldRole::Latitude), northing);

    let (lat, lon) = editor.position();
    assert_approx_eq!(lat, 52.52, 1e-4);
    assert_approx_eq!(lon, 13.405, 1e-4);
}

#[test]
fn malformed_utm_does_not_project() {
    init_logger();
    let probe = Probe::default();
    let mut editor = utm_editor(&probe);
    editor.set_position(52.52, 13.405).unwrap();
    probe.reset();

    let err = editor
        .input(FieldRole::Longitude, "391779")
        .unwrap_err();
    assert!(matches!(err, EditorError::Format(_)));
    assert_eq!(probe.calls(), (0, 0));
    assert_eq!(editor.state(FieldRole::Longitude), FieldState::Invalid);
    assert_approx_eq!(editor.position().0, 52.52);
}

#[test]
fn unrenderable_utm_edit_is_rolled_back() {
    init_logger();
    let probe = Probe::default();
    let mut editor = utm_editor(&probe);
    editor.set_position(52.52, 13.405).unwrap();
    probe.reset();

    let err = editor
        .input(FieldRole::Latitude, "33X 9900000 m")
        .unwrap_err();
    assert!(matches!(
        err,
        EditorError::Conversion(ConversionError::OutsideUtmBands(_))
    ));
    assert_eq!(probe.calls(), (1, 1));
    assert_eq!(editor.value(Axis::Latitude).components(), (52, 520_000));
    assert_eq!(editor.value(Axis::Longitude).components(), (13, 405_000));
    assert_eq!(editor.text(FieldRole::Longitude), "391779 m");
    assert!(editor.take_events().is_empty());

    // the next valid edit goes through as usual
    let state = editor.input(FieldRole::Latitude, "33U 5820072 m").unwrap();
    assert_eq!(state, FieldState::Valid);
    assert_approx_eq!(editor.position().0, 52.52, 1e-4);
}

#[test]
fn dms_round_trip_near_whole_minute() {
    init_logger();
    let mut editor = PositionEditor::new(Wgs84Utm);
    let _ = editor.input(FieldRole::Latitude, "+01.016666°").unwrap();
    let _ = editor.commit(FieldRole::Latitude);

    editor.set_notation(Notation::Dms).unwrap();
    assert_eq!(editor.text(FieldRole::Latitude), "N 01° 01' 00.00\"");

    let text = editor.text(FieldRole::Latitude).to_owned();
    let state = editor.input(FieldRole::Latitude, &text).unwrap();
    assert_eq!(state, FieldState::Valid);
    assert_approx_eq!(editor.position().0, 1.016_666, 3e-6);
}

#[test]
fn outside_utm_bands_keeps_texts() {
    init_logger();
    let probe = Probe::default();
    let mut editor = PositionEditor::new(&probe);
    editor.set_position(85.0, 10.0).unwrap();
    assert_eq!(probe.calls(), (0, 0));

    let err = editor.set_notation(Notation::Utm).unwrap_err();
    assert!(matches!(
        err,
        EditorError::Conversion(ConversionError::OutsideUtmBands(_))
    ));
    assert_eq!(editor.notation(), Notation::DecimalDegree);
    assert_eq!(editor.text(FieldRole::Latitude), "+85.000000°");
}

#[test]
fn malformed_dms_keeps_value() {
    init_logger();
    let mut editor = PositionEditor::with_settings(
        Wgs84Utm,
        EditorSettings::with_notation(Notation::Dms),
    );
    editor.set_position(10.5, 20.25).unwrap();

    editor.begin_edit(FieldRole::Latitude);
    let err = editor
        .input(FieldRole::Latitude, "N 10° 30'")
        .unwrap_err();
    assert!(matches!(err, EditorError::Format(_)));
    assert_eq!(editor.state(FieldRole::Latitude), FieldState::Invalid);
    assert_eq!(editor.value(Axis::Latitude).components(), (10, 500_000));
}

#[test]
fn out_of_range_is_accepted_and_flagged() {
    init_logger();
    let mut editor = PositionEditor::new(Wgs84Utm);

    editor.begin_edit(FieldRole::Latitude);
    let state = editor.input(FieldRole::Latitude, "+91.000000°").unwrap();
    assert_eq!(state, FieldState::Invalid);
    assert_eq!(editor.value(Axis::Latitude).components(), (91, 0));
    assert!(!editor.is_valid(Axis::Latitude));
    assert_eq!(
        editor.take_events(),
        [
            PositionEvent::LatitudeChanged(91.0),
            PositionEvent::ValidityChanged(false)
        ]
    );

    assert_eq!(editor.commit(FieldRole::Latitude), FieldState::Invalid);
    assert_eq!(editor.state(FieldRole::Latitude), FieldState::Idle);
}

#[test]
fn notation_change_re_renders() {
    init_logger();
    let mut editor = PositionEditor::new(Wgs84Utm);
    editor.set_position(-33.45, -70.666_667).unwrap();
    assert_eq!(editor.text(FieldRole::Latitude), "-33.450000°");
    assert_eq!(editor.text(FieldRole::Longitude), "-070.666667°");

    editor.set_notation(Notation::Dms).unwrap();
    assert_eq!(editor.text(FieldRole::Latitude), "S 33° 27' 00.00\"");
    assert_eq!(editor.text(FieldRole::Longitude), "W 070° 40' 00.00\"");

    editor.set_notation(Notation::Utm).unwrap();
    assert!(editor.text(FieldRole::Latitude).starts_with("19H "));
    assert!(editor.text(FieldRole::Longitude).ends_with(" m"));

    editor.set_notation(Notation::DecimalDegree).unwrap();
    assert_eq!(editor.text(FieldRole::Latitude), "-33.450000°");
    assert!(editor.take_events().is_empty());
}

#[test]
fn copy_to_utm_editor() {
    init_logger();
    let mut source = PositionEditor::new(Wgs84Utm);
    source.begin_edit(FieldRole::Latitude);
    let _ = source.input(FieldRole::Latitude, "+52.520000°").unwrap();
    let _ = source.input(FieldRole::Longitude, "+013.405000°").unwrap();

    let probe = Probe::default();
    let mut target = utm_editor(&probe);
    copy_position(&source, &mut target).unwrap();

    assert_eq!(probe.calls(), (1, 0));
    assert_eq!(target.position(), source.position());
    assert_eq!(target.text(FieldRole::Latitude), "33U 5820072 m");
}

#[test]
fn read_only_editor() {
    init_logger();
    let settings = EditorSettings {
        read_only: true,
        ..EditorSettings::default()
    };
    let mut editor = PositionEditor::with_settings(Wgs84Utm, settings);

    let err = editor.input(FieldRole::Longitude, "+001.000000°").unwrap_err();
    assert_eq!(err.to_string(), "The longitude field is read-only");
    assert_eq!(editor.position(), (0.0, 0.0));
}
