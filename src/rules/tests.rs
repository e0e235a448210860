//! End-to-end grammar tests over sample report text.

use crate::engine::{Scan, apply};
use crate::model::{
    Connection, ModeFlags, OutputProperties, Reflection, Rotation, ScreenDimensions,
};
use crate::parse_report;

use super::modes::MODE_RULES;
use super::output::OUTPUT_RULES;
use super::properties::PROPERTY_RULES;
use super::screen::SCREEN_RULES;
use super::{OutputMap, ScreenMap};

const VERBOSE_SAMPLE: &str = "\
Screen 0: minimum 320 x 200, current 2520 x 1080, maximum 8192 x 8192
DVI-I-1 connected primary 1920x1080+600+0 (0x47) normal (normal left inverted right x axis y axis) 477mm x 268mm
\tIdentifier: 0x42
\tTimestamp:  153698139
\tSubpixel:   unknown
\tGamma:      1.0:1.0:1.0
\tBrightness: 1.0
\tClones:
\tCRTC:       0
\tCRTCs:      0 1 2
\tTransform:  1.000000 0.000000 0.000000
\t            0.000000 1.000000 0.000000
\t            0.000000 0.000000 1.000000
\t           filter: bilinear
\tEDID:
\t\t00ffffffffffff0010ac00504d543037
\t\t320f01030e2f1e78eeee95a3544c9926
\tBACKLIGHT: 80
\t\trange: (0, 100)
\tscaling mode: Full aspect
\t\tsupported: Full, Center, Full aspect
  1920x1080 (0x47) 148.500MHz +HSync +VSync *current +preferred
        h: width  1920 start 2008 end 2052 total 2200 skew    0 clock  67.50KHz
        v: height 1080 start 1084 end 1089 total 1125           clock  60.00Hz
  1280x1024 (0x4a) 108.000MHz +HSync +VSync
        h: width  1280 start 1328 end 1440 total 1688 skew    0 clock  63.98KHz
        v: height 1024 start 1025 end 1028 total 1066           clock  60.02Hz
VGA-1 disconnected (normal left inverted right x axis y axis)
\tIdentifier: 0x43
";

#[test]
fn verbose_report_parses_completely() {
    let report = parse_report(VERBOSE_SAMPLE).unwrap();
    assert!(report.complete, "stopped at byte {}", report.consumed);

    let screen = &report.screens[&0];
    let dims = screen.dimensions.unwrap();
    assert_eq!(dims.minimum.unwrap().width, Some(320));
    assert_eq!(dims.current.unwrap().height, Some(1080));
    assert_eq!(dims.maximum.unwrap().width, Some(8192));
    assert_eq!(screen.outputs.len(), 2);
}

#[test]
fn connected_output_header_fields() {
    let report = parse_report(VERBOSE_SAMPLE).unwrap();
    let output = &report.screens[&0].outputs["DVI-I-1"];

    assert_eq!(output.connection, Some(Connection::Connected));
    assert!(output.primary);
    let geometry = output.geometry.unwrap();
    assert_eq!(geometry.dimensions.unwrap().width, Some(1920));
    assert_eq!(geometry.offset.unwrap().x, Some(600));
    assert_eq!(output.mode, Some(0x47));
    assert_eq!(output.rotation, Some(Rotation::Rotate0));
    assert_eq!(output.reflection, Some(Reflection::empty()));
    assert_eq!(
        output.supported_rotations.as_deref(),
        Some(&[Rotation::Rotate0, Rotation::Rotate90, Rotation::Rotate180, Rotation::Rotate270][..])
    );
    assert_eq!(output.supported_reflections.as_deref(), Some(&[Reflection::X, Reflection::Y][..]));
    let mm = output.dimensions_mm.unwrap();
    assert_eq!((mm.width, mm.height), (Some(477), Some(268)));
}

#[test]
fn well_known_properties_extract() {
    let report = parse_report(VERBOSE_SAMPLE).unwrap();
    let properties = report.screens[&0].outputs["DVI-I-1"].properties.as_ref().unwrap();

    assert_eq!(properties.identifier, Some(0x42));
    assert_eq!(properties.timestamp, Some(153_698_139));
    // `unknown` subpixel order maps to absent.
    assert_eq!(properties.subpixel_order, None);
    let gamma = properties.gamma.unwrap();
    assert_eq!((gamma.red, gamma.green, gamma.blue), (1.0, 1.0, 1.0));
    assert_eq!(properties.brightness, Some(1.0));
    assert_eq!(properties.clones.as_deref(), Some(&[][..]));
    assert_eq!(properties.crtc, Some(0));
    assert_eq!(properties.crtcs.as_deref(), Some(&[0, 1, 2][..]));

    let transform = properties.transform.as_ref().unwrap();
    assert_eq!(transform.matrix, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(transform.filter.as_deref(), Some("bilinear"));

    let edid = properties.edid.as_ref().unwrap();
    assert_eq!(edid.len(), 32);
    assert_eq!(&edid[..4], &[0x00, 0xff, 0xff, 0xff]);
}

#[test]
fn open_ended_properties_keep_their_trailers() {
    let report = parse_report(VERBOSE_SAMPLE).unwrap();
    let properties = report.screens[&0].outputs["DVI-I-1"].properties.as_ref().unwrap();
    let other = properties.other.as_ref().unwrap();

    let backlight = &other["BACKLIGHT"];
    assert_eq!(backlight.value, "80");
    assert_eq!(backlight.range.as_deref(), Some(&[("0".to_owned(), "100".to_owned())][..]));
    assert_eq!(backlight.supported, None);

    let scaling = &other["scaling mode"];
    assert_eq!(scaling.value, "Full aspect");
    assert_eq!(
        scaling.supported.as_deref(),
        Some(&["Full".to_owned(), "Center".to_owned(), "Full aspect".to_owned()][..])
    );
}

#[test]
fn verbose_mode_blocks_extract_timings() {
    let report = parse_report(VERBOSE_SAMPLE).unwrap();
    let modes = &report.screens[&0].outputs["DVI-I-1"].modes;
    assert_eq!(modes.len(), 2);

    let first = &modes[0];
    assert_eq!(first.name.as_deref(), Some("1920x1080"));
    assert_eq!(first.id, Some(0x47));
    assert_eq!(first.dotclock, Some(148_500_000.0));
    assert_eq!(first.flags, Some(ModeFlags::HSYNC_POSITIVE | ModeFlags::VSYNC_POSITIVE));
    assert!(first.current);
    assert!(first.preferred);
    assert_eq!(first.h_total, Some(2200));
    assert_eq!(first.h_skew, Some(0));
    assert_eq!(first.h_clock, Some(67_500.0));
    assert_eq!(first.v_total, Some(1125));
    assert_eq!(first.refresh, Some(60.0));

    let second = &modes[1];
    assert_eq!(second.id, Some(0x4a));
    assert!(!second.current);
    assert!(!second.preferred);
}

#[test]
fn disconnected_output_carries_no_modes() {
    let report = parse_report(VERBOSE_SAMPLE).unwrap();
    let output = &report.screens[&0].outputs["VGA-1"];

    assert_eq!(output.connection, Some(Connection::Disconnected));
    assert_eq!(output.geometry, None);
    assert_eq!(output.dimensions_mm, None);
    assert_eq!(output.properties.as_ref().unwrap().identifier, Some(0x43));
    assert!(output.modes.is_empty());
}

#[test]
fn bare_header_line_round_trips() {
    let mut scan =
        Scan::new("HDMI-1 connected primary 1920x1080+0+0 (0x47) normal none\n", 0, OutputMap::new());
    apply(&mut scan, &OUTPUT_RULES).unwrap();
    assert!(scan.exhausted());

    let output = &scan.data["HDMI-1"];
    assert_eq!(output.connection, Some(Connection::Connected));
    assert!(output.primary);
    let geometry = output.geometry.unwrap();
    assert_eq!(geometry.dimensions.unwrap().width, Some(1920));
    assert_eq!(geometry.dimensions.unwrap().height, Some(1080));
    assert_eq!(geometry.offset.unwrap().x, Some(0));
    assert_eq!(geometry.offset.unwrap().y, Some(0));
    assert_eq!(output.mode, Some(0x47));
    assert_eq!(output.rotation, Some(Rotation::Rotate0));
    assert_eq!(output.reflection, Some(Reflection::empty()));
    // No parenthesized list in the input, so none is reported.
    assert_eq!(output.supported_rotations, None);
}

#[test]
fn unknown_connection_is_absent() {
    let mut scan = Scan::new("HDMI-2 unknown connection\n", 0, OutputMap::new());
    apply(&mut scan, &OUTPUT_RULES).unwrap();
    assert!(scan.exhausted());
    assert_eq!(scan.data["HDMI-2"].connection, None);
}

#[test]
fn header_reflection_tokens_map_to_axes() {
    let mut scan = Scan::new("DP-1 connected 800x600+0+0 left X and Y axis\n", 0, OutputMap::new());
    apply(&mut scan, &OUTPUT_RULES).unwrap();

    let output = &scan.data["DP-1"];
    assert_eq!(output.rotation, Some(Rotation::Rotate90));
    assert_eq!(output.reflection, Some(Reflection::X | Reflection::Y));
}

#[test]
fn extent_entries_match_in_any_order() {
    let forward = "Screen 1: minimum 8 x 8, current 640 x 480, maximum 4096 x 4096\n";
    let shuffled = "Screen 1: maximum 4096 x 4096, minimum 8 x 8, current 640 x 480\n";

    let parse = |text: &str| -> ScreenDimensions {
        let mut scan = Scan::new(text, 0, ScreenMap::new());
        apply(&mut scan, &SCREEN_RULES).unwrap();
        assert!(scan.exhausted());
        scan.data[&1].dimensions.unwrap()
    };
    assert_eq!(parse(forward), parse(shuffled));
}

#[test]
fn property_order_does_not_change_the_result() {
    let forward = "\tGamma:      0.9:1.0:1.1\n\tBrightness: 0.5\n";
    let shuffled = "\tBrightness: 0.5\n\tGamma:      0.9:1.0:1.1\n";

    let parse = |text: &str| -> OutputProperties {
        let mut scan = Scan::new(text, 0, OutputProperties::default());
        apply(&mut scan, &PROPERTY_RULES).unwrap();
        assert!(scan.exhausted());
        scan.data
    };
    assert_eq!(parse(forward), parse(shuffled));
}

#[test]
fn inline_supported_trailer_splits_the_value() {
    let mut scan = Scan::new("\tFooBar: 1, 2, 3 supported: 1, 2, 3\n", 0, OutputProperties::default());
    apply(&mut scan, &PROPERTY_RULES).unwrap();
    assert!(scan.exhausted());

    let property = &scan.data.other.as_ref().unwrap()["FooBar"];
    // The marker wins over the value even on the same line.
    assert_eq!(property.value, "1, 2, 3");
    assert_eq!(
        property.supported.as_deref(),
        Some(&["1".to_owned(), "2".to_owned(), "3".to_owned()][..])
    );
}

#[test]
fn transform_without_filter() {
    let text = "\tTransform:  2.0 0.0 0.0\n\t            0.0 2.0 0.0\n\t            0.0 0.0 1.0\n";
    let mut scan = Scan::new(text, 0, OutputProperties::default());
    apply(&mut scan, &PROPERTY_RULES).unwrap();
    assert!(scan.exhausted());

    let transform = scan.data.transform.as_ref().unwrap();
    assert_eq!(transform.matrix[0], 2.0);
    assert_eq!(transform.filter, None);
}

#[test]
fn guid_lands_in_the_guid_field() {
    let mut scan = Scan::new(
        "\tGUID: {12345678-1234-5678-1234-567812345678}\n",
        0,
        OutputProperties::default(),
    );
    apply(&mut scan, &PROPERTY_RULES).unwrap();
    assert!(scan.exhausted());

    let guid = scan.data.guid.as_ref().unwrap();
    assert_eq!(guid.len(), 16);
    assert_eq!(&guid[..2], &[0x12, 0x34]);
    assert_eq!(scan.data.edid, None);
}

#[test]
fn compact_mode_table_yields_one_mode_per_cell() {
    let text = "   1280x1024     60.02*+  75.02  \n   1024x768      75.03    70.07  \n";
    let mut scan = Scan::new(text, 0, Vec::new());
    apply(&mut scan, &MODE_RULES).unwrap();
    assert!(scan.exhausted());

    assert_eq!(scan.data.len(), 4);
    assert_eq!(scan.data[0].name.as_deref(), Some("1280x1024"));
    assert!(scan.data[0].current);
    assert!(scan.data[0].preferred);
    assert!(!scan.data[1].current);
    assert_eq!(scan.data[2].name.as_deref(), Some("1024x768"));
    assert_eq!(scan.data[2].width, Some(1024));
    // The compact table carries no timing groups.
    assert_eq!(scan.data[0].dotclock, None);
}

#[test]
fn rotation_only_supported_list() {
    let mut scan = Scan::new("LVDS-1 connected 1024x600+0+0 (normal)\n", 0, OutputMap::new());
    apply(&mut scan, &OUTPUT_RULES).unwrap();
    assert!(scan.exhausted());

    let output = &scan.data["LVDS-1"];
    assert_eq!(output.supported_rotations.as_deref(), Some(&[Rotation::Rotate0][..]));
    assert_eq!(output.supported_reflections.as_deref(), Some(&[][..]));
}
