use crate::error::Error;
use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_parameters() {
    let p = RigParameters::default();

    assert_eq!(p.screen_setup, ScreenSetup::Triple);
    assert_eq!(p.aspect_ratio, AspectRatio::WIDESCREEN_16_9);
    assert_eq!(p.display_width, 0.5);
    assert_eq!(p.distance_from_center_display, 0.5);
    assert_eq!(p.lateral_displays_angle, 45.0);
    assert_eq!(p.lateral_displays_margin, 0.0);
    assert_eq!(p.near_clipping_plane, 0.2);
    assert_eq!(p.far_clipping_plane, 1000.0);
    assert!(!p.auto_update);
    assert!(p.validate().is_ok());
}

#[test]
fn test_display_height_from_aspect_ratio() {
    let p = RigParameters { display_width: 0.6, ..RigParameters::default() };

    assert!((p.display_height() - 0.3375).abs() < 1e-6);
}

// ============================================================================
// ScreenSetup / AspectRatio
// ============================================================================

#[test]
fn test_screen_setup_labels() {
    assert_eq!(ScreenSetup::Single.label(), "Single Screen");
    assert_eq!(ScreenSetup::Triple.label(), "Triple Screen");
    assert!(!ScreenSetup::Single.lateral_cameras_active());
    assert!(ScreenSetup::Triple.lateral_cameras_active());
    assert_eq!(ScreenSetup::default(), ScreenSetup::Triple);
}

#[test]
fn test_aspect_ratio_presets() {
    let labels: Vec<&str> = AspectRatio::PRESETS.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["16:9", "16:10", "4:3"]);

    for (label, ratio) in AspectRatio::PRESETS {
        assert_eq!(ratio.to_string(), label);
        assert!(ratio.validate().is_ok());
    }
    assert!((AspectRatio::STANDARD_4_3.ratio() - 4.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_aspect_ratio_rejects_non_positive() {
    for ratio in [
        AspectRatio::new(0.0, 9.0),
        AspectRatio::new(16.0, -1.0),
        AspectRatio::new(f32::NAN, 9.0),
        AspectRatio::new(16.0, f32::INFINITY),
    ] {
        match ratio.validate() {
            Err(Error::OptionOutOfRange { option, .. }) => assert_eq!(option, "AspectRatio"),
            other => panic!("{} should be rejected, got {:?}", ratio, other),
        }
    }
}

// ============================================================================
// ParameterRange
// ============================================================================

#[test]
fn test_range_is_inclusive() {
    assert!(DISPLAY_WIDTH.contains(0.01));
    assert!(DISPLAY_WIDTH.contains(3.0));
    assert!(!DISPLAY_WIDTH.contains(0.009));
    assert!(!DISPLAY_WIDTH.contains(3.001));
    assert!(!DISPLAY_WIDTH.contains(f32::NAN));
}

#[test]
fn test_range_check_error_carries_bounds() {
    let err = LATERAL_DISPLAYS_ANGLE.check(120.0).unwrap_err();

    assert_eq!(
        err,
        Error::OptionOutOfRange { option: "LateralDisplaysAngle", value: 120.0, min: 0.0, max: 90.0 }
    );
}

#[test]
fn test_unbounded_upper_clip_ranges() {
    assert!(NEAR_CLIPPING_PLANE.contains(1.0e30));
    assert!(FAR_CLIPPING_PLANE.contains(f32::MAX));
    assert!(!NEAR_CLIPPING_PLANE.contains(0.0));
    assert!(!FAR_CLIPPING_PLANE.contains(0.5));
}

// ============================================================================
// RigParameter / assign
// ============================================================================

#[test]
fn test_parameter_names_and_ranges() {
    assert_eq!(RigParameter::DisplayWidth(1.0).name(), "DisplayWidth");
    assert_eq!(RigParameter::ScreenSetup(ScreenSetup::Single).name(), "ScreenSetup");
    assert_eq!(RigParameter::AutoUpdate(true).name(), "AutoUpdate");
    assert_eq!(RigParameter::NearClippingPlane(1.0).range(), Some(NEAR_CLIPPING_PLANE));
    assert_eq!(RigParameter::AutoUpdate(true).range(), None);
}

#[test]
fn test_assign_stores_valid_values() {
    let mut p = RigParameters::default();

    p.assign(RigParameter::DisplayWidth(0.7)).unwrap();
    p.assign(RigParameter::ScreenSetup(ScreenSetup::Single)).unwrap();
    p.assign(RigParameter::AspectRatio(AspectRatio::STANDARD_4_3)).unwrap();
    p.assign(RigParameter::AutoUpdate(true)).unwrap();

    assert_eq!(p.display_width, 0.7);
    assert_eq!(p.screen_setup, ScreenSetup::Single);
    assert_eq!(p.aspect_ratio, AspectRatio::STANDARD_4_3);
    assert!(p.auto_update);
}

#[test]
fn test_assign_rejects_without_mutation() {
    let mut p = RigParameters::default();
    let before = p;

    assert!(p.assign(RigParameter::DistanceFromCenterDisplay(3.5)).is_err());
    assert!(p.assign(RigParameter::LateralDisplaysMargin(-0.1)).is_err());
    assert!(p.assign(RigParameter::AspectRatio(AspectRatio::new(16.0, 0.0))).is_err());

    assert_eq!(p, before);
}

#[test]
fn test_validate_reports_first_violation() {
    let p = RigParameters { far_clipping_plane: 0.5, ..RigParameters::default() };

    match p.validate() {
        Err(Error::OptionOutOfRange { option, value, .. }) => {
            assert_eq!(option, "FarClippingPlane");
            assert_eq!(value, 0.5);
        }
        other => panic!("expected range error, got {:?}", other),
    }
}
