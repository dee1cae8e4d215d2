use glam::Vec3;
use crate::error::Error;
use super::*;

const EPSILON: f32 = 1e-5;

fn unit_quad_at(z: f32) -> DisplayQuad {
    DisplayQuad::new([
        Vec3::new(-1.0, -1.0, z),
        Vec3::new(1.0, -1.0, z),
        Vec3::new(1.0, 1.0, z),
        Vec3::new(-1.0, 1.0, z),
    ])
}

// ============================================================================
// from_center
// ============================================================================

#[test]
fn test_from_center_corner_order() {
    let quad = DisplayQuad::from_center(Vec3::new(0.0, 0.0, -2.0), Vec3::NEG_Z, Vec3::Y, 0.6, 0.4);

    assert!(quad.bottom_left().abs_diff_eq(Vec3::new(-0.3, -0.2, -2.0), EPSILON));
    assert!(quad.bottom_right().abs_diff_eq(Vec3::new(0.3, -0.2, -2.0), EPSILON));
    assert!(quad.top_right().abs_diff_eq(Vec3::new(0.3, 0.2, -2.0), EPSILON));
    assert!(quad.top_left().abs_diff_eq(Vec3::new(-0.3, 0.2, -2.0), EPSILON));
}

#[test]
fn test_from_center_dimensions() {
    let quad = DisplayQuad::from_center(Vec3::new(1.0, 2.0, 3.0), Vec3::X, Vec3::Y, 0.6, 0.3375);

    assert!((quad.width() - 0.6).abs() < EPSILON);
    assert!((quad.height() - 0.3375).abs() < EPSILON);
    assert!(quad.center().abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), EPSILON));
}

#[test]
fn test_corner_indices() {
    let quad = unit_quad_at(-1.0);

    assert_eq!(quad.corners()[CORNER_BOTTOM_LEFT], quad.bottom_left());
    assert_eq!(quad.corners()[CORNER_BOTTOM_RIGHT], quad.bottom_right());
    assert_eq!(quad.corners()[CORNER_TOP_RIGHT], quad.top_right());
    assert_eq!(quad.corners()[CORNER_TOP_LEFT], quad.top_left());
}

#[test]
fn test_map_translates_every_corner() {
    let quad = unit_quad_at(-1.0).map(|c| c + Vec3::new(0.0, 0.0, -1.0));

    assert_eq!(quad, unit_quad_at(-2.0));
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_accepts_rectangle() {
    assert!(unit_quad_at(-1.0).validate().is_ok());
}

#[test]
fn test_validate_rejects_coincident_corners() {
    let mut corners = *unit_quad_at(-1.0).corners();
    corners[CORNER_BOTTOM_RIGHT] = corners[CORNER_BOTTOM_LEFT];

    let result = DisplayQuad::new(corners).validate();

    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
}

#[test]
fn test_validate_rejects_collinear_edges() {
    let quad = DisplayQuad::new([
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(3.0, 0.0, -1.0),
        Vec3::new(2.0, 0.0, -1.0),
    ]);

    assert!(matches!(quad.validate(), Err(Error::DegenerateGeometry(_))));
}

#[test]
fn test_validate_rejects_non_planar() {
    let mut corners = *unit_quad_at(-1.0).corners();
    corners[CORNER_TOP_RIGHT].z += 0.1;

    let result = DisplayQuad::new(corners).validate();

    match result {
        Err(Error::DegenerateGeometry(msg)) => assert!(msg.contains("not planar")),
        other => panic!("expected planarity error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_nan() {
    let mut corners = *unit_quad_at(-1.0).corners();
    corners[CORNER_TOP_LEFT].x = f32::NAN;

    assert!(DisplayQuad::new(corners).validate().is_err());
}
