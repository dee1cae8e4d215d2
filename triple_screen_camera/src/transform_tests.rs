use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;
use super::*;

const EPSILON: f32 = 1e-5;

// ============================================================================
// Axes
// ============================================================================

#[test]
fn test_identity_axes() {
    let t = RigTransform::IDENTITY;

    assert!(t.forward().abs_diff_eq(Vec3::NEG_Z, EPSILON));
    assert!(t.up().abs_diff_eq(Vec3::Y, EPSILON));
    assert!(t.right().abs_diff_eq(Vec3::X, EPSILON));
}

#[test]
fn test_right_is_forward_cross_up() {
    let t = RigTransform::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_euler(glam::EulerRot::YXZ, 0.3, -0.2, 0.1));

    assert!(t.right().abs_diff_eq(t.forward().cross(t.up()), EPSILON));
}

#[test]
fn test_yaw_quarter_turn_left() {
    // +90° about +Y turns -Z toward -X
    let t = RigTransform::new(Vec3::ZERO, Quat::from_rotation_y(FRAC_PI_2));

    assert!(t.forward().abs_diff_eq(Vec3::NEG_X, EPSILON));
    assert!(t.right().abs_diff_eq(Vec3::NEG_Z, EPSILON));
}

#[test]
fn test_new_normalizes_rotation() {
    let t = RigTransform::new(Vec3::ZERO, Quat::from_xyzw(0.0, 0.0, 0.0, 2.0));

    assert!((t.rotation().length() - 1.0).abs() < EPSILON);
}

// ============================================================================
// Point transforms
// ============================================================================

#[test]
fn test_inverse_transform_point_roundtrip() {
    let t = RigTransform::new(Vec3::new(0.5, 1.2, -3.0), Quat::from_rotation_y(0.7));
    let world = Vec3::new(2.0, -1.0, 4.0);

    let local = t.inverse_transform_point(world);

    assert!(t.transform_point(local).abs_diff_eq(world, EPSILON));
}

#[test]
fn test_inverse_transform_point_of_position_is_origin() {
    let t = RigTransform::from_position(Vec3::new(3.0, 1.0, 2.0));

    assert!(t.inverse_transform_point(Vec3::new(3.0, 1.0, 2.0)).abs_diff_eq(Vec3::ZERO, EPSILON));
    assert_eq!(RigTransform::default(), RigTransform::IDENTITY);
}
