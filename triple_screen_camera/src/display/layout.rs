/// Display layout — where the three monitors sit around the eye.
///
/// Geometry, seen from above with the eye at the bottom:
///
/// ```text
///        left          center          right
///          \  ______________________  /
///           \|                      |/
///            .          ^           .
///                       |  distance
///                      eye
/// ```
///
/// - The center monitor is `distance_from_center_display` along the eye's forward axis.
/// - Each lateral monitor hinges on the center monitor's side edge, separated by the
///   bezel margin (bent by half the lateral angle), and is yawed toward the eye by the
///   full lateral angle.
///
/// Lateral clip planes: a center camera clip plane at depth `D` intersects the center
/// frustum's side edge at a point scaled by `D / distance`. The lateral camera's
/// clip plane is the plane parallel to its monitor through that point, so all three
/// near (and far) planes meet at the monitor seams.

use glam::{Quat, Vec3};
use crate::rig::{CameraSlot, RigParameters};
use crate::transform::RigTransform;
use super::quad::DisplayQuad;

/// Which lateral monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LateralSide {
    Left,
    Right,
}

impl LateralSide {
    /// -1 for left, +1 for right
    fn sign(self) -> f32 {
        match self {
            LateralSide::Left => -1.0,
            LateralSide::Right => 1.0,
        }
    }
}

/// Rotation about the eye's up axis turning `forward` toward `side` by `angle_degrees`.
fn lateral_yaw(transform: &RigTransform, side: LateralSide, angle_degrees: f32) -> Quat {
    // Right-handed: a positive angle about +Y turns forward (-Z) toward the left
    Quat::from_axis_angle(transform.up(), -side.sign() * angle_degrees.to_radians())
}

// ============================================================================
// DisplayPanels
// ============================================================================

/// Corner sets of the three monitors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPanels {
    pub center: DisplayQuad,
    pub left: DisplayQuad,
    pub right: DisplayQuad,
}

impl DisplayPanels {
    /// World-space monitor corners for `parameters` around `transform`.
    pub fn compute(parameters: &RigParameters, transform: &RigTransform) -> Self {
        let forward = transform.forward();
        let up = transform.up();
        let width = parameters.display_width;
        let height = parameters.display_height();

        let center_position = transform.position() + forward * parameters.distance_from_center_display;
        let center = DisplayQuad::from_center(center_position, forward, up, width, height);

        Self {
            center,
            left: lateral_display(parameters, transform, center_position, LateralSide::Left),
            right: lateral_display(parameters, transform, center_position, LateralSide::Right),
        }
    }

    /// Same panels expressed in the transform's local space.
    pub fn to_local(&self, transform: &RigTransform) -> Self {
        let local = |quad: &DisplayQuad| quad.map(|corner| transform.inverse_transform_point(corner));
        Self {
            center: local(&self.center),
            left: local(&self.left),
            right: local(&self.right),
        }
    }

    /// Panel fitted by the camera in `slot`.
    pub fn get(&self, slot: CameraSlot) -> &DisplayQuad {
        match slot {
            CameraSlot::Center => &self.center,
            CameraSlot::Left => &self.left,
            CameraSlot::Right => &self.right,
        }
    }
}

fn lateral_display(
    parameters: &RigParameters,
    transform: &RigTransform,
    center_position: Vec3,
    side: LateralSide,
) -> DisplayQuad {
    let angle = parameters.lateral_displays_angle;
    let half_width = parameters.display_width * 0.5;
    let edge_direction = transform.right() * side.sign();

    let rotation = lateral_yaw(transform, side, angle);
    let margin_rotation = lateral_yaw(transform, side, angle * 0.5);

    let edge_position = center_position
        + edge_direction * half_width
        + margin_rotation * edge_direction * parameters.lateral_displays_margin;
    let position = edge_position + rotation * edge_direction * half_width;

    DisplayQuad::from_center(
        position,
        rotation * transform.forward(),
        transform.up(),
        parameters.display_width,
        parameters.display_height(),
    )
}

// ============================================================================
// Lateral clip planes
// ============================================================================

/// Near/far clip distances of the lateral cameras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanes {
    pub near: f32,
    pub far: f32,
}

impl ClipPlanes {
    /// Lateral clip distances matching the center camera's near and far planes.
    pub fn lateral(parameters: &RigParameters, transform: &RigTransform) -> Self {
        Self {
            near: lateral_clipping_plane(parameters, transform, parameters.near_clipping_plane),
            far: lateral_clipping_plane(parameters, transform, parameters.far_clipping_plane),
        }
    }
}

/// Lateral camera clip distance matching a center camera clip distance.
///
/// Scales the center monitor half-width and the bezel margin by
/// `center_clip / distance_from_center_display`, finds the seam point at that
/// depth, and returns the eye's distance to the lateral plane through it.
/// Both lateral cameras are symmetric, so the right side is used.
pub fn lateral_clipping_plane(parameters: &RigParameters, transform: &RigTransform, center_clip: f32) -> f32 {
    let eye = transform.position();
    let right = transform.right();
    let angle = parameters.lateral_displays_angle;

    let ratio = center_clip / parameters.distance_from_center_display;
    let scaled_width = parameters.display_width * ratio;
    let center_clip_position = eye + transform.forward() * center_clip;

    let plane_rotation = lateral_yaw(transform, LateralSide::Right, angle);
    let margin_rotation = lateral_yaw(transform, LateralSide::Right, angle * 0.5);

    let edge_position = center_clip_position
        + right * (scaled_width * 0.5)
        + margin_rotation * right * (parameters.lateral_displays_margin * ratio);
    let side_direction = (plane_rotation * right).normalize();

    let along = (eye - edge_position).dot(side_direction);
    let closest_point = edge_position + side_direction * along;

    eye.distance(closest_point)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
