/// OffAxisFrustum — asymmetric perspective frustum fitted to a display quad.
///
/// Given a planar display quad and the eye position, the frustum's side planes
/// pass through the eye and the four display edges. The camera is oriented to
/// look straight into the display (perpendicular to its plane), so the frustum
/// is generally off-center: `left != -right` and/or `bottom != -top`.
///
/// The projection is the OpenGL-style `glFrustum` matrix (right-handed, clip
/// depth in [-1, 1]).

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
use crate::display::DisplayQuad;
use crate::error::{Error, Result};
use super::camera::RigCamera;

/// Smallest accepted perpendicular eye-to-display distance, in meters
const MIN_EYE_DISTANCE: f32 = 1e-6;

/// Near-plane bounds, clip distances and orientation of a fitted camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffAxisFrustum {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
    rotation: Quat,
}

impl OffAxisFrustum {
    /// Fit a frustum to `quad` as seen from `eye`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateGeometry` if:
    /// - `near` is not positive or `far` is not greater than `near`
    /// - the quad fails `DisplayQuad::validate()`
    /// - the eye is on or behind the display plane
    pub fn fit(quad: &DisplayQuad, eye: Vec3, near: f32, far: f32) -> Result<Self> {
        if !(near > 0.0 && near.is_finite()) {
            return Err(Error::DegenerateGeometry(format!(
                "near clipping plane must be positive, got {}",
                near
            )));
        }
        if !(far > near && far.is_finite()) {
            return Err(Error::DegenerateGeometry(format!(
                "far clipping plane ({}) must be greater than near clipping plane ({})",
                far, near
            )));
        }
        if !eye.is_finite() {
            return Err(Error::DegenerateGeometry(format!("eye position is not finite: {}", eye)));
        }
        quad.validate()?;

        // Display basis. In a right-handed frame the normal points back at the eye.
        let right_axis = (quad.bottom_right() - quad.bottom_left()).normalize();
        let up_axis = (quad.top_left() - quad.bottom_left()).normalize();
        let normal = right_axis.cross(up_axis).normalize();

        let to_bottom_left = quad.bottom_left() - eye;
        let to_bottom_right = quad.bottom_right() - eye;
        let to_top_left = quad.top_left() - eye;

        // Perpendicular eye-to-display distance
        let distance = -to_bottom_left.dot(normal);
        if distance < MIN_EYE_DISTANCE {
            return Err(Error::DegenerateGeometry(format!(
                "eye is on or behind the display plane (distance {:.6} m)",
                distance
            )));
        }

        let scale = near / distance;

        let left = right_axis.dot(to_bottom_left) * scale;
        let right = right_axis.dot(to_bottom_right) * scale;
        let bottom = up_axis.dot(to_bottom_left) * scale;
        let top = up_axis.dot(to_top_left) * scale;

        // Camera -Z looks into the display
        let basis = Mat3::from_cols(right_axis, normal.cross(right_axis), normal);
        let rotation = Quat::from_mat3(&basis).normalize();

        crate::rig_trace!(
            "triple_screen::OffAxisFrustum",
            "Fitted frustum l={:.5} r={:.5} b={:.5} t={:.5} near={:.4} far={:.4} (eye distance {:.4})",
            left, right, bottom, top, near, far, distance
        );

        Ok(Self { left, right, bottom, top, near, far, rotation })
    }

    // ===== GETTERS =====

    /// Left bound on the near plane.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Right bound on the near plane.
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Bottom bound on the near plane.
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Top bound on the near plane.
    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// World rotation facing the display.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// OpenGL-style off-axis perspective matrix.
    ///
    /// Rows:
    /// - `[2n/(r-l), 0, (r+l)/(r-l), 0]`
    /// - `[0, 2n/(t-b), (t+b)/(t-b), 0]`
    /// - `[0, 0, (f+n)/(n-f), 2fn/(n-f)]`
    /// - `[0, 0, -1, 0]`
    pub fn projection_matrix(&self) -> Mat4 {
        let (l, r, b, t, n, f) = (self.left, self.right, self.bottom, self.top, self.near, self.far);

        // glam is column-major
        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new((r + l) / (r - l), (t + b) / (t - b), (f + n) / (n - f), -1.0),
            Vec4::new(0.0, 0.0, 2.0 * f * n / (n - f), 0.0),
        )
    }

    /// Write clip planes, rotation and projection into a camera.
    pub fn apply<C: RigCamera + ?Sized>(&self, camera: &mut C) {
        camera.set_near_clip(self.near);
        camera.set_far_clip(self.far);
        camera.set_rotation(self.rotation);
        camera.set_projection_matrix(self.projection_matrix());
    }

    /// Camera view matrix for an eye at `eye` with this frustum's rotation.
    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, eye).inverse()
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
