/// Camera capability consumed by the rig, and a passive implementation of it.
///
/// The rig never reads camera state back. It writes projection, clip planes,
/// rotation, viewport and active state, and the host renders with whatever
/// camera object sits behind the trait.

use glam::{Mat4, Quat};

/// Normalized viewport rectangle (0..1 on both axes, origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    /// Whole render target (center camera in single screen mode).
    pub const FULL: Self = Self { x: 0.0, y: 0.0, width: 1.0, height: 1.0 };

    /// Middle third (center camera in triple screen mode).
    pub const CENTER_THIRD: Self = Self { x: 1.0 / 3.0, y: 0.0, width: 1.0 / 3.0, height: 1.0 };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// Write-only camera capability.
///
/// Implement this on the host's camera handle. Once attached to a rig, the rig
/// assumes exclusive ownership of these fields.
pub trait RigCamera {
    /// Replace the camera's projection with a custom (off-axis) matrix.
    fn set_projection_matrix(&mut self, matrix: Mat4);

    fn set_near_clip(&mut self, near: f32);

    fn set_far_clip(&mut self, far: f32);

    /// World rotation of the camera.
    fn set_rotation(&mut self, rotation: Quat);

    fn set_viewport_rect(&mut self, rect: ViewportRect);

    /// Enable or disable rendering for this camera.
    fn set_active(&mut self, active: bool);
}

/// Passive camera data container. Stores what the rig writes, computes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    projection_matrix: Mat4,
    near_clip: f32,
    far_clip: f32,
    rotation: Quat,
    viewport: ViewportRect,
    active: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Active camera with identity projection/rotation and a full viewport.
    pub fn new() -> Self {
        Self {
            projection_matrix: Mat4::IDENTITY,
            near_clip: 0.3,
            far_clip: 1000.0,
            rotation: Quat::IDENTITY,
            viewport: ViewportRect::FULL,
            active: true,
        }
    }

    // ===== GETTERS =====

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn viewport(&self) -> &ViewportRect {
        &self.viewport
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

// ===== SETTERS =====

impl RigCamera for Camera {
    fn set_projection_matrix(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    fn set_near_clip(&mut self, near: f32) {
        self.near_clip = near;
    }

    fn set_far_clip(&mut self, far: f32) {
        self.far_clip = far;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn set_viewport_rect(&mut self, rect: ViewportRect) {
        self.viewport = rect;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
