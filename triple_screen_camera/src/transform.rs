/// RigTransform — the eye the whole rig is fitted around.
///
/// Conventions (right-handed, meters):
/// - `forward` is the local `-Z` axis rotated into world space
/// - `up` is the local `+Y` axis
/// - `right` is the local `+X` axis
///
/// The rig only reads this transform. The host moves it with
/// `CameraRig::set_transform` and re-applies the layout.

use glam::{Quat, Vec3};

/// Position and orientation of the driver's eye point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigTransform {
    position: Vec3,
    rotation: Quat,
}

impl Default for RigTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigTransform {
    /// Eye at the origin, looking down `-Z`.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a transform. The rotation is normalized.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation: rotation.normalize(),
        }
    }

    /// Transform at `position` with identity rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    // ===== GETTERS =====

    /// World position of the eye.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World rotation of the eye.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Viewing direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// World point → eye-local point (inverse of position + rotation).
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.position)
    }

    /// Eye-local point → world point.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
