/// DisplayQuad — four world-space corners of one physical monitor.
///
/// Corners are ordered counter-clockwise as seen from the eye, starting at the
/// bottom-left: `[bottom_left, bottom_right, top_right, top_left]`.
///
/// A quad must be planar and non-degenerate before it can be used for frustum
/// fitting. `validate()` enforces this instead of letting NaN/Inf reach the
/// projection matrix.

use glam::Vec3;
use crate::error::{Error, Result};

/// Corner indices
pub const CORNER_BOTTOM_LEFT: usize = 0;
pub const CORNER_BOTTOM_RIGHT: usize = 1;
pub const CORNER_TOP_RIGHT: usize = 2;
pub const CORNER_TOP_LEFT: usize = 3;

/// Shortest accepted edge, in meters
const MIN_EDGE_LENGTH: f32 = 1e-6;

/// Minimum |sin| of the angle between the bottom and left edges
const MIN_EDGE_SINE: f32 = 1e-4;

/// Maximum out-of-plane offset of the top-right corner, relative to the quad size
const PLANARITY_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayQuad {
    corners: [Vec3; 4],
}

impl DisplayQuad {
    /// Create a quad from ordered corners. No validation is done here.
    pub fn new(corners: [Vec3; 4]) -> Self {
        Self { corners }
    }

    /// Build a rectangle centered on `center`, facing away from the viewer along
    /// `forward`.
    ///
    /// The right axis is `forward × up`; `up` is used as given for the vertical
    /// extent.
    pub fn from_center(center: Vec3, forward: Vec3, up: Vec3, width: f32, height: f32) -> Self {
        let right = forward.cross(up).normalize_or_zero();
        let half_right = right * (width * 0.5);
        let half_up = up * (height * 0.5);

        Self {
            corners: [
                center - half_right - half_up,
                center + half_right - half_up,
                center + half_right + half_up,
                center - half_right + half_up,
            ],
        }
    }

    // ===== GETTERS =====

    pub fn corners(&self) -> &[Vec3; 4] {
        &self.corners
    }

    pub fn bottom_left(&self) -> Vec3 {
        self.corners[CORNER_BOTTOM_LEFT]
    }

    pub fn bottom_right(&self) -> Vec3 {
        self.corners[CORNER_BOTTOM_RIGHT]
    }

    pub fn top_right(&self) -> Vec3 {
        self.corners[CORNER_TOP_RIGHT]
    }

    pub fn top_left(&self) -> Vec3 {
        self.corners[CORNER_TOP_LEFT]
    }

    /// Average of the four corners.
    pub fn center(&self) -> Vec3 {
        (self.corners[0] + self.corners[1] + self.corners[2] + self.corners[3]) * 0.25
    }

    /// Length of the bottom edge.
    pub fn width(&self) -> f32 {
        (self.bottom_right() - self.bottom_left()).length()
    }

    /// Length of the left edge.
    pub fn height(&self) -> f32 {
        (self.top_left() - self.bottom_left()).length()
    }

    /// Apply `f` to every corner (e.g. world → local space).
    pub fn map<F: Fn(Vec3) -> Vec3>(&self, f: F) -> Self {
        Self { corners: self.corners.map(f) }
    }

    // ===== VALIDATION =====

    /// Check that the quad is finite, non-degenerate and planar.
    pub fn validate(&self) -> Result<()> {
        if self.corners.iter().any(|c| !c.is_finite()) {
            return Err(Error::DegenerateGeometry(format!(
                "display quad has a non-finite corner: {:?}",
                self.corners
            )));
        }

        for i in 0..4 {
            let next = (i + 1) % 4;
            if (self.corners[next] - self.corners[i]).length() < MIN_EDGE_LENGTH {
                return Err(Error::DegenerateGeometry(format!(
                    "display quad corners {} and {} coincide",
                    i, next
                )));
            }
        }

        let right = self.bottom_right() - self.bottom_left();
        let up = self.top_left() - self.bottom_left();
        let normal = right.normalize().cross(up.normalize());
        if normal.length() < MIN_EDGE_SINE {
            return Err(Error::DegenerateGeometry(
                "display quad bottom and left edges are collinear".to_string(),
            ));
        }

        let size = right.length().max(up.length());
        let offset = (self.top_right() - self.bottom_left()).dot(normal.normalize()).abs();
        if offset > PLANARITY_TOLERANCE * size {
            return Err(Error::DegenerateGeometry(format!(
                "display quad is not planar (top-right corner is {:.6} m off the plane)",
                offset
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
