/// CameraRig — owns the rig parameters and drives the three cameras.
///
/// Option writes go through `try_set_parameter` (validate + store, nothing else)
/// or `set_parameter` (same, then the option's update cascade when auto update
/// is on). `apply_changes` runs the full cascade explicitly:
///
/// 1. lateral cameras on/off for the screen setup
/// 2. center camera viewport (full or middle third)
/// 3. monitor corners, world and local space
/// 4. lateral clip planes and one frustum fit per camera

use std::fmt;
use crate::camera::{OffAxisFrustum, RigCamera, ViewportRect};
use crate::display::{ClipPlanes, DisplayPanels};
use crate::error::{Error, Result};
use crate::transform::RigTransform;
use super::parameters::{AspectRatio, RigParameter, RigParameters, ScreenSetup};

const LOG_SOURCE: &str = "triple_screen::CameraRig";

// ============================================================================
// CameraSlot
// ============================================================================

/// One of the rig's three cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraSlot {
    Center,
    Left,
    Right,
}

impl CameraSlot {
    pub const ALL: [CameraSlot; 3] = [CameraSlot::Center, CameraSlot::Left, CameraSlot::Right];
}

impl fmt::Display for CameraSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraSlot::Center => write!(f, "center"),
            CameraSlot::Left => write!(f, "left"),
            CameraSlot::Right => write!(f, "right"),
        }
    }
}

// ============================================================================
// CameraRigDesc
// ============================================================================

/// Everything needed to build a rig. All three cameras are required.
pub struct CameraRigDesc<C: RigCamera> {
    pub transform: RigTransform,
    pub parameters: RigParameters,
    pub center_camera: Option<C>,
    pub left_camera: Option<C>,
    pub right_camera: Option<C>,
}

impl<C: RigCamera> CameraRigDesc<C> {
    /// Descriptor with default parameters and an identity transform.
    pub fn new(center_camera: C, left_camera: C, right_camera: C) -> Self {
        Self {
            transform: RigTransform::IDENTITY,
            parameters: RigParameters::default(),
            center_camera: Some(center_camera),
            left_camera: Some(left_camera),
            right_camera: Some(right_camera),
        }
    }
}

// ============================================================================
// RigLayout
// ============================================================================

/// Geometry derived from the parameters by the last successful update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigLayout {
    /// Monitor corners in world space
    pub world_panels: DisplayPanels,
    /// Monitor corners relative to the rig transform (debug drawing)
    pub local_panels: DisplayPanels,
    /// Clip distances used by both lateral cameras
    pub lateral_clip: ClipPlanes,
    pub center_frustum: OffAxisFrustum,
    pub left_frustum: OffAxisFrustum,
    pub right_frustum: OffAxisFrustum,
}

impl RigLayout {
    /// Compute panels, lateral clip planes and all three frustums.
    ///
    /// Fails without side effects if any frustum cannot be fitted.
    pub fn compute(parameters: &RigParameters, transform: &RigTransform) -> Result<Self> {
        let world_panels = DisplayPanels::compute(parameters, transform);
        let local_panels = world_panels.to_local(transform);
        let lateral_clip = ClipPlanes::lateral(parameters, transform);
        let eye = transform.position();

        let center_frustum = OffAxisFrustum::fit(
            &world_panels.center,
            eye,
            parameters.near_clipping_plane,
            parameters.far_clipping_plane,
        )?;
        let left_frustum = OffAxisFrustum::fit(&world_panels.left, eye, lateral_clip.near, lateral_clip.far)?;
        let right_frustum = OffAxisFrustum::fit(&world_panels.right, eye, lateral_clip.near, lateral_clip.far)?;

        Ok(Self {
            world_panels,
            local_panels,
            lateral_clip,
            center_frustum,
            left_frustum,
            right_frustum,
        })
    }

    pub fn frustum(&self, slot: CameraSlot) -> &OffAxisFrustum {
        match slot {
            CameraSlot::Center => &self.center_frustum,
            CameraSlot::Left => &self.left_frustum,
            CameraSlot::Right => &self.right_frustum,
        }
    }
}

// ============================================================================
// CameraRig
// ============================================================================

/// Triple screen camera rig.
///
/// # Example
///
/// ```
/// use triple_screen_camera::triple_screen::camera::Camera;
/// use triple_screen_camera::triple_screen::rig::{CameraRig, CameraRigDesc, CameraSlot};
///
/// let mut rig = CameraRig::new(CameraRigDesc::new(Camera::new(), Camera::new(), Camera::new()))?;
///
/// rig.set_lateral_displays_angle(60.0)?;
/// rig.apply_changes()?;
///
/// let left = rig.camera(CameraSlot::Left);
/// assert!(left.is_active());
/// # Ok::<(), triple_screen_camera::triple_screen::Error>(())
/// ```
pub struct CameraRig<C: RigCamera> {
    parameters: RigParameters,
    transform: RigTransform,
    center_camera: C,
    left_camera: C,
    right_camera: C,
    layout: RigLayout,
}

impl<C: RigCamera> CameraRig<C> {
    /// Log errors before returning them
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::OptionOutOfRange { .. } => {}
            Error::DegenerateGeometry(msg) => {
                crate::rig_error!(LOG_SOURCE, "Camera frustum update failed: {}", msg);
            }
            Error::MissingCamera(_) => {
                crate::rig_error!(LOG_SOURCE, "Rig construction failed: {}", error);
            }
        }
        error
    }

    /// Emit the range warning for a rejected option value
    fn warn_out_of_range(error: &Error) {
        if let Error::OptionOutOfRange { option, value, min, max } = error {
            crate::rig_warn!(
                LOG_SOURCE,
                "New option value is out of range\nOption name: {}\nNew value: {:.4}, range: {:.4} - {:.4}",
                option, value, min, max
            );
        }
    }

    /// Build a rig and run the full update once.
    ///
    /// # Errors
    ///
    /// - `Error::MissingCamera` if a camera is `None`
    /// - `Error::OptionOutOfRange` if a parameter is outside its range
    /// - `Error::DegenerateGeometry` if the initial frustum fit fails
    pub fn new(desc: CameraRigDesc<C>) -> Result<Self> {
        let center_camera = desc.center_camera
            .ok_or_else(|| Self::log_and_return_error(Error::MissingCamera(CameraSlot::Center)))?;
        let left_camera = desc.left_camera
            .ok_or_else(|| Self::log_and_return_error(Error::MissingCamera(CameraSlot::Left)))?;
        let right_camera = desc.right_camera
            .ok_or_else(|| Self::log_and_return_error(Error::MissingCamera(CameraSlot::Right)))?;

        if let Err(error) = desc.parameters.validate() {
            Self::warn_out_of_range(&error);
            return Err(error);
        }

        let layout = RigLayout::compute(&desc.parameters, &desc.transform)
            .map_err(Self::log_and_return_error)?;

        let mut rig = Self {
            parameters: desc.parameters,
            transform: desc.transform,
            center_camera,
            left_camera,
            right_camera,
            layout,
        };
        rig.update_camera_active_state();
        rig.update_center_camera_viewport();
        rig.apply_layout();

        crate::rig_info!(
            LOG_SOURCE,
            "Camera rig created ({}, {} monitors {:.3} m wide)",
            rig.parameters.screen_setup.label(),
            rig.parameters.aspect_ratio,
            rig.parameters.display_width
        );

        Ok(rig)
    }

    // ===== GETTERS =====

    pub fn parameters(&self) -> &RigParameters {
        &self.parameters
    }

    pub fn transform(&self) -> &RigTransform {
        &self.transform
    }

    /// Derived geometry of the last successful update.
    pub fn layout(&self) -> &RigLayout {
        &self.layout
    }

    pub fn camera(&self, slot: CameraSlot) -> &C {
        match slot {
            CameraSlot::Center => &self.center_camera,
            CameraSlot::Left => &self.left_camera,
            CameraSlot::Right => &self.right_camera,
        }
    }

    /// Mutable camera access for host-side fields the rig does not own.
    pub fn camera_mut(&mut self, slot: CameraSlot) -> &mut C {
        match slot {
            CameraSlot::Center => &mut self.center_camera,
            CameraSlot::Left => &mut self.left_camera,
            CameraSlot::Right => &mut self.right_camera,
        }
    }

    pub fn screen_setup(&self) -> ScreenSetup {
        self.parameters.screen_setup
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.parameters.aspect_ratio
    }

    pub fn display_width(&self) -> f32 {
        self.parameters.display_width
    }

    pub fn distance_from_center_display(&self) -> f32 {
        self.parameters.distance_from_center_display
    }

    pub fn lateral_displays_angle(&self) -> f32 {
        self.parameters.lateral_displays_angle
    }

    pub fn lateral_displays_margin(&self) -> f32 {
        self.parameters.lateral_displays_margin
    }

    pub fn near_clipping_plane(&self) -> f32 {
        self.parameters.near_clipping_plane
    }

    pub fn far_clipping_plane(&self) -> f32 {
        self.parameters.far_clipping_plane
    }

    pub fn auto_update(&self) -> bool {
        self.parameters.auto_update
    }

    // ===== OPTION WRITES =====

    /// Validate and store one option. Never updates cameras.
    ///
    /// On a range violation the stored value is kept, one warning is logged, and
    /// `Error::OptionOutOfRange` is returned.
    pub fn try_set_parameter(&mut self, parameter: RigParameter) -> Result<()> {
        self.parameters.assign(parameter).map_err(|error| {
            Self::warn_out_of_range(&error);
            error
        })
    }

    /// `try_set_parameter`, then the option's update cascade if auto update is on.
    ///
    /// - `ScreenSetup`: camera active state + center viewport
    /// - `AutoUpdate(true)`: full update
    /// - any other option: monitor positions + camera frustums
    pub fn set_parameter(&mut self, parameter: RigParameter) -> Result<()> {
        self.try_set_parameter(parameter)?;

        match parameter {
            RigParameter::AutoUpdate(enabled) => {
                if enabled {
                    self.apply_changes()?;
                }
            }
            _ if !self.parameters.auto_update => {}
            RigParameter::ScreenSetup(_) => {
                self.update_camera_active_state();
                self.update_center_camera_viewport();
            }
            _ => self.update_camera_frustums()?,
        }
        Ok(())
    }

    pub fn set_screen_setup(&mut self, value: ScreenSetup) -> Result<()> {
        self.set_parameter(RigParameter::ScreenSetup(value))
    }

    pub fn set_aspect_ratio(&mut self, value: AspectRatio) -> Result<()> {
        self.set_parameter(RigParameter::AspectRatio(value))
    }

    pub fn set_display_width(&mut self, value: f32) -> Result<()> {
        self.set_parameter(RigParameter::DisplayWidth(value))
    }

    pub fn set_distance_from_center_display(&mut self, value: f32) -> Result<()> {
        self.set_parameter(RigParameter::DistanceFromCenterDisplay(value))
    }

    pub fn set_lateral_displays_angle(&mut self, value: f32) -> Result<()> {
        self.set_parameter(RigParameter::LateralDisplaysAngle(value))
    }

    pub fn set_lateral_displays_margin(&mut self, value: f32) -> Result<()> {
        self.set_parameter(RigParameter::LateralDisplaysMargin(value))
    }

    pub fn set_near_clipping_plane(&mut self, value: f32) -> Result<()> {
        self.set_parameter(RigParameter::NearClippingPlane(value))
    }

    pub fn set_far_clipping_plane(&mut self, value: f32) -> Result<()> {
        self.set_parameter(RigParameter::FarClippingPlane(value))
    }

    /// Enabling auto update runs the full update immediately.
    pub fn set_auto_update(&mut self, value: bool) -> Result<()> {
        self.set_parameter(RigParameter::AutoUpdate(value))
    }

    /// Move the eye. Takes effect on the next update.
    pub fn set_transform(&mut self, transform: RigTransform) {
        self.transform = transform;
    }

    // ===== UPDATES =====

    /// Full update after changing options with auto update disabled.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateGeometry` if a frustum cannot be fitted (e.g. far
    /// clip not beyond near clip). Active state and viewport are still updated;
    /// frustums and the stored layout keep their previous values.
    pub fn apply_changes(&mut self) -> Result<()> {
        self.update_camera_active_state();
        self.update_center_camera_viewport();
        self.update_camera_frustums()
    }

    /// Alias of `apply_changes`.
    pub fn recompute(&mut self) -> Result<()> {
        self.apply_changes()
    }

    fn update_camera_active_state(&mut self) {
        let active = self.parameters.screen_setup.lateral_cameras_active();
        self.left_camera.set_active(active);
        self.right_camera.set_active(active);
    }

    fn update_center_camera_viewport(&mut self) {
        let rect = match self.parameters.screen_setup {
            ScreenSetup::Single => ViewportRect::FULL,
            ScreenSetup::Triple => ViewportRect::CENTER_THIRD,
        };
        self.center_camera.set_viewport_rect(rect);
    }

    /// Monitor positions, lateral clip planes and frustum fits.
    fn update_camera_frustums(&mut self) -> Result<()> {
        self.layout = RigLayout::compute(&self.parameters, &self.transform)
            .map_err(Self::log_and_return_error)?;
        self.apply_layout();

        crate::rig_debug!(
            LOG_SOURCE,
            "Camera frustums updated (lateral clip near {:.4} far {:.4})",
            self.layout.lateral_clip.near,
            self.layout.lateral_clip.far
        );
        Ok(())
    }

    fn apply_layout(&mut self) {
        self.layout.center_frustum.apply(&mut self.center_camera);
        self.layout.left_frustum.apply(&mut self.left_camera);
        self.layout.right_frustum.apply(&mut self.right_camera);
    }
}

#[cfg(test)]
#[path = "camera_rig_tests.rs"]
mod tests;
