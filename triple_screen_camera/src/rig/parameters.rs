/// Rig configuration — the physical description of the monitor setup.
///
/// All lengths are meters, the lateral angle is degrees. Bounded options carry
/// an inclusive `ParameterRange`; out-of-range values are rejected, never clamped.

use std::fmt;
use crate::error::{Error, Result};

// ============================================================================
// ScreenSetup
// ============================================================================

/// Single monitor (center camera only) or three monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenSetup {
    Single,
    #[default]
    Triple,
}

impl ScreenSetup {
    /// Human-readable label for settings menus.
    pub fn label(&self) -> &'static str {
        match self {
            ScreenSetup::Single => "Single Screen",
            ScreenSetup::Triple => "Triple Screen",
        }
    }

    /// Whether the lateral cameras render in this setup.
    pub fn lateral_cameras_active(&self) -> bool {
        *self == ScreenSetup::Triple
    }
}

// ============================================================================
// AspectRatio
// ============================================================================

/// Display aspect ratio: `width` is horizontal, `height` is vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f32,
    pub height: f32,
}

impl AspectRatio {
    pub const WIDESCREEN_16_9: Self = Self { width: 16.0, height: 9.0 };
    pub const WIDESCREEN_16_10: Self = Self { width: 16.0, height: 10.0 };
    pub const STANDARD_4_3: Self = Self { width: 4.0, height: 3.0 };

    /// Common monitor ratios with their labels.
    pub const PRESETS: [(&'static str, AspectRatio); 3] = [
        ("16:9", Self::WIDESCREEN_16_9),
        ("16:10", Self::WIDESCREEN_16_10),
        ("4:3", Self::STANDARD_4_3),
    ];

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `width / height`
    pub fn ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Both components must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for value in [self.width, self.height] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(Error::OptionOutOfRange {
                    option: ASPECT_RATIO.name,
                    value,
                    min: ASPECT_RATIO.min,
                    max: ASPECT_RATIO.max,
                });
            }
        }
        Ok(())
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WIDESCREEN_16_9
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

// ============================================================================
// ParameterRange
// ============================================================================

/// Inclusive bounds of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
}

impl ParameterRange {
    /// `min <= value <= max`. NaN is never contained.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// `Ok(())` if contained, `Error::OptionOutOfRange` otherwise.
    pub fn check(&self, value: f32) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(Error::OptionOutOfRange {
                option: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Each aspect ratio component must be positive.
pub const ASPECT_RATIO: ParameterRange =
    ParameterRange { name: "AspectRatio", min: f32::MIN_POSITIVE, max: f32::MAX };
pub const DISPLAY_WIDTH: ParameterRange =
    ParameterRange { name: "DisplayWidth", min: 0.01, max: 3.0 };
pub const DISTANCE_FROM_CENTER_DISPLAY: ParameterRange =
    ParameterRange { name: "DistanceFromCenterDisplay", min: 0.01, max: 3.0 };
pub const LATERAL_DISPLAYS_ANGLE: ParameterRange =
    ParameterRange { name: "LateralDisplaysAngle", min: 0.0, max: 90.0 };
pub const LATERAL_DISPLAYS_MARGIN: ParameterRange =
    ParameterRange { name: "LateralDisplaysMargin", min: 0.0, max: 1.0 };
pub const NEAR_CLIPPING_PLANE: ParameterRange =
    ParameterRange { name: "NearClippingPlane", min: 0.001, max: f32::MAX };
pub const FAR_CLIPPING_PLANE: ParameterRange =
    ParameterRange { name: "FarClippingPlane", min: 1.0, max: f32::MAX };

// ============================================================================
// RigParameters
// ============================================================================

/// Physical rig description. Defaults describe a 16:9 triple setup with 0.5 m
/// wide monitors, 0.5 m from the eye, lateral monitors angled 45°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigParameters {
    pub screen_setup: ScreenSetup,
    pub aspect_ratio: AspectRatio,
    /// Width of each monitor
    pub display_width: f32,
    /// Eye to center monitor
    pub distance_from_center_display: f32,
    /// Angle between center and lateral monitors, degrees
    pub lateral_displays_angle: f32,
    /// Gap between center and lateral monitor edges (bezels)
    pub lateral_displays_margin: f32,
    /// Near clip of the center camera; lateral cameras derive theirs from it
    pub near_clipping_plane: f32,
    /// Far clip of the center camera; lateral cameras derive theirs from it
    pub far_clipping_plane: f32,
    /// Recompute after every successful `set_parameter`
    pub auto_update: bool,
}

impl Default for RigParameters {
    fn default() -> Self {
        Self {
            screen_setup: ScreenSetup::Triple,
            aspect_ratio: AspectRatio::WIDESCREEN_16_9,
            display_width: 0.5,
            distance_from_center_display: 0.5,
            lateral_displays_angle: 45.0,
            lateral_displays_margin: 0.0,
            near_clipping_plane: 0.2,
            far_clipping_plane: 1000.0,
            auto_update: false,
        }
    }
}

impl RigParameters {
    /// Center monitor height: width divided by the aspect ratio.
    pub fn display_height(&self) -> f32 {
        self.display_width / self.aspect_ratio.ratio()
    }

    /// Check every bounded option. Returns the first violation.
    pub fn validate(&self) -> Result<()> {
        self.aspect_ratio.validate()?;
        DISPLAY_WIDTH.check(self.display_width)?;
        DISTANCE_FROM_CENTER_DISPLAY.check(self.distance_from_center_display)?;
        LATERAL_DISPLAYS_ANGLE.check(self.lateral_displays_angle)?;
        LATERAL_DISPLAYS_MARGIN.check(self.lateral_displays_margin)?;
        NEAR_CLIPPING_PLANE.check(self.near_clipping_plane)?;
        FAR_CLIPPING_PLANE.check(self.far_clipping_plane)?;
        Ok(())
    }

    /// Validate `parameter` and store it. Leaves `self` untouched on error.
    pub(crate) fn assign(&mut self, parameter: RigParameter) -> Result<()> {
        parameter.validate()?;

        match parameter {
            RigParameter::ScreenSetup(v) => self.screen_setup = v,
            RigParameter::AspectRatio(v) => self.aspect_ratio = v,
            RigParameter::DisplayWidth(v) => self.display_width = v,
            RigParameter::DistanceFromCenterDisplay(v) => self.distance_from_center_display = v,
            RigParameter::LateralDisplaysAngle(v) => self.lateral_displays_angle = v,
            RigParameter::LateralDisplaysMargin(v) => self.lateral_displays_margin = v,
            RigParameter::NearClippingPlane(v) => self.near_clipping_plane = v,
            RigParameter::FarClippingPlane(v) => self.far_clipping_plane = v,
            RigParameter::AutoUpdate(v) => self.auto_update = v,
        }
        Ok(())
    }
}

// ============================================================================
// RigParameter
// ============================================================================

/// A single option write, validated by `CameraRig::try_set_parameter`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigParameter {
    ScreenSetup(ScreenSetup),
    AspectRatio(AspectRatio),
    DisplayWidth(f32),
    DistanceFromCenterDisplay(f32),
    LateralDisplaysAngle(f32),
    LateralDisplaysMargin(f32),
    NearClippingPlane(f32),
    FarClippingPlane(f32),
    AutoUpdate(bool),
}

impl RigParameter {
    /// Option name as shown in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            RigParameter::ScreenSetup(_) => "ScreenSetup",
            RigParameter::AspectRatio(_) => ASPECT_RATIO.name,
            RigParameter::DisplayWidth(_) => DISPLAY_WIDTH.name,
            RigParameter::DistanceFromCenterDisplay(_) => DISTANCE_FROM_CENTER_DISPLAY.name,
            RigParameter::LateralDisplaysAngle(_) => LATERAL_DISPLAYS_ANGLE.name,
            RigParameter::LateralDisplaysMargin(_) => LATERAL_DISPLAYS_MARGIN.name,
            RigParameter::NearClippingPlane(_) => NEAR_CLIPPING_PLANE.name,
            RigParameter::FarClippingPlane(_) => FAR_CLIPPING_PLANE.name,
            RigParameter::AutoUpdate(_) => "AutoUpdate",
        }
    }

    /// Range of a bounded float option, `None` for the others.
    pub fn range(&self) -> Option<ParameterRange> {
        match self {
            RigParameter::DisplayWidth(_) => Some(DISPLAY_WIDTH),
            RigParameter::DistanceFromCenterDisplay(_) => Some(DISTANCE_FROM_CENTER_DISPLAY),
            RigParameter::LateralDisplaysAngle(_) => Some(LATERAL_DISPLAYS_ANGLE),
            RigParameter::LateralDisplaysMargin(_) => Some(LATERAL_DISPLAYS_MARGIN),
            RigParameter::NearClippingPlane(_) => Some(NEAR_CLIPPING_PLANE),
            RigParameter::FarClippingPlane(_) => Some(FAR_CLIPPING_PLANE),
            RigParameter::ScreenSetup(_) | RigParameter::AspectRatio(_) | RigParameter::AutoUpdate(_) => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            RigParameter::AspectRatio(ratio) => ratio.validate(),
            RigParameter::DisplayWidth(v)
            | RigParameter::DistanceFromCenterDisplay(v)
            | RigParameter::LateralDisplaysAngle(v)
            | RigParameter::LateralDisplaysMargin(v)
            | RigParameter::NearClippingPlane(v)
            | RigParameter::FarClippingPlane(v) => match self.range() {
                Some(range) => range.check(*v),
                None => Ok(()),
            },
            RigParameter::ScreenSetup(_) | RigParameter::AutoUpdate(_) => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod tests;
