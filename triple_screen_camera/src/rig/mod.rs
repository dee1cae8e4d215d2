//! Rig module — configuration and the camera rig driving the three cameras.

mod camera_rig;
mod parameters;

pub use camera_rig::{CameraRig, CameraRigDesc, CameraSlot, RigLayout};
pub use parameters::{
    AspectRatio, ParameterRange, RigParameter, RigParameters, ScreenSetup,
    ASPECT_RATIO, DISPLAY_WIDTH, DISTANCE_FROM_CENTER_DISPLAY, LATERAL_DISPLAYS_ANGLE,
    LATERAL_DISPLAYS_MARGIN, NEAR_CLIPPING_PLANE, FAR_CLIPPING_PLANE,
};
