//! Camera module — camera capability, passive camera, and off-axis frustum fitting.
//!
//! The rig does not own the host's cameras. It writes to them through the
//! `RigCamera` trait; `Camera` is a ready-made passive implementation.

mod camera;
mod frustum;

pub use camera::{Camera, RigCamera, ViewportRect};
pub use frustum::OffAxisFrustum;
