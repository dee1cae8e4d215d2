/*!
# Triple Screen Camera

Off-axis camera rig for triple monitor driving simulators.

Three cameras share one eye point. Each camera's projection is fitted to the
physical rectangle of its monitor, so the picture continues across the bezels
the way the real world would when looking through three windows.

## Architecture

- **OffAxisFrustum**: Fits an asymmetric perspective projection to a planar quad
- **DisplayPanels**: Center and lateral monitor corners derived from the rig parameters
- **CameraRig**: Owns the parameters and drives the three cameras through `RigCamera`
- **RigCamera**: Camera capability implemented by the host (or use the passive `Camera`)
- **Diagnostics**: Pluggable logger receiving warnings and errors

Coordinates are right-handed, meters, camera forward is `-Z`. Projection matrices
follow the OpenGL convention (clip depth in `[-1, 1]`).
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod camera;
pub mod display;
pub mod rig;
pub mod transform;

// Main triple_screen namespace module
pub mod triple_screen {
    // Error types
    pub use crate::error::{Error, Result};

    // Diagnostics singleton
    pub use crate::diagnostics::Diagnostics;

    // Rig entry points
    pub use crate::rig::{CameraRig, CameraRigDesc, CameraSlot, RigParameters};
    pub use crate::transform::RigTransform;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Display layout sub-module
    pub mod display {
        pub use crate::display::*;
    }

    // Rig configuration sub-module
    pub mod rig {
        pub use crate::rig::*;
    }
}

// Re-export math library at crate root
pub use glam;
