//! Display module — monitor quads and the triple monitor layout.

mod layout;
mod quad;

pub use layout::{ClipPlanes, DisplayPanels, lateral_clipping_plane};
pub use quad::{
    DisplayQuad,
    CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT, CORNER_TOP_RIGHT, CORNER_TOP_LEFT,
};
