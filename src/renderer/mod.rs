// Boundary to the rendering collaborator: draw descriptors and the upload seam.
// Nothing in this module draws.

mod bounding_box;
mod headless;
mod primitive_render_info;

pub use bounding_box::*;
pub use headless::*;
pub use primitive_render_info::*;
