pub mod buffer;
pub mod glb;
mod load;
mod primitive;

pub use load::{load_from_slice, load_gltf};
pub use primitive::{import_primitives, upload_primitives};
