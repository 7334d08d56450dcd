//! Decoding of glTF 2.0 assets into render-ready geometry, materials and
//! keyframe animation, plus playback of the decoded clips.

pub mod accessor;
pub mod animation;
pub mod error;
pub mod material;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod scene;
pub mod settings;

pub const CONFY_APP_NAME: &str = "gltfvis-rs";

pub use error::{GltfError, ImportReport, Result};
pub use model::Asset;
pub use parser::{load_from_slice, load_gltf};
pub use scene::Scene;
