// Animation system: import, keyframe evaluation and playback

pub mod importer;
pub mod interpolation;
pub mod player;
pub mod transform;
pub mod types;

pub use importer::import_animations;
pub use interpolation::evaluate;
pub use player::{AnimationPlayer, FrameContext, FrameTimer, PlaybackState};
pub use transform::{NodeTransforms, evaluate_clip};
pub use types::*;
