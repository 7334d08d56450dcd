use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

/// Playback options of the headless driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Seconds advanced per simulated frame.
    pub fixed_timestep: f32,
    pub simulated_frames: u32,
    pub start_paused: bool,
    pub log_transforms: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            simulated_frames: 120,
            start_paused: false,
            log_transforms: true,
        }
    }
}

impl PlaybackSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "playback").unwrap_or_default()
    }
}
