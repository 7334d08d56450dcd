// Playback clock for the active clip.
// Owned by the frame loop and passed into the per-frame update; there is no
// process-wide animation state.

use std::time::Instant;

use super::transform::{NodeTransforms, evaluate_clip};
use super::types::Animation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Playing,
    Paused,
}

/// Current time and play/pause state of one looping clip.
#[derive(Debug, Clone, Default)]
pub struct AnimationPlayer {
    time: f32,
    state: PlaybackState,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        };
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Jump to `time`, clamped to `[0, duration]`.
    pub fn seek(&mut self, time: f32, duration: f32) {
        self.time = time.clamp(0.0, duration.max(0.0));
    }

    /// Advance the clock by `delta` seconds; wraps to 0 once past `duration`.
    /// Negative deltas are ignored. Returns the new time.
    pub fn advance(&mut self, duration: f32, delta: f32) -> f32 {
        if self.is_playing() {
            self.time += delta.max(0.0);
            if self.time > duration {
                self.time = 0.0;
            }
        }
        self.time
    }

    /// Advance against `clip` and evaluate its channels at the new time.
    pub fn tick(&mut self, clip: &Animation, delta: f32) -> NodeTransforms {
        self.advance(clip.duration, delta);
        evaluate_clip(clip, self.time)
    }
}

/// Wall-clock delta between frames.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last: Instant,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    /// Seconds since the previous call (or since creation).
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }
}

/// Per-frame animation context threaded through the render loop.
#[derive(Debug, Clone, Default)]
pub struct FrameContext {
    pub player: AnimationPlayer,
    pub timer: FrameTimer,
}

impl FrameContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by wall-clock time and evaluate the active clip, if any.
    pub fn update(&mut self, clip: Option<&Animation>) -> NodeTransforms {
        let delta = self.timer.delta();
        self.update_with_delta(clip, delta)
    }

    /// Advance by a fixed `delta` and evaluate the active clip, if any.
    pub fn update_with_delta(&mut self, clip: Option<&Animation>, delta: f32) -> NodeTransforms {
        match clip {
            Some(clip) => self.player.tick(clip, delta),
            None => NodeTransforms::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::types::{Channel, Interpolation, Sampler, TargetProperty};
    use nalgebra_glm as glm;
    use std::thread;
    use std::time::Duration;

    fn clip(duration: f32) -> Animation {
        Animation {
            name: "slide".to_string(),
            samplers: vec![Sampler::new(
                vec![0.0, duration],
                vec![glm::vec4(0.0, 0.0, 0.0, 0.0), glm::vec4(duration, 0.0, 0.0, 0.0)],
                Interpolation::Linear,
            )],
            channels: vec![Channel {
                sampler: 0,
                node: 0,
                property: TargetProperty::Translation,
            }],
            duration,
        }
    }

    #[test]
    fn starts_playing_at_zero() {
        let player = AnimationPlayer::new();
        assert!(player.is_playing());
        assert_eq!(player.time(), 0.0);
    }

    #[test]
    fn wraps_after_duration() {
        let mut player = AnimationPlayer::new();
        for _ in 0..7 {
            let t = player.advance(2.0, 0.3);
            assert!((0.0..=2.0).contains(&t), "time {t} out of range");
        }
        // 7 * 0.3 = 2.1 > 2.0
        assert_eq!(player.time(), 0.0);
        player.advance(2.0, 0.5);
        assert_eq!(player.time(), 0.5);
    }

    #[test]
    fn time_never_exceeds_duration() {
        let mut player = AnimationPlayer::new();
        for _ in 0..1000 {
            let t = player.advance(2.0, 0.017);
            assert!(t >= 0.0 && t <= 2.0);
        }
    }

    #[test]
    fn paused_clock_is_frozen() {
        let mut player = AnimationPlayer::new();
        player.advance(2.0, 0.5);
        player.pause();
        player.advance(2.0, 0.5);
        assert_eq!(player.time(), 0.5);
        player.toggle();
        player.advance(2.0, 0.5);
        assert_eq!(player.time(), 1.0);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut player = AnimationPlayer::new();
        player.advance(2.0, -1.0);
        assert_eq!(player.time(), 0.0);
    }

    #[test]
    fn seek_is_clamped() {
        let mut player = AnimationPlayer::new();
        player.seek(5.0, 2.0);
        assert_eq!(player.time(), 2.0);
        player.seek(-1.0, 2.0);
        assert_eq!(player.time(), 0.0);
    }

    #[test]
    fn reset_rewinds_and_keeps_state() {
        let mut player = AnimationPlayer::new();
        player.advance(2.0, 1.5);
        player.pause();
        player.reset();
        assert_eq!(player.time(), 0.0);
        assert_eq!(player.state(), PlaybackState::Paused);
    }

    #[test]
    fn timer_reports_elapsed_seconds() {
        let mut timer = FrameTimer::new();
        thread::sleep(Duration::from_millis(50));
        let first = timer.delta();
        assert!(first >= 0.05, "delta {first}");
        let second = timer.delta();
        assert!(second >= 0.0 && second < first);
    }

    #[test]
    fn frame_context_follows_the_wall_clock() {
        let clip = clip(60.0);
        let mut ctx = FrameContext::new();
        thread::sleep(Duration::from_millis(20));
        let transforms = ctx.update(Some(&clip));
        let t = ctx.player.time();
        assert!(t >= 0.02 && t < 60.0, "time {t}");
        // The clip slides one unit per second.
        assert!((transforms.get(0).unwrap()[(0, 3)] - t).abs() < 1e-3);
    }

    #[test]
    fn tick_evaluates_at_new_time() {
        let clip = clip(2.0);
        let mut player = AnimationPlayer::new();
        let transforms = player.tick(&clip, 0.5);
        assert!((transforms.get(0).unwrap()[(0, 3)] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn frame_context_without_clip_is_empty() {
        let mut ctx = FrameContext::new();
        assert!(ctx.update_with_delta(None, 0.1).is_empty());
        assert_eq!(ctx.player.time(), 0.0);
    }
}
