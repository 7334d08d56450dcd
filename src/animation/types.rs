// Animation data types, decided once at import time

use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

/// Interpolation mode declared by a sampler.
///
/// Only `Linear` is evaluated as declared; `Step` and `CubicSpline` are kept so
/// callers can tell them apart, but they are evaluated linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
    CubicSpline,
}

impl Interpolation {
    /// Parse the declared mode; blank or unrecognised strings are `Linear`.
    pub fn parse(mode: &str) -> Self {
        match mode {
            "STEP" => Self::Step,
            "CUBICSPLINE" => Self::CubicSpline,
            "LINEAR" | "" => Self::Linear,
            other => {
                log::warn!("Unknown interpolation mode: {other}, defaulting to LINEAR");
                Self::Linear
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "LINEAR",
            Self::Step => "STEP",
            Self::CubicSpline => "CUBICSPLINE",
        }
    }
}

/// Node transform property a channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetProperty {
    Translation,
    Rotation,
    Scale,
}

impl TargetProperty {
    /// `None` for paths this engine does not animate (e.g. morph `weights`).
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "translation" => Some(Self::Translation),
            "rotation" => Some(Self::Rotation),
            "scale" => Some(Self::Scale),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
        }
    }
}

/// Keyframe track: ascending timestamps paired with 4-component values.
///
/// Values narrower than 4 components are zero-padded. A sampler always holds at
/// least one keyframe; the importer drops empty ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampler {
    pub times: Vec<f32>,
    pub values: Vec<glm::Vec4>,
    pub interpolation: Interpolation,
}

impl Sampler {
    pub fn new(times: Vec<f32>, values: Vec<glm::Vec4>, interpolation: Interpolation) -> Self {
        debug_assert_eq!(times.len(), values.len());
        Self {
            times,
            values,
            interpolation,
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Last timestamp, or 0 for an empty track.
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }
}

/// Binding of a sampler to a node property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// Index into the owning animation's sampler list.
    pub sampler: usize,
    pub node: usize,
    pub property: TargetProperty,
}

/// One clip: samplers, the channels that use them, and the clip length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animation {
    pub name: String,
    pub samplers: Vec<Sampler>,
    pub channels: Vec<Channel>,
    /// Largest timestamp across all samplers.
    pub duration: f32,
}

impl Animation {
    pub fn sampler(&self, channel: &Channel) -> Option<&Sampler> {
        self.samplers.get(channel.sampler)
    }
}
