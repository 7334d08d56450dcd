// Animation import: decodes sampler accessors into keyframe tracks and binds
// channels to node properties. The node graph itself is not touched.

use nalgebra_glm as glm;

use super::types::{Animation, Channel, Interpolation, Sampler, TargetProperty};
use crate::accessor::AccessorView;
use crate::error::{EntityKind, GltfError, ImportReport, Result, out_of_range};
use crate::model::{Asset, document};

/// Import every declared animation. Animations that fail (a channel with an
/// out-of-range sampler index, or nothing left to play) are reported and left out.
pub fn import_animations(asset: &Asset, report: &mut ImportReport) -> Vec<Animation> {
    let mut animations = Vec::new();
    for (index, raw) in asset.document.animations.iter().enumerate() {
        match import_animation(asset, index, raw, report) {
            Ok(animation) => {
                log::info!(
                    "Animation {index} '{}': {} samplers, {} channels, {:.3}s",
                    animation.name,
                    animation.samplers.len(),
                    animation.channels.len(),
                    animation.duration
                );
                animations.push(animation);
            }
            Err(e) => report.push(EntityKind::Animation, &[index], e),
        }
    }
    animations
}

fn import_animation(
    asset: &Asset,
    index: usize,
    raw: &document::Animation,
    report: &mut ImportReport,
) -> Result<Animation> {
    // Channels are validated first so a bad sampler reference rejects the whole
    // clip before any accessor is decoded.
    for channel in &raw.channels {
        if channel.sampler >= raw.samplers.len() {
            return Err(out_of_range(EntityKind::Sampler, channel.sampler, raw.samplers.len()));
        }
    }

    let mut animation = Animation {
        name: raw.name.clone().unwrap_or_else(|| format!("animation_{index}")),
        ..Default::default()
    };

    // Declared sampler index -> index in the compacted sampler list.
    let mut remap: Vec<Option<usize>> = Vec::with_capacity(raw.samplers.len());
    for (sampler_index, raw_sampler) in raw.samplers.iter().enumerate() {
        match import_sampler(asset, raw_sampler) {
            Ok(sampler) => {
                animation.duration = animation.duration.max(sampler.end_time());
                remap.push(Some(animation.samplers.len()));
                animation.samplers.push(sampler);
            }
            Err(e) => {
                report.push(EntityKind::Sampler, &[index, sampler_index], e);
                remap.push(None);
            }
        }
    }

    for (channel_index, raw_channel) in raw.channels.iter().enumerate() {
        let Some(sampler) = remap[raw_channel.sampler] else {
            log::warn!(
                "Animation {index} channel {channel_index}: sampler {} was dropped, skipping",
                raw_channel.sampler
            );
            continue;
        };
        let Some(node) = raw_channel.target.node else {
            log::debug!("Animation {index} channel {channel_index} has no target node");
            continue;
        };
        let Some(property) = TargetProperty::parse(&raw_channel.target.path) else {
            log::warn!(
                "Animation {index} channel {channel_index}: unsupported target path '{}'",
                raw_channel.target.path
            );
            continue;
        };
        animation.channels.push(Channel {
            sampler,
            node,
            property,
        });
    }

    if animation.channels.is_empty() {
        return Err(GltfError::NoChannels);
    }
    Ok(animation)
}

/// Decode one sampler's input (timestamps) and output (values) accessors.
pub fn import_sampler(asset: &Asset, raw: &document::AnimationSampler) -> Result<Sampler> {
    let interpolation = Interpolation::parse(&raw.interpolation);
    if interpolation != Interpolation::Linear {
        log::warn!(
            "Sampler declares {} interpolation; it will be evaluated as LINEAR",
            interpolation.name()
        );
    }

    let input = AccessorView::from_asset(asset, raw.input)?;
    if !input.component_type().is_float() {
        return Err(GltfError::NonFloatTimestamps(input.component_type().to_string()));
    }
    let mut times = input.read_scalars()?;

    let output = AccessorView::from_asset(asset, raw.output)?;
    let mut values: Vec<glm::Vec4> = output
        .iter::<4>()
        .map(|v| v.map(|[x, y, z, w]| glm::vec4(x, y, z, w)))
        .collect::<Result<_>>()?;

    if interpolation == Interpolation::CubicSpline {
        // (in-tangent, value, out-tangent) triplets; keep the value.
        values = values.chunks_exact(3).map(|triplet| triplet[1]).collect();
    }

    if times.len() != values.len() {
        log::warn!(
            "Sampler has {} timestamps but {} values, truncating",
            times.len(),
            values.len()
        );
        let n = times.len().min(values.len());
        times.truncate(n);
        values.truncate(n);
    }
    if times.is_empty() {
        return Err(GltfError::EmptySampler);
    }

    Ok(Sampler::new(times, values, interpolation))
}
