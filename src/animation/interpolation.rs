// Keyframe evaluation and transform helpers

use nalgebra_glm as glm;

use super::types::Sampler;

/// Sample `sampler` at `time`.
///
/// Clamps to the last value at or past the end and to the first value before the
/// start. Between keyframes every component is interpolated linearly, whatever
/// mode the sampler declares.
pub fn evaluate(sampler: &Sampler, time: f32) -> glm::Vec4 {
    debug_assert!(!sampler.is_empty(), "evaluating an empty sampler");
    let (Some(&last_time), Some(last_value)) = (sampler.times.last(), sampler.values.last()) else {
        return glm::Vec4::zeros();
    };
    if time >= last_time {
        return *last_value;
    }

    // First timestamp >= time.
    let next = sampler.times.partition_point(|&t| t < time);
    let prev = next.saturating_sub(1);

    let span = sampler.times[next] - sampler.times[prev];
    let t = if prev == next || span <= 0.0 {
        0.0
    } else {
        (time - sampler.times[prev]) / span
    };

    lerp_vec4(&sampler.values[prev], &sampler.values[next], t)
}

/// Component-wise `a * (1 - t) + b * t`; exact at `t == 0` and `t == 1`.
pub fn lerp_vec4(a: &glm::Vec4, b: &glm::Vec4, t: f32) -> glm::Vec4 {
    a.zip_map(b, |a, b| lerp_f32(a, b, t))
}

pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Quaternion from an `(x, y, z, w)` vector, normalized.
/// A zero-length vector gives the identity rotation.
pub fn quat_from_xyzw(v: &glm::Vec4) -> glm::Quat {
    let q = glm::quat(v.x, v.y, v.z, v.w);
    if glm::quat_length(&q) <= f32::EPSILON {
        glm::quat_identity()
    } else {
        glm::quat_normalize(&q)
    }
}
