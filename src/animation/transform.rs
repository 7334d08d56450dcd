// Composing evaluated channel values into node transforms

use std::collections::BTreeMap;

use nalgebra_glm as glm;

use super::interpolation::{evaluate, quat_from_xyzw};
use super::types::{Animation, TargetProperty};

/// Right-multiply one property value onto `matrix`.
pub fn apply_property(matrix: &glm::Mat4, property: TargetProperty, value: &glm::Vec4) -> glm::Mat4 {
    match property {
        TargetProperty::Translation => glm::translate(matrix, &value.xyz()),
        TargetProperty::Rotation => matrix * glm::quat_to_mat4(&quat_from_xyzw(value)),
        TargetProperty::Scale => glm::scale(matrix, &value.xyz()),
    }
}

/// Per-frame output of a clip: one matrix per animated node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTransforms {
    nodes: BTreeMap<usize, glm::Mat4>,
    model: glm::Mat4,
}

impl Default for NodeTransforms {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            model: glm::identity(),
        }
    }
}

impl NodeTransforms {
    pub fn get(&self, node: usize) -> Option<&glm::Mat4> {
        self.nodes.get(&node)
    }

    /// Column-major 4x4 matrix of `node`, ready for a uniform upload.
    pub fn column_major(&self, node: usize) -> Option<[f32; 16]> {
        self.nodes.get(&node).map(to_column_major)
    }

    /// Every channel of the clip composed onto one matrix in channel order,
    /// regardless of target node.
    pub fn model_matrix(&self) -> &glm::Mat4 {
        &self.model
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &glm::Mat4)> {
        self.nodes.iter().map(|(node, m)| (*node, m))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

pub fn to_column_major(matrix: &glm::Mat4) -> [f32; 16] {
    let mut out = [0.0; 16];
    out.copy_from_slice(matrix.as_slice());
    out
}

/// Evaluate every channel of `clip` at `time`.
///
/// Each target node starts from identity; channels are applied in declaration order.
pub fn evaluate_clip(clip: &Animation, time: f32) -> NodeTransforms {
    let mut out = NodeTransforms::default();
    for channel in &clip.channels {
        let Some(sampler) = clip.sampler(channel) else {
            continue;
        };
        let value = evaluate(sampler, time);
        let node = out.nodes.entry(channel.node).or_insert_with(glm::identity);
        *node = apply_property(node, channel.property, &value);
        out.model = apply_property(&out.model, channel.property, &value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::types::{Channel, Interpolation, Sampler};

    fn constant(value: glm::Vec4) -> Sampler {
        Sampler::new(vec![0.0], vec![value], Interpolation::Linear)
    }

    fn approx(a: &glm::Mat4, b: &glm::Mat4) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn translation_lands_in_last_column() {
        let clip = Animation {
            samplers: vec![constant(glm::vec4(1.0, 2.0, 3.0, 0.0))],
            channels: vec![Channel {
                sampler: 0,
                node: 7,
                property: TargetProperty::Translation,
            }],
            ..Default::default()
        };
        let transforms = evaluate_clip(&clip, 0.0);
        let m = transforms.column_major(7).unwrap();
        assert_eq!(&m[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(m[15], 1.0);
        assert!(transforms.get(0).is_none());
    }

    #[test]
    fn channels_compose_in_declaration_order() {
        // translate then scale: the scale does not affect the translation column.
        let clip = Animation {
            samplers: vec![
                constant(glm::vec4(1.0, 0.0, 0.0, 0.0)),
                constant(glm::vec4(2.0, 2.0, 2.0, 0.0)),
            ],
            channels: vec![
                Channel {
                    sampler: 0,
                    node: 0,
                    property: TargetProperty::Translation,
                },
                Channel {
                    sampler: 1,
                    node: 0,
                    property: TargetProperty::Scale,
                },
            ],
            ..Default::default()
        };
        let m = *evaluate_clip(&clip, 0.0).get(0).unwrap();
        let expected = glm::scale(
            &glm::translate(&glm::identity(), &glm::vec3(1.0, 0.0, 0.0)),
            &glm::vec3(2.0, 2.0, 2.0),
        );
        assert!(approx(&m, &expected));
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(0, 0)], 2.0);
    }

    #[test]
    fn rotation_uses_xyzw_order() {
        // 90 degrees about Z.
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let m = apply_property(
            &glm::identity(),
            TargetProperty::Rotation,
            &glm::vec4(0.0, 0.0, half, half),
        );
        let x = m * glm::vec4(1.0, 0.0, 0.0, 1.0);
        assert!((x.x).abs() < 1e-5);
        assert!((x.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn nodes_are_independent() {
        let clip = Animation {
            samplers: vec![constant(glm::vec4(1.0, 0.0, 0.0, 0.0))],
            channels: vec![
                Channel {
                    sampler: 0,
                    node: 1,
                    property: TargetProperty::Translation,
                },
                Channel {
                    sampler: 0,
                    node: 2,
                    property: TargetProperty::Translation,
                },
            ],
            ..Default::default()
        };
        let transforms = evaluate_clip(&clip, 0.0);
        assert_eq!(transforms.len(), 2);
        assert_eq!(transforms.get(1).unwrap()[(0, 3)], 1.0);
        assert_eq!(transforms.get(2).unwrap()[(0, 3)], 1.0);
        // The model matrix sees both translations.
        assert_eq!(transforms.model_matrix()[(0, 3)], 2.0);
    }
}
