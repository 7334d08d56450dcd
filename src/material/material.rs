use serde::{Deserialize, Serialize};

use super::AlphaMode;
use crate::model::document;

pub const DEFAULT_ALPHA_CUTOFF: f32 = 0.5;

/// Shading parameters handed to the renderer for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    pub alpha_mode: AlphaMode,
    pub alpha_cutoff: f32,
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: [1.0, 1.0, 1.0, 1.0],
            emissive: [0.0, 0.0, 0.0],
            metallic: 1.0,
            roughness: 1.0,
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
            double_sided: false,
        }
    }
}

impl Material {
    /// Build from a material record, filling absent factors with defaults.
    pub fn from_record(index: usize, raw: &document::Material) -> Self {
        let defaults = Self::default();
        let pbr = raw.pbr_metallic_roughness.clone().unwrap_or_default();
        Self {
            name: raw.name.clone().unwrap_or_else(|| format!("material_{index}")),
            base_color: pbr.base_color_factor.unwrap_or(defaults.base_color),
            emissive: raw.emissive_factor.unwrap_or(defaults.emissive),
            metallic: pbr.metallic_factor.unwrap_or(defaults.metallic),
            roughness: pbr.roughness_factor.unwrap_or(defaults.roughness),
            alpha_mode: AlphaMode::parse(raw.alpha_mode.as_deref()),
            alpha_cutoff: raw.alpha_cutoff.unwrap_or(DEFAULT_ALPHA_CUTOFF),
            double_sided: raw.double_sided,
        }
    }

    /// Back-face culling should be disabled for double-sided materials.
    pub fn cull_back_faces(&self) -> bool {
        !self.double_sided
    }
}

/// Import every material record. Material import cannot fail; absent fields
/// take their defaults.
pub fn import_materials(doc: &document::Document) -> Vec<Material> {
    let materials: Vec<Material> = doc
        .materials
        .iter()
        .enumerate()
        .map(|(index, raw)| Material::from_record(index, raw))
        .collect();
    log::info!("Loaded {} materials", materials.len());
    materials
}
