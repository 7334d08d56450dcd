// Everything the frame loop needs from one imported asset.

use crate::animation::{Animation, import_animations};
use crate::error::ImportReport;
use crate::material::{Material, import_materials};
use crate::model::Asset;
use crate::parser::{import_primitives, upload_primitives};
use crate::renderer::{BoundingBox, DrawDescriptor, GpuUploader};

#[derive(Debug, Default)]
pub struct Scene {
    pub draws: Vec<DrawDescriptor>,
    pub materials: Vec<Material>,
    pub animations: Vec<Animation>,
    /// Entities skipped during import.
    pub report: ImportReport,
}

impl Scene {
    /// Decode primitives, materials and animations of `asset`, uploading the
    /// geometry through `uploader`. Malformed entities are skipped and recorded
    /// in `report`; the rest of the asset still imports.
    pub fn import(asset: &Asset, uploader: &mut dyn GpuUploader) -> Self {
        let mut report = ImportReport::default();

        let geometries = import_primitives(asset, &mut report);
        let draws = upload_primitives(uploader, &geometries, &mut report);
        let materials = import_materials(&asset.document);
        let animations = import_animations(asset, &mut report);

        log::info!(
            "Scene ready: {} draws, {} materials, {} animations, {} skipped",
            draws.len(),
            materials.len(),
            animations.len(),
            report.issues.len()
        );

        Self {
            draws,
            materials,
            animations,
            report,
        }
    }

    /// The clip driven by playback: the first imported animation.
    pub fn active_clip(&self) -> Option<&Animation> {
        self.animations.first()
    }

    pub fn material(&self, draw: &DrawDescriptor) -> Option<&Material> {
        draw.material.and_then(|i| self.materials.get(i))
    }

    /// Union of all primitive bounds.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.draws
            .iter()
            .filter_map(|d| d.bounds)
            .reduce(|acc, b| acc.merge(&b))
    }
}
