use crate::accessor::{AccessorView, ComponentType};
use crate::error::{EntityKind, GltfError, ImportReport, Result};
use crate::model::{Asset, document};
use crate::renderer::{
    AttributeSemantic, BoundingBox, DrawDescriptor, GpuUploader, IndexFormat, PrimitiveGeometry, Topology,
};

/// Decode every indexed primitive of every mesh.
///
/// Primitives without an index accessor are not supported and are skipped
/// silently; malformed ones are reported and skipped.
pub fn import_primitives(asset: &Asset, report: &mut ImportReport) -> Vec<PrimitiveGeometry> {
    let mut geometries = Vec::new();

    for (mesh_index, mesh) in asset.document.meshes.iter().enumerate() {
        for (prim_index, primitive) in mesh.primitives.iter().enumerate() {
            let Some(indices) = primitive.indices else {
                log::info!("Mesh {mesh_index} primitive {prim_index} has no indices, skipping");
                continue;
            };
            match import_primitive(asset, mesh_index, prim_index, primitive, indices, report) {
                Ok(geometry) => {
                    log::debug!(
                        "  Mesh {mesh_index} primitive {prim_index}: {} vertices, {} indices, {:?}",
                        geometry.vertex_count(),
                        geometry.indices.len(),
                        geometry.topology
                    );
                    geometries.push(geometry);
                }
                Err(e) => report.push(EntityKind::Primitive, &[mesh_index, prim_index], e),
            }
        }
    }

    log::info!("Loaded {} primitives", geometries.len());
    geometries
}

fn import_primitive(
    asset: &Asset,
    mesh: usize,
    primitive: usize,
    raw: &document::Primitive,
    indices: usize,
    report: &mut ImportReport,
) -> Result<PrimitiveGeometry> {
    let topology = Topology::from_mode(raw.mode).ok_or(GltfError::UnsupportedMode(raw.mode))?;

    let position = raw
        .attributes
        .get(AttributeSemantic::Position.name())
        .ok_or(GltfError::MissingAttribute("POSITION"))?;
    let positions = AccessorView::from_asset(asset, *position)?.read_all::<3>()?;

    let path = [mesh, primitive];
    let normals = optional_attribute::<3>(asset, raw, AttributeSemantic::Normal, positions.len(), &path, report);
    let tex_coords = optional_attribute::<2>(asset, raw, AttributeSemantic::TexCoord0, positions.len(), &path, report);

    let index_view = AccessorView::from_asset(asset, indices)?;
    let index_format = match index_view.component_type() {
        ComponentType::U8 => IndexFormat::U8,
        ComponentType::U16 => IndexFormat::U16,
        ComponentType::U32 => IndexFormat::U32,
        other => return Err(GltfError::UnsupportedIndexType(other.to_string())),
    };
    let indices = index_view.read_indices()?;

    Ok(PrimitiveGeometry {
        mesh,
        primitive,
        bounds: BoundingBox::from_positions(&positions),
        positions,
        normals,
        tex_coords,
        indices,
        index_format,
        topology,
        material: raw.material,
    })
}

/// Decode an optional vertex stream. A stream that fails to decode or does not
/// match the position count is dropped; the primitive is kept.
fn optional_attribute<const N: usize>(
    asset: &Asset,
    raw: &document::Primitive,
    semantic: AttributeSemantic,
    vertex_count: usize,
    path: &[usize],
    report: &mut ImportReport,
) -> Option<Vec<[f32; N]>> {
    let accessor = *raw.attributes.get(semantic.name())?;
    let values = match AccessorView::from_asset(asset, accessor).and_then(|view| view.read_all::<N>()) {
        Ok(values) => values,
        Err(e) => {
            report.push(EntityKind::Accessor, path, e);
            return None;
        }
    };
    if values.len() != vertex_count {
        log::warn!(
            "{} has {} elements but POSITION has {}, dropping it",
            semantic.name(),
            values.len(),
            vertex_count
        );
        return None;
    }
    Some(values)
}

/// Hand each decoded primitive to the rendering collaborator and collect the
/// resulting draw descriptors. A primitive whose index count does not fit the
/// descriptor is reported and not uploaded.
pub fn upload_primitives(
    uploader: &mut dyn GpuUploader,
    geometries: &[PrimitiveGeometry],
    report: &mut ImportReport,
) -> Vec<DrawDescriptor> {
    let mut draws = Vec::with_capacity(geometries.len());
    for geometry in geometries {
        let index_count = match index_count(geometry.indices.len()) {
            Ok(count) => count,
            Err(e) => {
                report.push(EntityKind::Primitive, &[geometry.mesh, geometry.primitive], e);
                continue;
            }
        };
        draws.push(DrawDescriptor {
            vertex_array: uploader.upload(geometry),
            layout: geometry.layout(),
            index_count,
            topology: geometry.topology,
            index_format: geometry.index_format,
            material: geometry.material,
            bounds: geometry.bounds,
        });
    }
    draws
}

fn index_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| GltfError::TooManyElements {
        count: len,
        limit: u32::MAX as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_count_must_fit_u32() {
        assert_eq!(index_count(3).unwrap(), 3);
        assert_eq!(index_count(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_index_count_is_an_error() {
        let err = index_count(u32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, GltfError::TooManyElements { limit, .. } if limit == u32::MAX as usize));
    }
}
