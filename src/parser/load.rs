use std::fs;
use std::path::Path;

use super::buffer::resolve_buffers;
use super::glb::{is_glb, parse_glb};
use crate::error::Result;
use crate::model::{Asset, Document};

/// Load a `.gltf` or `.glb` asset from disk, with its external buffers.
pub fn load_gltf(path: impl AsRef<Path>) -> Result<Asset> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    log::info!("Loading {} ({} bytes)", path.display(), bytes.len());

    let mut asset = load_with_base(&bytes, path.parent())?;
    asset.source = Some(path.to_path_buf());
    Ok(asset)
}

/// Load an asset held in memory. Only embedded buffers (GLB chunk or `data:`
/// URIs) can be resolved.
pub fn load_from_slice(bytes: &[u8]) -> Result<Asset> {
    load_with_base(bytes, None)
}

fn load_with_base(bytes: &[u8], base_dir: Option<&Path>) -> Result<Asset> {
    let (document, bin) = if is_glb(bytes) {
        let glb = parse_glb(bytes)?;
        (serde_json::from_slice::<Document>(&glb.json)?, glb.bin)
    } else {
        (serde_json::from_slice::<Document>(bytes)?, None)
    };

    if !document.asset.version.is_empty() && !document.asset.version.starts_with('2') {
        log::warn!("Asset declares version {}, expected 2.x", document.asset.version);
    }

    let buffers = resolve_buffers(&document, base_dir, bin)?;
    log::info!(
        "Document: {} accessors, {} buffer views, {} buffers, {} meshes, {} materials, {} animations",
        document.accessors.len(),
        document.buffer_views.len(),
        buffers.len(),
        document.meshes.len(),
        document.materials.len(),
        document.animations.len()
    );

    Ok(Asset::new(document, buffers))
}
