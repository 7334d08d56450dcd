use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{GltfError, Result};
use crate::model::document::Document;

/// Load the bytes of every buffer declared by `doc`.
///
/// `base_dir` resolves relative file URIs; `glb_bin` is the binary chunk of a
/// GLB container, used by the buffer that has no URI. Any failure here is fatal
/// for the asset.
pub fn resolve_buffers(doc: &Document, base_dir: Option<&Path>, mut glb_bin: Option<Vec<u8>>) -> Result<Vec<Vec<u8>>> {
    let mut buffers = Vec::with_capacity(doc.buffers.len());

    for (index, buffer) in doc.buffers.iter().enumerate() {
        let data = match buffer.uri.as_deref() {
            None => glb_bin.take().ok_or(GltfError::MissingBuffer(index))?,
            Some(uri) if uri.starts_with("data:") => decode_data_uri(uri)?,
            Some(uri) => {
                let dir = base_dir.ok_or_else(|| GltfError::UnsupportedUri(uri.to_string()))?;
                fs::read(dir.join(uri))?
            }
        };

        if data.len() < buffer.byte_length {
            log::warn!(
                "Buffer {index} holds {} bytes, declared {}",
                data.len(),
                buffer.byte_length
            );
        }
        log::debug!("Buffer {index}: {} bytes", data.len());
        buffers.push(data);
    }

    Ok(buffers)
}

/// Decode a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| GltfError::UnsupportedUri(truncate(uri)))?;
    if !header.ends_with(";base64") {
        return Err(GltfError::UnsupportedUri(truncate(uri)));
    }
    Ok(STANDARD.decode(payload)?)
}

fn truncate(uri: &str) -> String {
    uri.chars().take(48).collect()
}
