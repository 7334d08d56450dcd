// Binary glTF container: header plus JSON and optional BIN chunks.
// Framing is handled by the `gltf` crate; the JSON chunk is parsed by the caller.

use std::borrow::Cow;

use crate::error::Result;

pub const MAGIC: &[u8; 4] = b"glTF";

/// Payload of a binary container.
#[derive(Debug, Clone, Default)]
pub struct Glb {
    pub json: Vec<u8>,
    pub bin: Option<Vec<u8>>,
}

pub fn is_glb(bytes: &[u8]) -> bool {
    bytes.starts_with(MAGIC)
}

pub fn parse_glb(bytes: &[u8]) -> Result<Glb> {
    let glb = gltf::Glb::from_slice(bytes)?;
    log::debug!(
        "GLB v{}: {} bytes JSON, {} bytes BIN",
        glb.header.version,
        glb.json.len(),
        glb.bin.as_ref().map_or(0, |bin| bin.len())
    );
    Ok(Glb {
        json: glb.json.into_owned(),
        bin: glb.bin.map(Cow::into_owned),
    })
}

/// Pack `json` and an optional binary chunk into a container.
pub fn write_glb(json: &[u8], bin: Option<&[u8]>) -> Result<Vec<u8>> {
    let glb = gltf::Glb {
        header: gltf::binary::Header {
            magic: *MAGIC,
            version: 2,
            // Recomputed by the writer.
            length: 0,
        },
        json: Cow::Borrowed(json),
        bin: bin.map(Cow::Borrowed),
    };
    Ok(glb.to_vec()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GltfError;

    #[test]
    fn round_trips_json_and_bin_chunks() {
        let bytes = write_glb(br#"{"asset":{"version":"2.0"}}"#, Some(&[1, 2, 3])).unwrap();
        assert!(is_glb(&bytes));
        assert_eq!(bytes.len() % 4, 0);
        let glb = parse_glb(&bytes).unwrap();
        assert!(glb.json.starts_with(br#"{"asset""#));
        assert!(glb.bin.unwrap().starts_with(&[1, 2, 3]));
    }

    #[test]
    fn rejects_bad_magic_and_version() {
        assert!(parse_glb(b"nope").is_err());
        let mut bytes = write_glb(b"{}", None).unwrap();
        bytes[4] = 1;
        assert!(matches!(parse_glb(&bytes), Err(GltfError::Glb(_))));
    }

    #[test]
    fn rejects_truncated_chunk() {
        let mut bytes = write_glb(b"{}", Some(&[0; 8])).unwrap();
        bytes.truncate(bytes.len() - 4);
        let len = bytes.len() as u32;
        bytes[8..12].copy_from_slice(&len.to_le_bytes());
        assert!(parse_glb(&bytes).is_err());
    }
}
