use super::{AttributeSemantic, PrimitiveGeometry, VertexArrayHandle};

/// Seam to the rendering collaborator: takes decoded geometry, returns the
/// vertex-array handle it created for it.
pub trait GpuUploader {
    fn upload(&mut self, geometry: &PrimitiveGeometry) -> VertexArrayHandle;
}

/// Uploader with no GPU behind it. Hands out sequential handles and keeps
/// byte counts so a headless run can report what would have been uploaded.
#[derive(Debug, Default)]
pub struct HeadlessUploader {
    next_handle: u32,
    pub uploads: Vec<UploadRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub handle: VertexArrayHandle,
    pub vertex_bytes: usize,
    pub index_bytes: usize,
}

impl HeadlessUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_bytes(&self) -> usize {
        self.uploads
            .iter()
            .map(|u| u.vertex_bytes + u.index_bytes)
            .sum()
    }
}

impl GpuUploader for HeadlessUploader {
    fn upload(&mut self, geometry: &PrimitiveGeometry) -> VertexArrayHandle {
        let handle = VertexArrayHandle(self.next_handle);
        self.next_handle += 1;

        let vertex_bytes = [
            AttributeSemantic::Position,
            AttributeSemantic::Normal,
            AttributeSemantic::TexCoord0,
        ]
        .iter()
        .filter_map(|s| geometry.attribute_bytes(*s))
        .map(<[u8]>::len)
        .sum();

        log::debug!(
            "Uploaded mesh {} primitive {} as {:?}: {} vertices, {} indices",
            geometry.mesh,
            geometry.primitive,
            handle,
            geometry.vertex_count(),
            geometry.indices.len()
        );

        self.uploads.push(UploadRecord {
            handle,
            vertex_bytes,
            index_bytes: geometry.index_bytes().len(),
        });
        handle
    }
}
