use std::path::PathBuf;

use crate::model::Document;

/// A loaded asset: the scene description plus the raw bytes of every buffer,
/// indexed like `document.buffers`.
///
/// Buffers are immutable once loaded; accessors borrow from them.
#[derive(Debug, Clone, Default)]
pub struct Asset {
    pub document: Document,
    pub buffers: Vec<Vec<u8>>,
    /// Where the asset was loaded from, if it came from disk.
    pub source: Option<PathBuf>,
}

impl Asset {
    pub fn new(document: Document, buffers: Vec<Vec<u8>>) -> Self {
        Self {
            document,
            buffers,
            source: None,
        }
    }

    pub fn buffer(&self, index: usize) -> Option<&[u8]> {
        self.buffers.get(index).map(Vec::as_slice)
    }
}
