use std::{fmt, io};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GltfError>;

#[derive(Debug, Error)]
pub enum GltfError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("glb container error: {0}")]
    Glb(#[from] gltf::Error),

    #[error("unsupported buffer uri: {0}")]
    UnsupportedUri(String),

    #[error("buffer {0} has no data")]
    MissingBuffer(usize),

    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: usize,
        len: usize,
    },

    #[error("unsupported component layout: {0}")]
    UnsupportedComponent(String),

    #[error("component {component} out of range for a {count}-component element")]
    ComponentOutOfRange { component: usize, count: usize },

    #[error("{count} elements exceed the limit of {limit}")]
    TooManyElements { count: usize, limit: usize },

    #[error("byte range {start}..{end} exceeds buffer length {buffer_len}")]
    OutOfBounds {
        start: usize,
        end: usize,
        buffer_len: usize,
    },

    #[error("animation timestamps must be float, got {0}")]
    NonFloatTimestamps(String),

    #[error("sampler has no keyframes")]
    EmptySampler,

    #[error("animation has no playable channels")]
    NoChannels,

    #[error("unsupported index component type: {0}")]
    UnsupportedIndexType(String),

    #[error("primitive is missing required attribute {0}")]
    MissingAttribute(&'static str),

    #[error("unsupported primitive mode {0}")]
    UnsupportedMode(u32),
}

/// The kind of asset entity an error or skip refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Buffer,
    BufferView,
    Accessor,
    Primitive,
    Animation,
    Sampler,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Buffer => "buffer",
            Self::BufferView => "buffer view",
            Self::Accessor => "accessor",
            Self::Primitive => "primitive",
            Self::Animation => "animation",
            Self::Sampler => "sampler",
        };
        f.write_str(name)
    }
}

/// One entity that was skipped during import, with the reason.
#[derive(Debug)]
pub struct ImportIssue {
    pub kind: EntityKind,
    /// Index path of the entity, e.g. `[mesh, primitive]` or `[animation, channel]`.
    pub path: Vec<usize>,
    pub error: GltfError,
}

impl fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}: {}", self.kind, self.path, self.error)
    }
}

/// Collected per-entity failures of a partial import.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    pub fn push(&mut self, kind: EntityKind, path: &[usize], error: GltfError) {
        log::warn!("skipping {kind} {path:?}: {error}");
        self.issues.push(ImportIssue {
            kind,
            path: path.to_vec(),
            error,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }
}

pub(crate) fn out_of_range(kind: EntityKind, index: usize, len: usize) -> GltfError {
    GltfError::IndexOutOfRange { kind, index, len }
}
