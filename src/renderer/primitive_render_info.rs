use serde::{Deserialize, Serialize};

use super::BoundingBox;

/// Primitive topology
/// Mapping according to the glTF `mode` code:
/// 0 = Points, 1 = Lines, 2 = LineLoop, 3 = LineStrip,
/// 4 = Triangles (default), 5 = TriangleStrip, 6 = TriangleFan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Topology {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Topology {
    pub fn from_mode(mode: u32) -> Option<Self> {
        match mode {
            0 => Some(Self::Points),
            1 => Some(Self::Lines),
            2 => Some(Self::LineLoop),
            3 => Some(Self::LineStrip),
            4 => Some(Self::Triangles),
            5 => Some(Self::TriangleStrip),
            6 => Some(Self::TriangleFan),
            _ => None,
        }
    }
}

/// Component type of the index buffer as declared by the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexFormat {
    U8,
    U16,
    U32,
}

impl IndexFormat {
    pub fn width(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeSemantic {
    Position,
    Normal,
    TexCoord0,
}

impl AttributeSemantic {
    /// Shader input location the attribute is bound to.
    pub fn location(&self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Normal => 1,
            Self::TexCoord0 => 2,
        }
    }

    /// Float components per vertex.
    pub fn components(&self) -> u32 {
        match self {
            Self::Position | Self::Normal => 3,
            Self::TexCoord0 => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Position => "POSITION",
            Self::Normal => "NORMAL",
            Self::TexCoord0 => "TEXCOORD_0",
        }
    }
}

/// One vertex stream as the renderer binds it: a separate buffer of tightly
/// packed `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexAttribute {
    pub semantic: AttributeSemantic,
    pub location: u32,
    pub components: u32,
    /// Byte stride inside the stream.
    pub stride: u32,
}

impl VertexAttribute {
    pub fn new(semantic: AttributeSemantic) -> Self {
        let components = semantic.components();
        Self {
            semantic,
            location: semantic.location(),
            components,
            stride: components * std::mem::size_of::<f32>() as u32,
        }
    }
}

/// Decoded, upload-ready geometry of one mesh primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGeometry {
    pub mesh: usize,
    pub primitive: usize,
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub tex_coords: Option<Vec<[f32; 2]>>,
    pub indices: Vec<u32>,
    pub index_format: IndexFormat,
    pub topology: Topology,
    pub material: Option<usize>,
    pub bounds: Option<BoundingBox>,
}

impl PrimitiveGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn layout(&self) -> Vec<VertexAttribute> {
        let mut layout = vec![VertexAttribute::new(AttributeSemantic::Position)];
        if self.normals.is_some() {
            layout.push(VertexAttribute::new(AttributeSemantic::Normal));
        }
        if self.tex_coords.is_some() {
            layout.push(VertexAttribute::new(AttributeSemantic::TexCoord0));
        }
        layout
    }

    /// Raw bytes of one vertex stream, for a GPU buffer upload.
    pub fn attribute_bytes(&self, semantic: AttributeSemantic) -> Option<&[u8]> {
        match semantic {
            AttributeSemantic::Position => Some(bytemuck::cast_slice(&self.positions)),
            AttributeSemantic::Normal => self.normals.as_deref().map(bytemuck::cast_slice),
            AttributeSemantic::TexCoord0 => self.tex_coords.as_deref().map(bytemuck::cast_slice),
        }
    }

    /// Index buffer bytes (always widened to `u32`).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Opaque vertex-array handle owned by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexArrayHandle(pub u32);

/// Render-ready summary of an uploaded primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawDescriptor {
    pub vertex_array: VertexArrayHandle,
    pub layout: Vec<VertexAttribute>,
    pub index_count: u32,
    pub topology: Topology,
    pub index_format: IndexFormat,
    pub material: Option<usize>,
    pub bounds: Option<BoundingBox>,
}
