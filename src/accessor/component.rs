use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric kind of a single accessor component.
///
/// Mapping according to the glTF `componentType` codes:
/// 5120 = BYTE, 5121 = UNSIGNED_BYTE, 5122 = SHORT, 5123 = UNSIGNED_SHORT,
/// 5124 = INT, 5125 = UNSIGNED_INT, 5126 = FLOAT, 5130 = DOUBLE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
    Unknown(u32),
}

impl ComponentType {
    pub fn from_code(code: u32) -> Self {
        match code {
            5120 => Self::I8,
            5121 => Self::U8,
            5122 => Self::I16,
            5123 => Self::U16,
            5124 => Self::I32,
            5125 => Self::U32,
            5126 => Self::F32,
            5130 => Self::F64,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::I8 => 5120,
            Self::U8 => 5121,
            Self::I16 => 5122,
            Self::U16 => 5123,
            Self::I32 => 5124,
            Self::U32 => 5125,
            Self::F32 => 5126,
            Self::F64 => 5130,
            Self::Unknown(code) => *code,
        }
    }

    /// Byte width of one component; 0 when the kind is not recognised.
    pub fn width(&self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::F64 => 8,
            Self::Unknown(_) => 0,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8 => f.write_str("BYTE"),
            Self::U8 => f.write_str("UNSIGNED_BYTE"),
            Self::I16 => f.write_str("SHORT"),
            Self::U16 => f.write_str("UNSIGNED_SHORT"),
            Self::I32 => f.write_str("INT"),
            Self::U32 => f.write_str("UNSIGNED_INT"),
            Self::F32 => f.write_str("FLOAT"),
            Self::F64 => f.write_str("DOUBLE"),
            Self::Unknown(code) => write!(f, "UNKNOWN({code})"),
        }
    }
}

/// Element shape of an accessor (`type` in the scene description).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeTag {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
    Unknown,
}

impl ShapeTag {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "SCALAR" => Self::Scalar,
            "VEC2" => Self::Vec2,
            "VEC3" => Self::Vec3,
            "VEC4" => Self::Vec4,
            "MAT2" => Self::Mat2,
            "MAT3" => Self::Mat3,
            "MAT4" => Self::Mat4,
            _ => Self::Unknown,
        }
    }

    /// Components per element; 0 when the tag is not recognised.
    pub fn component_count(&self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 | Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
            Self::Unknown => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Vec2 => "VEC2",
            Self::Vec3 => "VEC3",
            Self::Vec4 => "VEC4",
            Self::Mat2 => "MAT2",
            Self::Mat3 => "MAT3",
            Self::Mat4 => "MAT4",
            Self::Unknown => "UNKNOWN",
        }
    }
}

pub fn component_width(component_type: ComponentType) -> usize {
    component_type.width()
}

pub fn component_count(shape: ShapeTag) -> usize {
    shape.component_count()
}
