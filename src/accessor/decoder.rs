// Typed, strided reads over buffer bytes.
// Every read is bounds-checked against the owning buffer view and buffer before
// the bytes are interpreted; nothing here indexes storage unchecked.

use byteorder::{ByteOrder, LittleEndian};

use super::component::{ComponentType, ShapeTag};
use crate::error::{EntityKind, GltfError, Result, out_of_range};
use crate::model::Asset;

/// Largest element count accepted for an accessor without a buffer view.
pub const MAX_ZEROED_ELEMENTS: usize = 1 << 24;

/// Placement of an accessor inside its buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessorLayout {
    pub view_offset: usize,
    /// Length of the buffer view; `None` means "up to the end of the buffer".
    pub view_length: Option<usize>,
    pub accessor_offset: usize,
    /// Explicit byte stride from the buffer view, if any.
    pub byte_stride: Option<usize>,
    pub count: usize,
    pub component_type: ComponentType,
    pub shape: ShapeTag,
    pub normalized: bool,
}

impl AccessorLayout {
    pub fn element_size(&self) -> usize {
        self.component_type.width() * self.shape.component_count()
    }

    /// Declared stride, or the tightly packed element size when none is given.
    pub fn effective_stride(&self) -> usize {
        match self.byte_stride {
            Some(stride) if stride > 0 => stride,
            _ => self.element_size(),
        }
    }
}

/// A read-only view of one accessor's elements.
///
/// The view borrows the buffer bytes and is stateless: every element is addressed
/// by index, so the same view can be iterated any number of times.
#[derive(Debug, Clone, Copy)]
pub struct AccessorView<'a> {
    data: &'a [u8],
    /// End of the readable range (view end clamped to the buffer length).
    limit: usize,
    base: usize,
    stride: usize,
    count: usize,
    component_type: ComponentType,
    shape: ShapeTag,
    normalized: bool,
    /// Accessors without a buffer view read as zeros.
    zeroed: bool,
}

impl<'a> AccessorView<'a> {
    /// Build a view over `data`, validating that every element lies inside it.
    pub fn new(data: &'a [u8], layout: AccessorLayout) -> Result<Self> {
        let width = layout.component_type.width();
        let components = layout.shape.component_count();
        if width == 0 || components == 0 {
            return Err(GltfError::UnsupportedComponent(format!(
                "{} {}",
                layout.component_type,
                layout.shape.name()
            )));
        }

        let view_end = match layout.view_length {
            Some(len) => layout.view_offset.checked_add(len).ok_or(GltfError::OutOfBounds {
                start: layout.view_offset,
                end: usize::MAX,
                buffer_len: data.len(),
            })?,
            None => data.len(),
        };
        if view_end > data.len() {
            return Err(GltfError::OutOfBounds {
                start: layout.view_offset,
                end: view_end,
                buffer_len: data.len(),
            });
        }

        let base = layout
            .view_offset
            .checked_add(layout.accessor_offset)
            .ok_or(GltfError::OutOfBounds {
                start: layout.view_offset,
                end: usize::MAX,
                buffer_len: data.len(),
            })?;
        let stride = layout.effective_stride();

        let view = Self {
            data,
            limit: view_end,
            base,
            stride,
            count: layout.count,
            component_type: layout.component_type,
            shape: layout.shape,
            normalized: layout.normalized,
            zeroed: false,
        };

        if layout.count > 0 {
            let last = view.byte_range(layout.count - 1, components - 1)?;
            if last.1 > view.limit {
                return Err(GltfError::OutOfBounds {
                    start: base,
                    end: last.1,
                    buffer_len: view.limit,
                });
            }
        }

        Ok(view)
    }

    /// A view with no backing storage; every component reads as zero.
    /// At most [`MAX_ZEROED_ELEMENTS`] elements.
    pub fn zeroed(count: usize, component_type: ComponentType, shape: ShapeTag) -> Result<Self> {
        if count > MAX_ZEROED_ELEMENTS {
            return Err(GltfError::TooManyElements {
                count,
                limit: MAX_ZEROED_ELEMENTS,
            });
        }
        if component_type.width() == 0 || shape.component_count() == 0 {
            return Err(GltfError::UnsupportedComponent(format!(
                "{component_type} {}",
                shape.name()
            )));
        }
        Ok(Self {
            data: &[],
            limit: 0,
            base: 0,
            stride: 0,
            count,
            component_type,
            shape,
            normalized: false,
            zeroed: true,
        })
    }

    /// Resolve accessor `index` of `asset` through its buffer view and buffer.
    pub fn from_asset(asset: &'a Asset, index: usize) -> Result<Self> {
        let doc = &asset.document;
        let accessor = doc
            .accessors
            .get(index)
            .ok_or_else(|| out_of_range(EntityKind::Accessor, index, doc.accessors.len()))?;
        let component_type = ComponentType::from_code(accessor.component_type);
        let shape = ShapeTag::parse(&accessor.shape);

        let Some(view_index) = accessor.buffer_view else {
            return Self::zeroed(accessor.count, component_type, shape);
        };
        let view = doc
            .buffer_views
            .get(view_index)
            .ok_or_else(|| out_of_range(EntityKind::BufferView, view_index, doc.buffer_views.len()))?;
        let data = asset
            .buffer(view.buffer)
            .ok_or_else(|| out_of_range(EntityKind::Buffer, view.buffer, asset.buffers.len()))?;

        Self::new(
            data,
            AccessorLayout {
                view_offset: view.byte_offset,
                view_length: Some(view.byte_length),
                accessor_offset: accessor.byte_offset,
                byte_stride: view.byte_stride,
                count: accessor.count,
                component_type,
                shape,
                normalized: accessor.normalized,
            },
        )
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn shape(&self) -> ShapeTag {
        self.shape
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte range `[start, end)` of component `j` of element `i`.
    pub fn byte_range(&self, i: usize, j: usize) -> Result<(usize, usize)> {
        let width = self.component_type.width();
        let overflow = || GltfError::OutOfBounds {
            start: self.base,
            end: usize::MAX,
            buffer_len: self.data.len(),
        };
        let start = i
            .checked_mul(self.stride)
            .and_then(|o| o.checked_add(self.base))
            .and_then(|o| o.checked_add(j * width))
            .ok_or_else(overflow)?;
        let end = start.checked_add(width).ok_or_else(overflow)?;
        Ok((start, end))
    }

    fn check_component(&self, j: usize) -> Result<()> {
        let count = self.shape.component_count();
        if j >= count {
            return Err(GltfError::ComponentOutOfRange { component: j, count });
        }
        Ok(())
    }

    fn component_bytes(&self, i: usize, j: usize) -> Result<&'a [u8]> {
        if i >= self.count {
            return Err(out_of_range(EntityKind::Accessor, i, self.count));
        }
        let (start, end) = self.byte_range(i, j)?;
        if end > self.limit {
            return Err(GltfError::OutOfBounds {
                start,
                end,
                buffer_len: self.limit,
            });
        }
        Ok(&self.data[start..end])
    }

    /// Component `j` of element `i` as `f32`, applying normalization when flagged.
    pub fn component_f32(&self, i: usize, j: usize) -> Result<f32> {
        self.check_component(j)?;
        if self.zeroed {
            return if i < self.count {
                Ok(0.0)
            } else {
                Err(out_of_range(EntityKind::Accessor, i, self.count))
            };
        }
        let bytes = self.component_bytes(i, j)?;
        let n = self.normalized;
        let value = match self.component_type {
            ComponentType::I8 => {
                let v = bytes[0] as i8 as f32;
                if n { (v / 127.0).max(-1.0) } else { v }
            }
            ComponentType::U8 => {
                let v = bytes[0] as f32;
                if n { v / 255.0 } else { v }
            }
            ComponentType::I16 => {
                let v = LittleEndian::read_i16(bytes) as f32;
                if n { (v / 32767.0).max(-1.0) } else { v }
            }
            ComponentType::U16 => {
                let v = LittleEndian::read_u16(bytes) as f32;
                if n { v / 65535.0 } else { v }
            }
            ComponentType::I32 => LittleEndian::read_i32(bytes) as f32,
            ComponentType::U32 => LittleEndian::read_u32(bytes) as f32,
            ComponentType::F32 => LittleEndian::read_f32(bytes),
            ComponentType::F64 => LittleEndian::read_f64(bytes) as f32,
            ComponentType::Unknown(_) => {
                return Err(GltfError::UnsupportedComponent(self.component_type.to_string()));
            }
        };
        Ok(value)
    }

    /// Component `j` of element `i` as an unsigned integer; only for integer kinds.
    pub fn component_u32(&self, i: usize, j: usize) -> Result<u32> {
        self.check_component(j)?;
        if self.zeroed {
            return if i < self.count {
                Ok(0)
            } else {
                Err(out_of_range(EntityKind::Accessor, i, self.count))
            };
        }
        let bytes = self.component_bytes(i, j)?;
        match self.component_type {
            ComponentType::U8 => Ok(bytes[0] as u32),
            ComponentType::U16 => Ok(LittleEndian::read_u16(bytes) as u32),
            ComponentType::U32 => Ok(LittleEndian::read_u32(bytes)),
            other => Err(GltfError::UnsupportedIndexType(other.to_string())),
        }
    }

    /// Element `i` as `N` floats. Components beyond the shape are zero,
    /// components beyond `N` are ignored.
    pub fn element<const N: usize>(&self, i: usize) -> Result<[f32; N]> {
        let mut out = [0.0; N];
        let n = N.min(self.shape.component_count());
        for (j, slot) in out.iter_mut().enumerate().take(n) {
            *slot = self.component_f32(i, j)?;
        }
        Ok(out)
    }

    /// Lazy sequence over every element.
    pub fn iter<const N: usize>(&self) -> impl Iterator<Item = Result<[f32; N]>> + '_ {
        (0..self.count).map(move |i| self.element::<N>(i))
    }

    pub fn read_all<const N: usize>(&self) -> Result<Vec<[f32; N]>> {
        self.iter::<N>().collect()
    }

    /// Scalar float values, e.g. animation timestamps.
    pub fn read_scalars(&self) -> Result<Vec<f32>> {
        (0..self.count).map(|i| self.component_f32(i, 0)).collect()
    }

    /// Scalar unsigned integer values, e.g. primitive indices.
    pub fn read_indices(&self) -> Result<Vec<u32>> {
        if self.shape != ShapeTag::Scalar {
            return Err(GltfError::UnsupportedIndexType(format!(
                "{} {}",
                self.component_type,
                self.shape.name()
            )));
        }
        (0..self.count).map(|i| self.component_u32(i, 0)).collect()
    }
}
