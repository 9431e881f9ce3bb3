use bytemuck::{Pod, Zeroable};

/// Shader shape indices (`frame` field).
pub const FRAME_RECT: u32 = 0;
pub const FRAME_CIRCLE: u32 = 1;
pub const FRAME_FISH: u32 = 2;
pub const FRAME_BAIT: u32 = 3;

/// Per-instance data uploaded to GPU each frame.
/// Stride = 28 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GlyphInstance {
    /// Quad center in surface pixels.
    pub position: [f32; 2],
    /// Quad extent in pixels. A negative x mirrors the shape.
    pub size: [f32; 2],
    /// RGBA color packed as u32.
    pub color: u32,
    /// Shape index, one of the `FRAME_*` constants.
    pub frame: u32,
    /// Rotation around the center in radians.
    pub rotation: f32,
}

impl GlyphInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // size
        2 => Uint32,    // color
        3 => Uint32,    // frame
        4 => Float32,   // rotation
    ];

    /// One entry per instance; the quad corners come from the vertex index.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn stride_is_28_bytes() {
        assert_eq!(size_of::<GlyphInstance>(), 28);
        assert_eq!(GlyphInstance::layout().array_stride, 28);
    }

    #[test]
    fn attributes_follow_field_offsets() {
        let offsets: Vec<u64> = GlyphInstance::ATTRIBS.iter().map(|a| a.offset).collect();
        assert_eq!(
            offsets,
            vec![
                offset_of!(GlyphInstance, position) as u64,
                offset_of!(GlyphInstance, size) as u64,
                offset_of!(GlyphInstance, color) as u64,
                offset_of!(GlyphInstance, frame) as u64,
                offset_of!(GlyphInstance, rotation) as u64,
            ]
        );
    }
}
