use crate::math::{Vec2, Vec4};
use crate::particles::Rgba;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexInfo {
    pub pos: Vec4,
    pub uv: Vec2,
    pub rgba: Rgba,
}

impl VertexInfo {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexInfo>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 24,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<VertexInfo>(), 40);

        let desc = VertexInfo::desc();
        assert_eq!(desc.array_stride, 40);
        assert_eq!(desc.attributes.len(), 3);
        assert_eq!(desc.attributes[1].offset, 16);
        assert_eq!(desc.attributes[2].offset, 24);
    }

    #[test]
    fn test_default_vertex_is_homogeneous_point() {
        let v = VertexInfo::default();
        assert_eq!(v.pos.w, 1.0);
        assert_eq!(v.uv, Vec2::ZERO);
    }
}
