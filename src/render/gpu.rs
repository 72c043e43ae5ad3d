//! GPU缓冲上传
//!
//! 只负责把网格和投影矩阵搬进wgpu缓冲。管线、着色器和绘制提交
//! 由外部渲染适配器承担。

use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::math::Matrix4x4;

use super::quad::QuadMesh;
use super::vertex::VertexInfo;

/// 投影矩阵Uniform
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionUniform {
    pub matrix: [[f32; 4]; 4],
}

impl ProjectionUniform {
    pub fn new(projection: &Matrix4x4) -> Self {
        Self {
            matrix: projection.to_rows_array_2d(),
        }
    }
}

/// 四边形网格的GPU缓冲对
///
/// 顶点/索引缓冲按需增长，重建只在容量不足时发生。
pub struct GpuQuadBuffer {
    vertex_buffer: Option<Buffer>,
    index_buffer: Option<Buffer>,
    uniform_buffer: Option<Buffer>,
    capacity_quads: usize,
    index_count: u32,
}

impl GpuQuadBuffer {
    pub fn new() -> Self {
        Self {
            vertex_buffer: None,
            index_buffer: None,
            uniform_buffer: None,
            capacity_quads: 0,
            index_count: 0,
        }
    }

    /// 上传网格数据
    ///
    /// 空网格直接返回，保留上一帧内容。
    pub fn upload_mesh(&mut self, device: &Device, queue: &Queue, mesh: &QuadMesh) {
        if mesh.is_empty() {
            return;
        }

        // 容量不足时重建缓冲
        if self.vertex_buffer.is_none() || self.capacity_quads < mesh.quad_count() {
            let capacity = mesh.quad_count().next_power_of_two();
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Quad Vertex Buffer"),
                size: (capacity * 4 * std::mem::size_of::<VertexInfo>()) as u64,
                usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.index_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Quad Index Buffer"),
                size: (capacity * 6 * std::mem::size_of::<u32>()) as u64,
                usage: BufferUsages::INDEX | BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity_quads = capacity;
        }

        // 写入数据
        if let Some(buffer) = &self.vertex_buffer {
            queue.write_buffer(buffer, 0, mesh.as_bytes());
        }
        if let Some(buffer) = &self.index_buffer {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(&mesh.indices()));
        }
        self.index_count = mesh.index_count() as u32;
    }

    /// 上传投影矩阵
    pub fn upload_projection(&mut self, device: &Device, queue: &Queue, projection: &Matrix4x4) {
        if self.uniform_buffer.is_none() {
            self.uniform_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Projection Uniform Buffer"),
                size: std::mem::size_of::<ProjectionUniform>() as u64,
                usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }

        if let Some(buffer) = &self.uniform_buffer {
            queue.write_buffer(
                buffer,
                0,
                bytemuck::bytes_of(&ProjectionUniform::new(projection)),
            );
        }
    }

    pub fn vertex_buffer(&self) -> Option<&Buffer> {
        self.vertex_buffer.as_ref()
    }

    pub fn index_buffer(&self) -> Option<&Buffer> {
        self.index_buffer.as_ref()
    }

    pub fn uniform_buffer(&self) -> Option<&Buffer> {
        self.uniform_buffer.as_ref()
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

impl Default for GpuQuadBuffer {
    fn default() -> Self {
        Self::new()
    }
}
