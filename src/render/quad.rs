//! 圆用四顶点网格
//!
//! 每个存活粒子对应一个轴对齐四边形（4顶点、两个三角形）。
//! 网格没有自己的生命周期，每步从粒子存储整体重建。

use crate::math::{Vec2, Vec4};
use crate::particles::Particle;

use super::vertex::VertexInfo;

/// 一个四边形：4个顶点，渲染为两个三角形
pub type Quad = [VertexInfo; 4];

/// 单个四边形内的三角形索引模式
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];

/// 四边形网格缓冲
#[derive(Default, Clone, Debug)]
pub struct QuadMesh {
    quads: Vec<Quad>,
}

impl QuadMesh {
    pub fn new() -> Self {
        Self { quads: Vec::new() }
    }

    /// 调整四边形数量
    pub fn resize(&mut self, count: usize) {
        self.quads.resize(count, [VertexInfo::default(); 4]);
    }

    /// 从粒子信息重建网格
    ///
    /// 网格数量与粒子数一致。半径随life减小而增大
    /// （`radius × (1 - life)`，刚生成时为0），alpha随life变薄。
    pub fn rebuild(&mut self, particles: &[Particle]) {
        self.resize(particles.len());
        for (quad, p) in self.quads.iter_mut().zip(particles) {
            let x = p.pos.x;
            let y = p.pos.y;
            let r = p.radius * (1.0 - p.life);
            let mut rgba = p.rgba;
            rgba.a *= p.life;

            quad[0] = VertexInfo {
                pos: Vec4::point(x - r, y - r, 0.0),
                uv: Vec2::new(-1.0, -1.0),
                rgba,
            };
            quad[1] = VertexInfo {
                pos: Vec4::point(x + r, y - r, 0.0),
                uv: Vec2::new(1.0, -1.0),
                rgba,
            };
            quad[2] = VertexInfo {
                pos: Vec4::point(x - r, y + r, 0.0),
                uv: Vec2::new(-1.0, 1.0),
                rgba,
            };
            quad[3] = VertexInfo {
                pos: Vec4::point(x + r, y + r, 0.0),
                uv: Vec2::new(1.0, 1.0),
                rgba,
            };
        }
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// 扁平顶点视图
    pub fn vertices(&self) -> &[VertexInfo] {
        bytemuck::cast_slice(&self.quads)
    }

    pub fn vertex_count(&self) -> usize {
        self.quads.len() * 4
    }

    /// GPU上传用的字节视图
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }

    /// 两三角形索引列表
    pub fn indices(&self) -> Vec<u32> {
        (0..self.quads.len() as u32)
            .flat_map(|i| QUAD_INDICES.map(|j| i * 4 + j))
            .collect()
    }

    pub fn index_count(&self) -> usize {
        self.quads.len() * 6
    }
}
