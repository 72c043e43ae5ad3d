//! 粒子存储与生命周期操作
//!
//! 存储是有序、允许重复的粒子序列，顺序即插入顺序（仅影响渲染
//! 次序）。每个模拟步依次执行：生成 → 衰减 → 清除。

use super::particle::{Particle, SpawnRequest};

/// 粒子系统统计
#[derive(Default, Clone, Copy, Debug)]
pub struct ParticleStats {
    /// 当前存活粒子数
    pub alive: usize,
    /// 总生成数
    pub total_spawned: u64,
    /// 本步生成数
    pub frame_spawned: u32,
    /// 本步清除数
    pub frame_pruned: u32,
}

/// 粒子系统
///
/// 持有粒子存储和固定的每步衰减速率。存储由当前模拟步独占，
/// 所有操作同步执行，无跨步共享状态。
pub struct ParticleSystem {
    /// 粒子存储（插入有序）
    particles: Vec<Particle>,
    /// 每步life衰减量
    decay_per_step: f32,
    /// 统计信息
    stats: ParticleStats,
}

impl ParticleSystem {
    /// 创建粒子系统
    ///
    /// `decay_per_step`按`1 / (存活秒数 × 每秒步数)`选取，
    /// 例如1.5秒、60步/秒对应1/90。
    pub fn new(decay_per_step: f32) -> Self {
        Self {
            particles: Vec::new(),
            decay_per_step,
            stats: ParticleStats::default(),
        }
    }

    /// 从已有粒子序列恢复存储
    pub fn from_particles(particles: Vec<Particle>, decay_per_step: f32) -> Self {
        let stats = ParticleStats {
            alive: particles.len(),
            ..ParticleStats::default()
        };
        Self {
            particles,
            decay_per_step,
            stats,
        }
    }

    /// 追加一个粒子，life从1.0开始
    pub fn spawn(&mut self, request: &SpawnRequest) {
        self.particles.push(request.into_particle());
        self.stats.total_spawned += 1;
        self.stats.frame_spawned += 1;
        self.stats.alive = self.particles.len();
    }

    /// 衰减所有粒子的life，下限钳制为0.0
    pub fn age(&mut self) {
        for p in &mut self.particles {
            p.life = (p.life - self.decay_per_step).max(0.0);
        }
    }

    /// 移除life归零的粒子
    ///
    /// 等价于"过滤后替换存储"：`retain`原地稳定过滤，
    /// 保持幸存者相对顺序，不存在边扫边删的跳位问题。
    pub fn prune(&mut self) {
        let before = self.particles.len();
        self.particles.retain(|p| p.life > 0.0);
        self.stats.frame_pruned = (before - self.particles.len()) as u32;
        self.stats.alive = self.particles.len();
    }

    /// 执行一个模拟步：生成 → 衰减 → 清除
    ///
    /// 所有生成请求都被接受，存储不设上限。
    pub fn step(&mut self, requests: &[SpawnRequest]) {
        self.stats.frame_spawned = 0;
        self.stats.frame_pruned = 0;

        for request in requests {
            self.spawn(request);
        }
        self.age();
        self.prune();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn decay_per_step(&self) -> f32 {
        self.decay_per_step
    }

    pub fn stats(&self) -> ParticleStats {
        self.stats
    }
}
