//! 粒子系统模块
//!
//! 管理触摸点产生的圆形粒子：生成、衰减、清除。
//!
//! ## 生命周期
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Particle Lifecycle               │
//! ├──────────────────────────────────────────────┤
//! │  1. Spawn    - 每个生成请求追加一个粒子        │
//! │                (life = 1.0)                   │
//! │  2. Age      - 每步按固定速率衰减life,         │
//! │                下限钳制为0.0                  │
//! │  3. Prune    - 移除life == 0.0的粒子,         │
//! │                保持幸存者相对顺序              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 粒子只有存活(life ∈ (0,1])和死亡(life == 0)两种状态，不会复活。
//! 存储不设上限：持续生成快于衰减清除时存储会无界增长，
//! 由调用方通过[`ParticleStats::alive`]监控。

pub mod particle;
pub mod system;

pub use particle::{Particle, Rgba, SpawnRequest};
pub use system::{ParticleStats, ParticleSystem};
