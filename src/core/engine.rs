//! 引擎主入口
//!
//! 定义Engine结构和每步更新流程

use rand::Rng;

use crate::config::{EffectConfig, LoggingConfig};
use crate::math::{Matrix4x4, Vec2};
use crate::particles::{ParticleStats, ParticleSystem, SpawnRequest};
use crate::render::QuadMesh;

use super::error::EngineResult;

/// 粒子效果引擎
///
/// `Engine`持有粒子存储、四边形网格和像素投影矩阵，按帧驱动整个
/// 效果。每个模拟步单线程同步执行，顺序固定：
///
/// 1. **生成**：每个触摸位置追加一个粒子
/// 2. **衰减**：所有粒子life按固定速率递减，下限钳制为0.0
/// 3. **清除**：移除life归零的粒子，保持剩余顺序
/// 4. **网格**：从存活粒子重建四边形网格（存储为空时跳过）
///
/// 网格缓冲与投影矩阵只在一步完全结束后交给渲染适配器。
///
/// # 示例
///
/// ```
/// use particle_engine::config::EffectConfig;
/// use particle_engine::core::Engine;
/// use particle_engine::math::Vec2;
/// use particle_engine::particles::{Rgba, SpawnRequest};
///
/// let mut engine = Engine::new(EffectConfig::default()).unwrap();
/// engine.update(&[SpawnRequest::new(
///     Vec2::new(100.0, 100.0),
///     Rgba::WHITE,
///     120.0,
/// )]);
/// assert!(!engine.is_idle());
/// ```
pub struct Engine {
    config: EffectConfig,
    system: ParticleSystem,
    mesh: QuadMesh,
    projection: Matrix4x4,
}

impl Engine {
    /// 创建引擎
    ///
    /// 配置先经过校验，再据画面尺寸构建像素投影矩阵。
    pub fn new(config: EffectConfig) -> EngineResult<Self> {
        config.validate()?;
        let projection = Matrix4x4::pixel_projection(
            config.surface.width as f32,
            config.surface.height as f32,
        )?;
        let system = ParticleSystem::new(config.particle.decay_per_step());

        Ok(Self {
            config,
            system,
            mesh: QuadMesh::new(),
            projection,
        })
    }

    /// 执行一个模拟步
    ///
    /// `touches`是本步的触摸位置对应的生成请求序列。
    pub fn update(&mut self, touches: &[SpawnRequest]) {
        self.system.step(touches);

        // 粒子信息为空时不重建网格
        if !self.system.is_empty() {
            self.mesh.rebuild(self.system.particles());
        }

        let stats = self.system.stats();
        tracing::trace!(
            target: "engine",
            alive = stats.alive,
            spawned = stats.frame_spawned,
            pruned = stats.frame_pruned,
            "step complete"
        );
    }

    /// 画面尺寸变化时重建像素投影
    pub fn resize(&mut self, width: f32, height: f32) -> EngineResult<()> {
        self.projection = Matrix4x4::pixel_projection(width, height)?;
        Ok(())
    }

    /// 当前四边形网格缓冲
    pub fn mesh(&self) -> &QuadMesh {
        &self.mesh
    }

    /// 当前像素投影矩阵
    pub fn projection(&self) -> &Matrix4x4 {
        &self.projection
    }

    pub fn stats(&self) -> ParticleStats {
        self.system.stats()
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// 没有存活粒子时为真，渲染适配器应跳过绘制
    pub fn is_idle(&self) -> bool {
        self.system.is_empty()
    }

    /// 运行无头演示循环
    ///
    /// 从`PARTICLE_ENGINE_CONFIG`指定的TOML文件加载配置（未设置时
    /// 使用默认配置），以随机触摸输入驱动若干模拟步并输出统计日志。
    pub fn run_demo() -> EngineResult<()> {
        let config = match std::env::var("PARTICLE_ENGINE_CONFIG") {
            Ok(path) => EffectConfig::from_toml_file(path)?,
            Err(_) => EffectConfig::default(),
        };
        Self::initialize_logging(&config.logging);
        tracing::info!(target: "engine", "Engine starting");

        let mut engine = Engine::new(config)?;
        let width = engine.config.surface.width as f32;
        let height = engine.config.surface.height as f32;
        let (min_radius, max_radius) = (
            engine.config.particle.min_radius,
            engine.config.particle.max_radius,
        );

        let mut rng = rand::thread_rng();
        let total_steps = (engine.config.particle.steps_per_second * 10.0) as u32;

        for step in 0..total_steps {
            // 每步0~2个随机触摸
            let touch_count = rng.gen_range(0..=2);
            let touches: Vec<SpawnRequest> = (0..touch_count)
                .map(|_| {
                    SpawnRequest::random_at(
                        Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                        min_radius,
                        max_radius,
                    )
                })
                .collect();

            engine.update(&touches);

            if step % 60 == 0 {
                let stats = engine.stats();
                tracing::info!(
                    target: "engine",
                    step,
                    alive = stats.alive,
                    total_spawned = stats.total_spawned,
                    quads = engine.mesh().quad_count(),
                    "frame stats"
                );
            }
        }

        tracing::info!(target: "engine", "Engine shutting down");
        Ok(())
    }

    /// 初始化日志系统
    ///
    /// `RUST_LOG`优先，未设置时使用配置中的日志级别。
    fn initialize_logging(logging: &LoggingConfig) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::Rgba;

    fn touch_at(x: f32, y: f32) -> SpawnRequest {
        SpawnRequest::new(Vec2::new(x, y), Rgba::WHITE, 100.0)
    }

    /// 衰减量为1/4的快速配置
    fn fast_config() -> EffectConfig {
        let mut config = EffectConfig::default();
        config.particle.lifetime_seconds = 1.0;
        config.particle.steps_per_second = 4.0;
        config
    }

    #[test]
    fn test_update_regenerates_mesh() {
        let mut engine = Engine::new(EffectConfig::default()).unwrap();
        assert!(engine.is_idle());

        engine.update(&[touch_at(100.0, 100.0), touch_at(200.0, 200.0)]);
        assert_eq!(engine.mesh().quad_count(), 2);
        assert!(!engine.is_idle());

        // 下一步没有新触摸,网格仍与存活粒子数一致
        engine.update(&[]);
        assert_eq!(engine.mesh().quad_count(), 2);
    }

    #[test]
    fn test_mesh_untouched_when_store_empty() {
        let mut engine = Engine::new(fast_config()).unwrap();

        engine.update(&[touch_at(50.0, 50.0)]);
        assert_eq!(engine.mesh().quad_count(), 1);

        // 4步后粒子死亡并被清除;网格跳过重建,保留上一帧内容
        for _ in 0..4 {
            engine.update(&[]);
        }
        assert!(engine.is_idle());
        assert_eq!(engine.mesh().quad_count(), 1);
    }

    #[test]
    fn test_displayed_radius_grows_each_step() {
        let mut engine = Engine::new(fast_config()).unwrap();
        engine.update(&[touch_at(0.0, 0.0)]);

        // life=0.75 => 显示半径 100*(1-0.75)=25
        let first = engine.mesh().quads()[0][3].pos.x;
        assert!((first - 25.0).abs() < 1e-4);

        engine.update(&[]);
        // life=0.5 => 显示半径50
        let second = engine.mesh().quads()[0][3].pos.x;
        assert!((second - 50.0).abs() < 1e-4);
        assert!(second > first);
    }

    #[test]
    fn test_projection_matches_surface() {
        let engine = Engine::new(EffectConfig::default()).unwrap();
        let mat = *engine.projection();

        let top_left = crate::math::Vec4::point(0.0, 0.0, 0.0) * mat;
        assert!((top_left.x + 1.0).abs() < 1e-5);
        assert!((top_left.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_resize_rejects_zero_extent() {
        let mut engine = Engine::new(EffectConfig::default()).unwrap();
        assert!(engine.resize(1024.0, 768.0).is_ok());
        assert!(engine.resize(0.0, 768.0).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EffectConfig::default();
        config.surface.width = 0;
        assert!(Engine::new(config).is_err());
    }
}
