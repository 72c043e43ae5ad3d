//! 粒子数据类型

use rand::Rng;

use crate::math::Vec2;

/// RGBA颜色，分量约定在[0,1]内（不做校验）
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// 单个粒子
///
/// `life`是[0,1]内的生存系数：1.0表示刚生成，0.0表示死亡。
/// 生成后单调不增，由生命周期引擎钳制下限。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    /// xy坐标（像素空间）
    pub pos: Vec2,
    /// 配置半径
    pub radius: f32,
    /// 粒子色
    pub rgba: Rgba,
    /// 生存系数(1.0~0.0)
    pub life: f32,
}

impl Particle {
    pub fn is_dead(&self) -> bool {
        self.life == 0.0
    }
}

/// 生成请求，每个触摸点一个
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    pub pos: Vec2,
    pub rgba: Rgba,
    pub radius: f32,
}

impl SpawnRequest {
    pub const fn new(pos: Vec2, rgba: Rgba, radius: f32) -> Self {
        Self { pos, rgba, radius }
    }

    /// 随机颜色（含alpha）与随机半径的生成请求
    pub fn random_at(pos: Vec2, min_radius: f32, max_radius: f32) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            pos,
            rgba: Rgba::new(rng.gen(), rng.gen(), rng.gen(), rng.gen()),
            radius: rng.gen_range(min_radius..=max_radius),
        }
    }

    /// 展开为新粒子，life从1.0开始
    pub fn into_particle(self) -> Particle {
        Particle {
            pos: self.pos,
            radius: self.radius,
            rgba: self.rgba,
            life: 1.0,
        }
    }
}
