//! 统一配置系统
//!
//! 提供TOML/JSON配置文件加载与校验。退化的数值（零画面尺寸、
//! 非正的存活时长）在加载时即被拒绝，不会流入数学层。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 画面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// 像素宽度
    pub width: u32,
    /// 像素高度
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// 粒子配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// 粒子存活时长（秒）
    pub lifetime_seconds: f32,
    /// 假定模拟步率（步/秒）
    pub steps_per_second: f32,
    /// 随机半径下限（像素）
    pub min_radius: f32,
    /// 随机半径上限（像素）
    pub max_radius: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            lifetime_seconds: 1.5,
            steps_per_second: 60.0,
            min_radius: 60.0,
            max_radius: 180.0,
        }
    }
}

impl ParticleConfig {
    /// 每步life衰减量
    ///
    /// 1.5秒 × 60步/秒 => 1/90。
    pub fn decay_per_step(&self) -> f32 {
        1.0 / (self.lifetime_seconds * self.steps_per_second)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（RUST_LOG未设置时生效）
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// 效果主配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EffectConfig {
    /// 画面配置
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// 粒子配置
    #[serde(default)]
    pub particle: ParticleConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EffectConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串加载配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 从JSON字符串加载配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ConfigError::ValidationError(format!(
                "surface extent must be non-zero: {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        if self.particle.lifetime_seconds <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "particle.lifetime_seconds must be positive: {}",
                self.particle.lifetime_seconds
            )));
        }
        if self.particle.steps_per_second <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "particle.steps_per_second must be positive: {}",
                self.particle.steps_per_second
            )));
        }
        if self.particle.min_radius <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "particle.min_radius must be positive: {}",
                self.particle.min_radius
            )));
        }
        if self.particle.max_radius < self.particle.min_radius {
            return Err(ConfigError::ValidationError(format!(
                "particle.max_radius ({}) must not be below min_radius ({})",
                self.particle.max_radius, self.particle.min_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EffectConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.surface.height, 600);
        assert_eq!(config.particle.lifetime_seconds, 1.5);
    }

    #[test]
    fn test_decay_per_step_default() {
        let config = ParticleConfig::default();
        // 1.5秒、60步/秒 => 1/90
        assert!((config.decay_per_step() - 1.0 / 90.0).abs() < 1e-7);
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [surface]
            width = 1024
            height = 768

            [particle]
            lifetime_seconds = 2.0
            steps_per_second = 30.0
            min_radius = 10.0
            max_radius = 40.0
        "#;
        let config = EffectConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.surface.width, 1024);
        assert!((config.particle.decay_per_step() - 1.0 / 60.0).abs() < 1e-7);
        // 省略的段落使用默认值
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EffectConfig::from_toml_str("").unwrap();
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.particle.max_radius, 180.0);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{"surface": {"width": 640, "height": 480}}"#;
        let config = EffectConfig::from_json_str(json).unwrap();
        assert_eq!(config.surface.width, 640);
        assert_eq!(config.particle.lifetime_seconds, 1.5);
    }

    #[test]
    fn test_parse_error() {
        let result = EffectConfig::from_toml_str("surface = 'not a table'");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_extent_rejected() {
        let toml = r#"
            [surface]
            width = 0
            height = 600
        "#;
        let result = EffectConfig::from_toml_str(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_degenerate_particle_config_rejected() {
        let mut config = EffectConfig::default();
        config.particle.lifetime_seconds = 0.0;
        assert!(config.validate().is_err());

        let mut config = EffectConfig::default();
        config.particle.max_radius = 10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EffectConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let restored = EffectConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(restored.surface.width, config.surface.width);
        assert_eq!(
            restored.particle.lifetime_seconds,
            config.particle.lifetime_seconds
        );
    }
}
