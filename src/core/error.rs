//! 统一错误处理模块
//!
//! 提供引擎范围内的统一错误类型定义。
//!
//! 失败策略是快速失败：退化的数值输入（零画面尺寸、near == far）
//! 返回显式错误，而不是静默传播NaN/Inf。

use thiserror::Error;

use crate::config::ConfigError;
use crate::math::MathError;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("General error: {0}")]
    General(String),
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let math_err = MathError::DegeneratePerspective {
            near: 1.0,
            far: 1.0,
        };
        let engine_err: EngineError = math_err.into();
        assert!(matches!(engine_err, EngineError::Math(_)));

        let config_err = ConfigError::ValidationError("bad".to_string());
        let engine_err: EngineError = config_err.into();
        assert!(matches!(engine_err, EngineError::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::Math(MathError::ZeroAspect);
        assert_eq!(
            err.to_string(),
            "Math error: Perspective projection requires a non-zero aspect ratio"
        );
    }
}
