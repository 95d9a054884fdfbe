// ==========================================
// 风管配件规格归一化引擎 - 配置层
// ==========================================
// 职责: 引擎配置(标准节长、固定尺寸)加载与校验
// 存储: JSON 文件,缺省值即目录常量
// ==========================================

pub mod engine_config;

pub use engine_config::{ConfigError, ConfigResult, EngineConfig};
