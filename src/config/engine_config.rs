// ==========================================
// 风管配件规格归一化引擎 - 引擎配置
// ==========================================
// 职责: 标准节长与固定配件尺寸的加载、校验
// 存储: JSON 文件(可选),缺省值即目录常量
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("配置值非法: {key} = {value} (必须大于 0)")]
    InvalidValue { key: &'static str, value: u32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// EngineConfig - 引擎配置
// ==========================================
// 板厚分档、厂家阈值、连接等级阈值属于目录本身,不在此处配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // ===== 标准节长 =====
    pub round_duct_run_mm: u32, // 螺旋圆风管节长
    pub rect_duct_run_mm: u32,  // 矩形风管节长

    // ===== 三通 =====
    pub tee_branch_allowance_mm: u32, // 三通长度 = 支管尺寸 + 该余量
    pub tee_depth_mm: u32,            // 三通深度

    // ===== 固定长度 =====
    pub transition_length_mm: u32, // 变径长度
    pub insertion_length_mm: u32,  // 插接件长度
    pub nipple_length_mm: u32,     // 短接头长度
    pub silencer_default_length_mm: u32, // 消声器缺省长度

    // ===== 材料 =====
    pub fireproofing_bucket_kg: u32, // 防火涂料每桶公斤数

    // ===== 散流器 / 平台插接 =====
    pub adapter_height_mm: u32,          // 转接箱高度
    pub diffuser_neck_reduction_mm: u32, // 面板尺寸 - 该值 = 转接箱接口尺寸
    pub plate_margin_mm: u32,            // 平台每侧外扩
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_duct_run_mm: 3000,
            rect_duct_run_mm: 1250,
            tee_branch_allowance_mm: 200,
            tee_depth_mm: 100,
            transition_length_mm: 300,
            insertion_length_mm: 100,
            nipple_length_mm: 100,
            silencer_default_length_mm: 900,
            fireproofing_bucket_kg: 25,
            adapter_height_mm: 300,
            diffuser_neck_reduction_mm: 150,
            plate_margin_mm: 50,
        }
    }
}

impl EngineConfig {
    /// 从 JSON 文件加载(缺失的键取缺省值)
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        tracing::info!(path = %path.as_ref().display(), "引擎配置已加载");
        Ok(config)
    }

    /// 从 JSON 文本解析并校验
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验: 所有值必须大于 0
    pub fn validate(&self) -> ConfigResult<()> {
        let entries: [(&'static str, u32); 12] = [
            ("round_duct_run_mm", self.round_duct_run_mm),
            ("rect_duct_run_mm", self.rect_duct_run_mm),
            ("tee_branch_allowance_mm", self.tee_branch_allowance_mm),
            ("tee_depth_mm", self.tee_depth_mm),
            ("transition_length_mm", self.transition_length_mm),
            ("insertion_length_mm", self.insertion_length_mm),
            ("nipple_length_mm", self.nipple_length_mm),
            ("silencer_default_length_mm", self.silencer_default_length_mm),
            ("fireproofing_bucket_kg", self.fireproofing_bucket_kg),
            ("adapter_height_mm", self.adapter_height_mm),
            ("diffuser_neck_reduction_mm", self.diffuser_neck_reduction_mm),
            ("plate_margin_mm", self.plate_margin_mm),
        ];

        match entries.into_iter().find(|(_, value)| *value == 0) {
            Some((key, value)) => Err(ConfigError::InvalidValue { key, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_catalog_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.round_duct_run_mm, 3000);
        assert_eq!(config.rect_duct_run_mm, 1250);
        assert_eq!(config.fireproofing_bucket_kg, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{"rect_duct_run_mm": 1000}"#).unwrap();
        assert_eq!(config.rect_duct_run_mm, 1000);
        assert_eq!(config.round_duct_run_mm, 3000);
    }

    #[test]
    fn test_zero_value_rejected() {
        let err = EngineConfig::from_json_str(r#"{"tee_depth_mm": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "tee_depth_mm", value: 0 }));
    }
}
