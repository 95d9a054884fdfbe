// ==========================================
// 风管配件规格归一化引擎 - 核心库
// ==========================================
// 职责: 配件原始描述 → 标准目录名称 + 规整数量/单位
// 系统定位: 报价/清单生成的上游,输出必须确定且可审计
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录、形状、输出条目
pub mod domain;

// 引擎层 - 归一化规则
pub mod engine;

// 导入层 - 外部数据(JSON / CSV)
pub mod importer;

// 配置层 - 标准节长与固定尺寸
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ConnectionClass, PartKind, SheetGauge};

// 领域实体
pub use domain::{
    BatchReport, CanonicalItem, ErrorItem, OutputRow, Quantity, RawItemRecord, ShapeDescriptor,
};

// 引擎
pub use engine::{NormalizeError, NormalizeResult, Normalizer};

// 配置
pub use config::EngineConfig;

// 导入
pub use importer::{ImportError, ImportOutcome, InputFormat, RecordImporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "风管配件规格归一化引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(!APP_NAME.is_empty());
    }
}
