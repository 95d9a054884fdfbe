// ==========================================
// 风管配件规格归一化引擎 - 引擎层
// ==========================================
// 职责: 原始配件记录 → 标准目录名称 + 规整数量/单位
// 红线: 引擎不做文件/网络 I/O; 查表数据进程内只读
// ==========================================

pub mod batch;
pub mod connection;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod quantity;
pub mod size_grammar;
pub mod thickness;
pub mod tokens;

// 重导出核心引擎
pub use connection::resolve_connection;
pub use dispatcher::Normalizer;
pub use error::{NormalizeError, NormalizeResult, ParseError, ThicknessError};
pub use quantity::normalize_quantity;
pub use size_grammar::parse_size;
pub use thickness::resolve_thickness;
pub use tokens::{normalize_thickness, parse_decimal};
