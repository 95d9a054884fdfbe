// ==========================================
// 风管配件规格归一化引擎 - 领域模型层
// ==========================================
// 职责: 输入记录、截面形状、配件类型、值类型、输出条目
// 红线: 不含解析逻辑,不含处理器逻辑
// ==========================================

pub mod item;
pub mod record;
pub mod shape;
pub mod types;
pub mod value;

// 重导出核心类型
pub use item::{BatchReport, CanonicalItem, ErrorItem, OutputRow, Quantity};
pub use record::RawItemRecord;
pub use shape::{Rect, RectChain, RoundChain, ShapeDescriptor};
pub use types::{ConnectionClass, PartKind, SheetGauge};
pub use value::{decode_field, is_sentinel, DecimalValue};
