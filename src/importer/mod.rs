// ==========================================
// 风管配件规格归一化引擎 - 导入层
// ==========================================
// 职责: 外部数据导入,生成 RawItemRecord
// 支持: JSON, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod record_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, InputFormat, JsonParser, UniversalFileParser};
pub use record_importer::{ImportOutcome, RecordImporter};

// 重导出 Trait 接口
pub use importer_trait::{FieldMapper, FileParser, RawRow};
