// ==========================================
// 风管配件规格归一化引擎 - 导入 Trait
// ==========================================
// 职责: 定义导入接口(不包含实现)
// 流程: 文件/流 → 原始行(HashMap<列名, 值>) → RawItemRecord
// ==========================================

use crate::domain::record::RawItemRecord;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 原始行记录
pub type RawRow = HashMap<String, String>;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口(阶段 0)
// 实现者: JsonParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 支持的扩展名(小写,不含点)
    fn extensions(&self) -> &'static [&'static str];

    /// 从任意读取器解析原始行(标准输入也走这里)
    fn parse_reader(&self, reader: &mut dyn Read) -> ImportResult<Vec<RawRow>>;

    /// 解析文件为原始行记录
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表(已跳过完全空白的行)
    /// - Err: 文件不存在、扩展名不支持、格式错误
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !self.extensions().contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut reader = BufReader::new(File::open(file_path)?);
        self.parse_reader(&mut reader)
    }
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口(阶段 1)
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 RawItemRecord
    ///
    /// # 参数
    /// - row: 原始行记录
    /// - row_number: 行号(用于日志与错误信息)
    fn map_to_raw_item(&self, row: &RawRow, row_number: usize) -> ImportResult<RawItemRecord>;
}
