// ==========================================
// 风管配件规格归一化引擎 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: JSON (上游 OCR/LLM 输出的对象数组) / CSV (表格导出)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FileParser, RawRow};
use csv::ReaderBuilder;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

// ==========================================
// JSON Parser 实现
// ==========================================
// 接受顶层数组,或仅包含一个数组字段的对象({"items": [...]})
pub struct JsonParser;

impl FileParser for JsonParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn parse_reader(&self, reader: &mut dyn Read) -> ImportResult<Vec<RawRow>> {
        let root: Value = serde_json::from_reader(reader)?;

        let items = match root {
            Value::Array(items) => items,
            Value::Object(map) => map
                .into_iter()
                .find_map(|(_, v)| match v {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .ok_or_else(|| ImportError::InvalidStructure("JSON 对象中没有记录数组".to_string()))?,
            _ => {
                return Err(ImportError::InvalidStructure(
                    "顶层必须是数组或包含数组的对象".to_string(),
                ))
            }
        };

        let mut rows = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            let object = match item {
                Value::Object(object) => object,
                other => {
                    return Err(ImportError::InvalidStructure(format!(
                        "第 {} 个元素不是对象: {}",
                        idx + 1,
                        other
                    )))
                }
            };

            let row: RawRow = object
                .into_iter()
                .filter_map(|(key, value)| value_to_text(value).map(|text| (key.trim().to_string(), text)))
                .collect();

            // 跳过完全空白的行
            if row.values().all(|v| v.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

/// JSON 值 → 文本(null 视为缺失)
fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
// 分隔符按表头自动识别(';' / ',' / '\t'),兼容带 BOM 的表格导出
pub struct CsvParser;

impl FileParser for CsvParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["csv"]
    }

    fn parse_reader(&self, reader: &mut dyn Read) -> ImportResult<Vec<RawRow>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let content = content.trim_start_matches('\u{feff}');

        let delimiter = detect_delimiter(content.lines().next().unwrap_or(""));
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .flexible(true) // 允许行长度不一致
            .from_reader(content.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = RawRow::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

fn detect_delimiter(header_line: &str) -> u8 {
    let candidates = [b';', b',', b'\t'];
    candidates
        .into_iter()
        .max_by_key(|d| header_line.matches(char::from(*d)).count())
        .filter(|d| header_line.contains(char::from(*d)))
        .unwrap_or(b',')
}

// ==========================================
// 输入格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// 根据扩展名识别格式
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    pub fn parser(&self) -> Box<dyn FileParser> {
        match self {
            InputFormat::Json => Box::new(JsonParser),
            InputFormat::Csv => Box::new(CsvParser),
        }
    }
}

// ==========================================
// 通用文件解析器(根据扩展名自动选择)
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["json", "csv"]
    }

    /// 无扩展名可参考时按 JSON 解析
    fn parse_reader(&self, reader: &mut dyn Read) -> ImportResult<Vec<RawRow>> {
        JsonParser.parse_reader(reader)
    }

    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        InputFormat::from_path(file_path)?
            .parser()
            .parse_to_raw_rows(file_path)
    }
}
