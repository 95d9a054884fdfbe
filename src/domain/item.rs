// ==========================================
// 风管配件规格归一化引擎 - 输出模型
// ==========================================
// 职责: 标准目录条目 / 错误条目 / 批次报告
// 红线: 条目构造后不可修改; 每条输入至少产出一条输出
// ==========================================

use crate::domain::value::DecimalValue;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

// ==========================================
// Quantity - 数量
// ==========================================
// 件数为正整数; 面积/长度类材料允许小数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Count(u32),
    Measure(DecimalValue),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{}", n),
            Quantity::Measure(d) => write!(f, "{}", d),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Count(n) => serializer.serialize_u32(*n),
            Quantity::Measure(d) if d.millis() % 1000 == 0 => serializer.serialize_i64(d.floor()),
            Quantity::Measure(d) => serializer.serialize_f64(d.to_f64()),
        }
    }
}

// ==========================================
// CanonicalItem - 标准目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalItem {
    #[serde(rename = "Наименование")]
    pub name: String, // 目录名称
    #[serde(rename = "Кол-во")]
    pub quantity: Quantity, // 数量
    #[serde(rename = "Ед.изм.")]
    pub unit: String, // 单位
}

impl CanonicalItem {
    pub fn new(name: impl Into<String>, quantity: Quantity, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    /// 按件计数的条目
    pub fn pieces(name: impl Into<String>, count: u32, unit: impl Into<String>) -> Self {
        Self::new(name, Quantity::Count(count), unit)
    }
}

// ==========================================
// ErrorItem - 错误条目
// ==========================================
// 数量固定为 1,单位固定为 "-",诊断信息写在名称中
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorItem {
    #[serde(rename = "Наименование")]
    pub name: String,
    #[serde(rename = "Кол-во")]
    pub quantity: u32,
    #[serde(rename = "Ед.изм.")]
    pub unit: &'static str,
}

impl ErrorItem {
    pub const UNIT: &'static str = "-";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            unit: Self::UNIT,
        }
    }
}

// ==========================================
// OutputRow - 输出行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OutputRow {
    Item(CanonicalItem),
    Error(ErrorItem),
}

impl OutputRow {
    pub fn name(&self) -> &str {
        match self {
            OutputRow::Item(item) => &item.name,
            OutputRow::Error(err) => &err.name,
        }
    }

    pub fn unit(&self) -> &str {
        match self {
            OutputRow::Item(item) => &item.unit,
            OutputRow::Error(err) => err.unit,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, OutputRow::Error(_))
    }

    pub fn as_item(&self) -> Option<&CanonicalItem> {
        match self {
            OutputRow::Item(item) => Some(item),
            OutputRow::Error(_) => None,
        }
    }
}

impl From<CanonicalItem> for OutputRow {
    fn from(item: CanonicalItem) -> Self {
        OutputRow::Item(item)
    }
}

impl From<ErrorItem> for OutputRow {
    fn from(err: ErrorItem) -> Self {
        OutputRow::Error(err)
    }
}

// ==========================================
// BatchReport - 批次处理报告
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub batch_id: Uuid,                // 批次ID
    pub processed_at: DateTime<Utc>,   // 处理时间
    pub input_rows: usize,             // 输入行数
    pub output_rows: usize,            // 输出行数(扩展型配件会多于输入)
    pub failed_rows: usize,            // 失败行数
    pub rows: Vec<OutputRow>,          // 按输入顺序展开的输出
}

impl BatchReport {
    pub fn success_rows(&self) -> usize {
        self.output_rows - self.failed_rows
    }
}
