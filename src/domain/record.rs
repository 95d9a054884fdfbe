// ==========================================
// 风管配件规格归一化引擎 - 原始记录模型
// ==========================================
// 职责: 上游抽取层(OCR/LLM/表格)产出的一行配件描述
// 红线: 原始记录不可变; 哨兵 → 缺失的映射只经过 decode_field
// ==========================================

use crate::domain::value::decode_field;
use serde::{Deserialize, Deserializer, Serialize};

// ==========================================
// RawItemRecord - 原始配件记录
// ==========================================
// 用途: 导入层写入,引擎层只读
// 所有字段均为可选文本; JSON 中的数字与 null 在反序列化时统一为文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItemRecord {
    // ===== 分类 =====
    #[serde(rename = "Наименование", default, deserialize_with = "lenient_text")]
    pub type_keyword: Option<String>, // 类型关键字(Тройник / Отвод / ...)

    // ===== 几何 =====
    #[serde(rename = "Размер", default, deserialize_with = "lenient_text")]
    pub size: Option<String>, // 自由格式尺寸("d160" / "200x100/150x100")
    #[serde(rename = "Толщина", default, deserialize_with = "lenient_text")]
    pub thickness: Option<String>, // 用户给定板厚
    #[serde(rename = "Угол", default, deserialize_with = "lenient_text")]
    pub angle: Option<String>, // 弯头角度
    #[serde(rename = "Длина", default, deserialize_with = "lenient_text")]
    pub length: Option<String>, // 消声器长度

    // ===== 数量 =====
    #[serde(rename = "Кол-во", default, deserialize_with = "lenient_text")]
    pub quantity: Option<String>, // 数量(米或件)
    #[serde(
        rename = "Ед.изм.",
        alias = "Ед. изм.",
        default,
        deserialize_with = "lenient_text"
    )]
    pub unit: Option<String>, // 单位

    // ===== 附加 =====
    #[serde(rename = "Тип", default, deserialize_with = "lenient_text")]
    pub transition_type: Option<String>, // 变径类型 / 阀门型号 / 散流器用途
}

impl RawItemRecord {
    /// 构造仅含类型与尺寸的记录
    pub fn new(type_keyword: &str, size: &str) -> Self {
        Self {
            type_keyword: Some(type_keyword.to_string()),
            size: Some(size.to_string()),
            ..Default::default()
        }
    }

    /// 分派键: 小写 + trim; 缺失时为空串
    pub fn dispatch_key(&self) -> String {
        self.type_keyword
            .as_deref()
            .map(|k| k.trim().to_lowercase())
            .unwrap_or_default()
    }

    pub fn size(&self) -> Option<String> {
        decode_field(self.size.as_deref())
    }

    pub fn thickness(&self) -> Option<String> {
        decode_field(self.thickness.as_deref())
    }

    pub fn angle(&self) -> Option<String> {
        decode_field(self.angle.as_deref())
    }

    pub fn length(&self) -> Option<String> {
        decode_field(self.length.as_deref())
    }

    pub fn quantity(&self) -> Option<String> {
        decode_field(self.quantity.as_deref())
    }

    pub fn unit(&self) -> Option<String> {
        decode_field(self.unit.as_deref())
    }

    pub fn transition_type(&self) -> Option<String> {
        decode_field(self.transition_type.as_deref())
    }
}

/// 接受字符串/数字/布尔/null,统一为文本
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
