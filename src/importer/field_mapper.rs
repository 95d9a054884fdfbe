// ==========================================
// 风管配件规格归一化引擎 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 标准字段映射(支持列名别名)
// 红线: 映射层不解释取值; 哨兵("nan"/"-"/空)由引擎层统一解码
// ==========================================

use crate::domain::record::RawItemRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FieldMapper as FieldMapperTrait, RawRow};

// 标准列名
const COL_TYPE: &str = "Наименование";
const COL_SIZE: &str = "Размер";
const COL_THICKNESS: &str = "Толщина";
const COL_ANGLE: &str = "Угол";
const COL_LENGTH: &str = "Длина";
const COL_QUANTITY: &str = "Кол-во";
const COL_UNIT: &str = "Ед.изм.";
const COL_KIND: &str = "Тип";

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_raw_item(&self, row: &RawRow, row_number: usize) -> ImportResult<RawItemRecord> {
        let record = RawItemRecord {
            // 分类
            type_keyword: self.get_string(row, COL_TYPE),

            // 几何
            size: self.get_string(row, COL_SIZE),
            thickness: self.get_string(row, COL_THICKNESS),
            angle: self.get_string(row, COL_ANGLE),
            length: self.get_string(row, COL_LENGTH),

            // 数量
            quantity: self.get_string(row, COL_QUANTITY),
            unit: self.get_string(row, COL_UNIT),

            // 附加
            transition_type: self.get_string(row, COL_KIND),
        };

        // 没有任何可识别列: 结构错误,不是一条配件
        if record == RawItemRecord::default() {
            let mut columns: Vec<&str> = row.keys().map(String::as_str).collect();
            columns.sort_unstable();
            return Err(ImportError::FieldMappingError {
                row: row_number,
                message: format!("没有可识别的列: [{}]", columns.join(", ")),
            });
        }

        Ok(record)
    }
}

impl FieldMapper {
    /// 提取字符串字段(返回 Option),支持多个可能的列名(别名)
    fn get_string(&self, row: &RawRow, key: &str) -> Option<String> {
        // 定义列名别名映射
        let aliases: &[&str] = match key {
            COL_TYPE => &["Наименование", "Тип изделия", "Название"],
            COL_SIZE => &["Размер", "Размеры"],
            COL_THICKNESS => &["Толщина", "Толщина металла"],
            COL_QUANTITY => &["Кол-во", "Количество", "Кол."],
            COL_UNIT => &["Ед.изм.", "Ед. изм.", "Ед изм", "Единица"],
            COL_LENGTH => &["Длина", "Длина, мм"],
            _ => &[],
        };

        // 先试标准列名,再试别名
        std::iter::once(key)
            .chain(aliases.iter().copied())
            .filter_map(|alias| row.get(alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}
