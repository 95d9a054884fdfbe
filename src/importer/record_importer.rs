// ==========================================
// 风管配件规格归一化引擎 - 配件记录导入器
// ==========================================
// 职责: 整合导入流程,从文件/流到 RawItemRecord 列表
// 流程: 解析 → 映射 → 汇总
// 红线: 单行映射失败只记录,不中断整批导入
// ==========================================

use crate::domain::record::RawItemRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::{InputFormat, UniversalFileParser};
use crate::importer::importer_trait::{FieldMapper, FileParser, RawRow};
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
#[derive(Debug)]
pub struct ImportOutcome {
    pub batch_id: Uuid,
    pub records: Vec<RawItemRecord>, // 成功映射的记录(保持源顺序)
    pub rejected: Vec<ImportError>,  // 映射失败的行
}

impl ImportOutcome {
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.rejected.len()
    }
}

// ==========================================
// RecordImporter - 配件记录导入器
// ==========================================
pub struct RecordImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl RecordImporter {
    /// 创建新的 RecordImporter 实例
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - field_mapper: 字段映射器
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// 从文件导入(按扩展名选择解析器)
    #[instrument(skip(self, file_path), fields(batch_id = tracing::field::Empty))]
    pub fn import_file(&self, file_path: &Path) -> ImportResult<ImportOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4();
        tracing::Span::current().record("batch_id", tracing::field::display(&batch_id));
        info!(batch_id = %batch_id, file_path = %file_path.display(), "开始导入配件记录");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let raw_rows = self
            .file_parser
            .parse_to_raw_rows(file_path)
            .map_err(|e| {
                error!(error = %e, "文件解析失败");
                e
            })?;

        let outcome = self.map_rows(batch_id, raw_rows);
        info!(
            batch_id = %batch_id,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "导入完成"
        );
        Ok(outcome)
    }

    /// 从读取器导入(标准输入)
    #[instrument(skip(self, reader), fields(batch_id = tracing::field::Empty))]
    pub fn import_reader(&self, format: InputFormat, reader: &mut dyn Read) -> ImportResult<ImportOutcome> {
        let batch_id = Uuid::new_v4();
        tracing::Span::current().record("batch_id", tracing::field::display(&batch_id));
        info!(batch_id = %batch_id, format = ?format, "开始从输入流导入配件记录");

        debug!("步骤 1: 解析输入流");
        let raw_rows = format.parser().parse_reader(reader).map_err(|e| {
            error!(error = %e, "输入流解析失败");
            e
        })?;

        Ok(self.map_rows(batch_id, raw_rows))
    }

    // === 步骤 2: 字段映射 ===
    fn map_rows(&self, batch_id: Uuid, raw_rows: Vec<RawRow>) -> ImportOutcome {
        debug!(total_rows = raw_rows.len(), "步骤 2: 字段映射");

        let mut records = Vec::with_capacity(raw_rows.len());
        let mut rejected = Vec::new();
        for (idx, row) in raw_rows.iter().enumerate() {
            match self.field_mapper.map_to_raw_item(row, idx + 1) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(row_number = idx + 1, error = %e, "字段映射失败");
                    rejected.push(e);
                }
            }
        }

        info!(success = records.len(), failed = rejected.len(), "字段映射完成");

        ImportOutcome {
            batch_id,
            records,
            rejected,
        }
    }
}

impl Default for RecordImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), Box::new(FieldMapperImpl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_reader_keeps_order_and_rejects() {
        let json = r#"[
            {"Наименование": "Ниппель", "Размер": "125"},
            {"unknown": "x"},
            {"Наименование": "Скотч", "Кол-во": 2}
        ]"#;
        let outcome = RecordImporter::default()
            .import_reader(InputFormat::Json, &mut json.as_bytes())
            .unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.total_rows(), 3);
        assert_eq!(outcome.records[1].type_keyword.as_deref(), Some("Скотч"));
        assert_eq!(outcome.records[1].quantity.as_deref(), Some("2"));
    }

    #[test]
    fn test_import_missing_file() {
        let err = RecordImporter::default()
            .import_file(Path::new("/nonexistent/items.json"))
            .unwrap_err();
        assert!(matches!(err, ImportError::FileNotFound(_)));
    }
}
