// ==========================================
// 风管配件规格归一化引擎 - 批处理
// ==========================================
// 职责: 按顺序处理整批记录,展开多条输出,生成批次报告
// 红线: 输出顺序与输入一致; 输出行数 ≥ 输入行数
// 并行: 记录之间无依赖,rayon 并行结果与顺序结果一致
// ==========================================

use crate::domain::item::{BatchReport, OutputRow};
use crate::domain::record::RawItemRecord;
use crate::engine::dispatcher::Normalizer;
use chrono::Utc;
use rayon::prelude::*;
use tracing::{info, instrument};
use uuid::Uuid;

impl Normalizer {
    /// 顺序处理整批记录
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub fn process_batch(&self, records: &[RawItemRecord]) -> Vec<OutputRow> {
        records
            .iter()
            .enumerate()
            .flat_map(|(idx, record)| self.process_indexed(idx + 1, record))
            .collect()
    }

    /// 并行处理整批记录(rayon),输出顺序与输入一致
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub fn process_batch_parallel(&self, records: &[RawItemRecord]) -> Vec<OutputRow> {
        let per_record: Vec<Vec<OutputRow>> = records
            .par_iter()
            .enumerate()
            .map(|(idx, record)| self.process_indexed(idx + 1, record))
            .collect();

        per_record.into_iter().flatten().collect()
    }

    /// 处理整批记录并生成报告
    ///
    /// # 参数
    /// - records: 原始记录
    /// - parallel: 是否使用 rayon 并行
    #[instrument(skip(self, records), fields(batch_id = tracing::field::Empty, record_count = records.len()))]
    pub fn process_batch_with_report(&self, records: &[RawItemRecord], parallel: bool) -> BatchReport {
        let batch_id = Uuid::new_v4();
        tracing::Span::current().record("batch_id", tracing::field::display(&batch_id));
        info!(batch_id = %batch_id, input_rows = records.len(), "开始处理批次");

        let rows = if parallel {
            self.process_batch_parallel(records)
        } else {
            self.process_batch(records)
        };

        let failed_rows = rows.iter().filter(|row| row.is_error()).count();
        let report = BatchReport {
            batch_id,
            processed_at: Utc::now(),
            input_rows: records.len(),
            output_rows: rows.len(),
            failed_rows,
            rows,
        };

        info!(
            batch_id = %report.batch_id,
            input_rows = report.input_rows,
            output_rows = report.output_rows,
            failed_rows = report.failed_rows,
            "批次处理完成"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order_and_expands() {
        let normalizer = Normalizer::default();
        let records = vec![
            RawItemRecord::new("Ниппель", "125"),
            RawItemRecord::new("Диффузор", "450х450"),
            RawItemRecord::new("Виджет", "1"),
        ];
        let rows = normalizer.process_batch(&records);
        assert_eq!(rows.len(), 4);
        assert!(rows[0].name().starts_with("Ниппель"));
        assert!(rows[1].name().starts_with("Диффузор"));
        assert!(rows[2].name().starts_with("Адаптер"));
        assert!(rows[3].is_error());
    }

    #[test]
    fn test_report_counts() {
        let normalizer = Normalizer::default();
        let records = vec![RawItemRecord::new("Ниппель", "125"), RawItemRecord::new("Отвод", "x")];
        let report = normalizer.process_batch_with_report(&records, false);
        assert_eq!(report.input_rows, 2);
        assert_eq!(report.output_rows, 2);
        assert_eq!(report.failed_rows, 1);
        assert_eq!(report.success_rows(), 1);
    }
}
