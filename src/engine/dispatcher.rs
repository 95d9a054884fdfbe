// ==========================================
// 风管配件规格归一化引擎 - 分派器
// ==========================================
// 职责: 关键字 → 配件类型 → 处理器; 单条记录错误转为错误条目
// 红线: 关键字精确匹配(小写 + trim),不做模糊匹配
// 红线: 单条记录失败不得中断批次
// ==========================================

use crate::config::EngineConfig;
use crate::domain::item::{CanonicalItem, ErrorItem, OutputRow};
use crate::domain::record::RawItemRecord;
use crate::domain::types::PartKind;
use crate::engine::error::{NormalizeError, NormalizeResult};
use crate::engine::handlers::{
    damper, deflector, diffuser, duct, elbow, end_cap, fireproofing, insertion, insulation, nipple,
    roof_hood, silencer, tape, tee, transition, valve, HandlerInput,
};
use std::collections::HashMap;
use tracing::warn;

// ==========================================
// Normalizer - 规格归一化引擎
// ==========================================
// 注册表在构造时由 PartKind::ALL 生成,之后只读
pub struct Normalizer {
    config: EngineConfig,
    registry: HashMap<&'static str, PartKind>,
}

impl Normalizer {
    /// 创建新的 Normalizer 实例
    ///
    /// # 参数
    /// - config: 引擎配置(标准节长与固定尺寸)
    pub fn new(config: EngineConfig) -> Self {
        let registry = PartKind::ALL
            .iter()
            .flat_map(|kind| kind.keywords().iter().map(move |keyword| (*keyword, *kind)))
            .collect();

        Self { config, registry }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 按关键字查找配件类型
    pub fn resolve_kind(&self, keyword: &str) -> Option<PartKind> {
        self.registry.get(keyword.trim().to_lowercase().as_str()).copied()
    }

    /// 归一化单条记录
    ///
    /// # 返回
    /// - Ok(Vec<CanonicalItem>): 一条或多条(散流器展开为两条)
    /// - Err(NormalizeError): 未知类型或处理器错误
    pub fn normalize_record(&self, record: &RawItemRecord) -> NormalizeResult<Vec<CanonicalItem>> {
        let key = record.dispatch_key();
        let kind = self
            .registry
            .get(key.as_str())
            .copied()
            .ok_or(NormalizeError::UnknownType(key))?;

        let input = HandlerInput::new(kind, record, &self.config);
        let single = |item: CanonicalItem| vec![item];

        let items = match kind {
            PartKind::EndCap => single(end_cap::normalize(&input)?),
            PartKind::Duct => single(duct::normalize(&input)?),
            PartKind::Elbow => single(elbow::normalize(&input)?),
            PartKind::Tee => single(tee::normalize(&input)?),
            PartKind::Transition => single(transition::normalize(&input)?),
            PartKind::Insertion => single(insertion::normalize(&input)?),
            PartKind::PlateInsertion => single(insertion::normalize_plate(&input)?),
            PartKind::Damper => single(damper::normalize(&input)?),
            PartKind::ControlValve => single(valve::normalize_control(&input)?),
            PartKind::CheckValve => single(valve::normalize_check(&input)?),
            PartKind::Deflector => single(deflector::normalize(&input)?),
            PartKind::Nipple => single(nipple::normalize(&input)?),
            PartKind::Silencer => single(silencer::normalize(&input)?),
            PartKind::RoofHood => single(roof_hood::normalize(&input)?),
            PartKind::Diffuser => diffuser::normalize(&input)?,
            PartKind::Penofol => single(insulation::normalize_penofol(&input)?),
            PartKind::Mbor => single(insulation::normalize_mbor(&input)?),
            PartKind::Fireproofing => single(fireproofing::normalize(&input)?),
            PartKind::Tape => single(tape::normalize(&input)?),
        };

        Ok(items)
    }

    /// 处理单条记录,错误转为错误条目(至少产出一行)
    pub fn process_record(&self, record: &RawItemRecord) -> Vec<OutputRow> {
        self.process_indexed(1, record)
    }

    pub(crate) fn process_indexed(&self, row_number: usize, record: &RawItemRecord) -> Vec<OutputRow> {
        match self.normalize_record(record) {
            Ok(items) => items.into_iter().map(OutputRow::from).collect(),
            Err(err) => {
                let keyword = record.dispatch_key();
                match &err {
                    NormalizeError::UnknownType(_) => {
                        warn!(row_number, keyword = %keyword, "未知配件类型");
                    }
                    _ => {
                        warn!(row_number, keyword = %keyword, error = %err, "记录处理失败");
                    }
                }
                vec![OutputRow::Error(error_item(&keyword, &err))]
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// 错误条目名称
fn error_item(keyword: &str, err: &NormalizeError) -> ErrorItem {
    match err {
        NormalizeError::UnknownType(_) => ErrorItem::new(err.to_string()),
        _ => ErrorItem::new(format!("Ошибка при обработке {}: {}", keyword, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_keywords() {
        let normalizer = Normalizer::default();
        for kind in PartKind::ALL {
            for keyword in kind.keywords() {
                assert_eq!(normalizer.resolve_kind(keyword), Some(kind));
            }
        }
        assert_eq!(normalizer.resolve_kind("  ТРОЙНИК "), Some(PartKind::Tee));
        assert_eq!(normalizer.resolve_kind("тройники"), None);
    }

    #[test]
    fn test_unknown_type_becomes_error_row() {
        let normalizer = Normalizer::default();
        let rows = normalizer.process_record(&RawItemRecord::new("Виджет", "100"));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_error());
        assert_eq!(rows[0].name(), "Неизвестный тип: виджет");
    }

    #[test]
    fn test_handler_error_embeds_keyword_and_detail() {
        let normalizer = Normalizer::default();
        let rows = normalizer.process_record(&RawItemRecord::new("Отвод", "abc"));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].name().starts_with("Ошибка при обработке отвод: "));
        assert!(rows[0].name().contains("abc"));
        assert_eq!(rows[0].unit(), "-");
    }

    #[test]
    fn test_missing_size_is_error_row() {
        let normalizer = Normalizer::default();
        let record = RawItemRecord {
            type_keyword: Some("Заглушка".to_string()),
            size: Some("nan".to_string()),
            ..Default::default()
        };
        let rows = normalizer.process_record(&record);
        assert!(rows[0].is_error());
        assert!(rows[0].name().contains("Размер"));
    }
}
