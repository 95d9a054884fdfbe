// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供原始记录构建器与常用断言
// ==========================================

#![allow(dead_code)]

use duct_normalizer::{CanonicalItem, OutputRow, RawItemRecord};

// ==========================================
// RawItemRecord 构建器
// ==========================================

pub struct RecordBuilder {
    record: RawItemRecord,
}

impl RecordBuilder {
    pub fn new(type_keyword: &str, size: &str) -> Self {
        Self {
            record: RawItemRecord::new(type_keyword, size),
        }
    }

    pub fn thickness(mut self, thickness: &str) -> Self {
        self.record.thickness = Some(thickness.to_string());
        self
    }

    pub fn angle(mut self, angle: &str) -> Self {
        self.record.angle = Some(angle.to_string());
        self
    }

    pub fn length(mut self, length: &str) -> Self {
        self.record.length = Some(length.to_string());
        self
    }

    pub fn quantity(mut self, quantity: &str) -> Self {
        self.record.quantity = Some(quantity.to_string());
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.record.unit = Some(unit.to_string());
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.record.transition_type = Some(kind.to_string());
        self
    }

    pub fn build(self) -> RawItemRecord {
        self.record
    }
}

/// 取出成功条目,错误行直接失败
pub fn expect_item(row: &OutputRow) -> &CanonicalItem {
    match row.as_item() {
        Some(item) => item,
        None => panic!("期望成功条目,实际为错误行: {}", row.name()),
    }
}
