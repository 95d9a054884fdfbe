// ==========================================
// 风管配件规格归一化引擎 - 配件处理器
// ==========================================
// 职责: (原始记录 + 形状) → 标准目录条目
// 红线: 处理器为纯函数,只读配置,不做 I/O
// ==========================================

pub mod damper;
pub mod deflector;
pub mod diffuser;
pub mod duct;
pub mod elbow;
pub mod end_cap;
pub mod fireproofing;
pub mod insertion;
pub mod insulation;
pub mod nipple;
pub mod roof_hood;
pub mod silencer;
pub mod tape;
pub mod tee;
pub mod transition;
pub mod valve;

use crate::config::EngineConfig;
use crate::domain::record::RawItemRecord;
use crate::domain::shape::ShapeDescriptor;
use crate::domain::types::PartKind;
use crate::engine::error::{NormalizeError, NormalizeResult};
use crate::engine::quantity::{piece_quantity, unit_or_default};
use crate::engine::size_grammar::parse_size;
use crate::engine::thickness::catalog_thickness;
use tracing::debug;

/// 镀锌钢材质标记
pub const MATERIAL: &str = "Оц.С";

// ==========================================
// HandlerInput - 处理器输入
// ==========================================
pub struct HandlerInput<'a> {
    pub kind: PartKind,
    pub record: &'a RawItemRecord,
    pub config: &'a EngineConfig,
}

impl<'a> HandlerInput<'a> {
    pub fn new(kind: PartKind, record: &'a RawItemRecord, config: &'a EngineConfig) -> Self {
        Self {
            kind,
            record,
            config,
        }
    }

    /// 必填尺寸字段
    pub fn size_token(&self) -> NormalizeResult<String> {
        self.record.size().ok_or(NormalizeError::MissingField("Размер"))
    }

    /// 解析尺寸
    pub fn shape(&self) -> NormalizeResult<ShapeDescriptor> {
        parse_size(&self.size_token()?)
    }

    /// 用户板厚(经规整)优先,否则按 (width, height) 查表
    pub fn thickness_for(&self, width: u32, height: u32) -> NormalizeResult<String> {
        let thickness = catalog_thickness(self.record.thickness().as_deref(), width, height)?;
        debug!(kind = %self.kind, width, height, thickness = %thickness, "板厚确定");
        Ok(thickness)
    }

    /// 配件件数(向下取整,最小为 1)
    pub fn pieces(&self) -> NormalizeResult<u32> {
        piece_quantity(self.record.quantity().as_deref())
    }

    /// 单位透传,缺失为 "шт"
    pub fn unit(&self) -> String {
        unit_or_default(self.record.unit().as_deref())
    }

    /// 当前配件不支持该形状
    pub fn unsupported(&self, shape: &ShapeDescriptor) -> NormalizeError {
        NormalizeError::ShapeNotSupported {
            kind: self.kind.to_string(),
            shape: shape.to_string(),
        }
    }
}
