// ==========================================
// 风管配件规格归一化引擎 - 板厚表
// ==========================================
// 职责: 最大边尺寸 → 标称板厚
// 红线: 尺寸缺失必须报错,不允许静默给默认值
// ==========================================

use crate::domain::types::SheetGauge;
use crate::engine::error::ThicknessError;
use crate::engine::tokens::normalize_thickness;

/// 按最大边查询板厚
///
/// # 规则
/// - max ≤ 250 → 0.5
/// - 300 ≤ max ≤ 1000 → 0.7
/// - 1001 ≤ max ≤ 2000 → 0.9
/// - 其他(含 251..299 的空档与 > 2000) → OutOfTable
///
/// # 错误
/// - 任一尺寸为 None → MissingDimension(契约违规,由调用方保证不发生)
pub fn resolve_thickness(width: Option<u32>, height: Option<u32>) -> Result<SheetGauge, ThicknessError> {
    let (w, h) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(ThicknessError::MissingDimension { width, height }),
    };

    let max_side = w.max(h);
    match max_side {
        0..=250 => Ok(SheetGauge::G05),
        300..=1000 => Ok(SheetGauge::G07),
        1001..=2000 => Ok(SheetGauge::G09),
        _ => Err(ThicknessError::OutOfTable { max_side }),
    }
}

/// 目录名称中的板厚: 用户给定值优先(经规整),否则查表
pub fn catalog_thickness(
    user_value: Option<&str>,
    width: u32,
    height: u32,
) -> Result<String, ThicknessError> {
    match user_value {
        Some(raw) => Ok(normalize_thickness(raw)),
        None => resolve_thickness(Some(width), Some(height)).map(|g| g.catalog_str().to_string()),
    }
}
