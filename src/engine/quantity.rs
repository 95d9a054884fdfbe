// ==========================================
// 风管配件规格归一化引擎 - 数量规整
// ==========================================
// 职责: 米数 → 件数换算 / 件数取整 / 面积类小数数量 / 桶数
// 红线: 数量路径不使用浮点; 输出件数为正整数
// ==========================================

use crate::engine::error::{NormalizeError, NormalizeResult};
use crate::domain::value::DecimalValue;
use crate::engine::tokens::parse_decimal;

/// 默认单位
pub const DEFAULT_UNIT: &str = "шт";

/// 需要按标准节长换算为件数的单位
const METER_UNITS: &[&str] = &["м", "пм"];

/// 单位是否为长度(米 / 延米),忽略大小写、空白与缩写点
pub fn is_meter_unit(unit: &str) -> bool {
    let compact: String = unit
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect();
    METER_UNITS.contains(&compact.as_str())
}

/// 单位透传,缺失时为 "шт"
pub fn unit_or_default(raw_unit: Option<&str>) -> String {
    match raw_unit.map(str::trim) {
        Some(unit) if !unit.is_empty() => unit.to_string(),
        _ => DEFAULT_UNIT.to_string(),
    }
}

/// 按标准节长规整数量
///
/// # 规则
/// - 数量缺失/哨兵 → 1
/// - 单位为 м / пм → ceil(米数 × 1000 / 节长),单位改为 "шт"
/// - 其他单位 → 向下取整,单位透传(缺失为 "шт")
///
/// # 示例
/// ```
/// use duct_normalizer::engine::quantity::normalize_quantity;
/// assert_eq!(normalize_quantity(Some("55"), Some("м"), 1250).unwrap(), (44, "шт".to_string()));
/// ```
pub fn normalize_quantity(
    raw_quantity: Option<&str>,
    raw_unit: Option<&str>,
    standard_run_length: u32,
) -> NormalizeResult<(u32, String)> {
    let value = positive_decimal(raw_quantity)?;

    if raw_unit.is_some_and(is_meter_unit) {
        // 米 × 1000 = mm,内部值恰为千分之一米
        let pieces = ceil_millis_by(value, standard_run_length);
        return Ok((to_count(pieces)?, DEFAULT_UNIT.to_string()));
    }

    Ok((to_count(value.floor())?, unit_or_default(raw_unit)))
}

/// 配件件数: 向下取整,最小为 1
pub fn piece_quantity(raw_quantity: Option<&str>) -> NormalizeResult<u32> {
    let value = positive_decimal(raw_quantity)?;
    to_count(value.floor())
}

/// 面积/长度类材料的小数数量,缺失为 1; 必须大于 0
pub fn measure_quantity(raw_quantity: Option<&str>) -> NormalizeResult<DecimalValue> {
    let value = positive_decimal(raw_quantity)?;
    if !value.is_positive() {
        return Err(NormalizeError::InvalidQuantity(value.to_string()));
    }
    Ok(value)
}

/// 按桶计数: ceil(公斤数 / 每桶公斤数),缺失为 1 桶
pub fn bucket_quantity(raw_kilograms: Option<&str>, bucket_kg: u32) -> NormalizeResult<u32> {
    if raw_kilograms.is_none() {
        return Ok(1);
    }
    let kilograms = positive_decimal(raw_kilograms)?;
    to_count(kilograms.ceil_div(bucket_kg))
}

// ==========================================
// 内部工具
// ==========================================

/// 解析数量(缺失为 1),负数报错
fn positive_decimal(raw_quantity: Option<&str>) -> NormalizeResult<DecimalValue> {
    let value = parse_decimal(raw_quantity, DecimalValue::ONE)?;
    if value.millis() < 0 {
        return Err(NormalizeError::InvalidQuantity(value.to_string()));
    }
    Ok(value)
}

/// ceil(millis / run_length_mm)
fn ceil_millis_by(value: DecimalValue, run_length_mm: u32) -> i64 {
    let divisor = i64::from(run_length_mm.max(1));
    let millis = value.millis();
    let quotient = millis.div_euclid(divisor);
    if millis.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// 转为正整数件数,0 提升为 1
fn to_count(value: i64) -> NormalizeResult<u32> {
    let clamped = value.max(1);
    u32::try_from(clamped).map_err(|_| NormalizeError::InvalidQuantity(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_pieces() {
        assert_eq!(normalize_quantity(Some("55"), Some("м"), 1250).unwrap(), (44, "шт".to_string()));
        assert_eq!(normalize_quantity(Some("10"), Some("м"), 3000).unwrap(), (4, "шт".to_string()));
        assert_eq!(normalize_quantity(Some("12,5"), Some("п.м."), 1250).unwrap(), (10, "шт".to_string()));
        assert_eq!(normalize_quantity(Some("0,3"), Some("м"), 3000).unwrap(), (1, "шт".to_string()));
    }

    #[test]
    fn test_non_meter_unit_floors_and_passes_through() {
        assert_eq!(normalize_quantity(Some("4.7"), Some("шт"), 1250).unwrap(), (4, "шт".to_string()));
        assert_eq!(normalize_quantity(Some("3"), Some("компл"), 1250).unwrap(), (3, "компл".to_string()));
        assert_eq!(normalize_quantity(Some("3"), None, 1250).unwrap(), (3, "шт".to_string()));
    }

    #[test]
    fn test_missing_quantity_defaults_to_one() {
        assert_eq!(normalize_quantity(None, None, 1250).unwrap(), (1, "шт".to_string()));
        assert_eq!(normalize_quantity(Some("nan"), Some("шт"), 1250).unwrap(), (1, "шт".to_string()));
    }

    #[test]
    fn test_piece_quantity_clamps_and_rejects_negative() {
        assert_eq!(piece_quantity(Some("0,4")).unwrap(), 1);
        assert_eq!(piece_quantity(Some("7")).unwrap(), 7);
        assert!(matches!(piece_quantity(Some("-2")), Err(NormalizeError::InvalidQuantity(_))));
        assert!(matches!(piece_quantity(Some("много")), Err(NormalizeError::Parse(_))));
    }

    #[test]
    fn test_bucket_quantity() {
        assert_eq!(bucket_quantity(Some("55"), 25).unwrap(), 3);
        assert_eq!(bucket_quantity(Some("50"), 25).unwrap(), 2);
        assert_eq!(bucket_quantity(None, 25).unwrap(), 1);
    }

    #[test]
    fn test_measure_quantity_keeps_fraction() {
        assert_eq!(measure_quantity(Some("12,5")).unwrap().millis(), 12_500);
        assert_eq!(measure_quantity(None).unwrap(), DecimalValue::ONE);
        assert_eq!(measure_quantity(Some("0,0004")), Err(NormalizeError::InvalidQuantity("0".to_string())));
        assert_eq!(measure_quantity(Some("0")), Err(NormalizeError::InvalidQuantity("0".to_string())));
    }
}
