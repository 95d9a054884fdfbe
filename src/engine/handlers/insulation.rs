// ==========================================
// 保温材料 (Пенофол / Бизол МБОР)
// ==========================================
// 不解析尺寸; 板厚必填(取整毫米); 数量允许小数,单位 м2
// ==========================================

use super::HandlerInput;
use crate::domain::item::{CanonicalItem, Quantity};
use crate::engine::error::{NormalizeError, NormalizeResult};
use crate::engine::quantity::measure_quantity;
use crate::domain::value::DecimalValue;
use crate::engine::tokens::parse_decimal;

const AREA_UNIT: &str = "м2";

/// 材料厚度(mm,向下取整)
fn layer_thickness(input: &HandlerInput<'_>) -> NormalizeResult<i64> {
    let raw = input
        .record
        .thickness()
        .ok_or(NormalizeError::MissingField("Толщина"))?;
    let value = parse_decimal(Some(&raw), DecimalValue::ZERO)?;
    match value.floor() {
        mm if mm > 0 => Ok(mm),
        _ => Err(NormalizeError::InvalidQuantity(raw)),
    }
}

fn area_item(input: &HandlerInput<'_>, name: String) -> NormalizeResult<CanonicalItem> {
    let area = measure_quantity(input.record.quantity().as_deref())?;
    Ok(CanonicalItem::new(name, Quantity::Measure(area), AREA_UNIT))
}

pub fn normalize_penofol(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let mm = layer_thickness(input)?;
    area_item(input, format!("Изоляция Пенофол тип С {}х600мм - 9 м2 - 15м.п", mm))
}

pub fn normalize_mbor(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let mm = layer_thickness(input)?;
    area_item(
        input,
        format!("Теплоогнезащитное покрытие Бизол МБОР-{}Ф 20000*1200*{}мм", mm, mm),
    )
}
