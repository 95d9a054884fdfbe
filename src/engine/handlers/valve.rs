// ==========================================
// 阀门 (Регулирующий клапан / Обратный клапан)
// ==========================================
// 调节阀按 "Тип" 字段选型: RSK → 圆形止回阀; КВК → 带平台与手柄的风阀

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::engine::connection::resolve_connection;
use crate::engine::error::{NormalizeError, NormalizeResult};

const MODEL_RSK: &str = "RSK";
const MODEL_KVK: &str = "КВК";

fn rsk_name(diameter: u32) -> String {
    format!("Обратный клапан круглый RSK d {} мм", diameter)
}

/// 直径: 去掉前缀与连字符后必须为正整数
fn valve_diameter(token: &str) -> NormalizeResult<u32> {
    let cleaned: String = token
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, 'd' | 'ф' | 'ø' | '-') && !c.is_whitespace())
        .collect();

    match cleaned.parse::<u32>() {
        Ok(diameter) if diameter > 0 => Ok(diameter),
        _ => Err(NormalizeError::size_parse(token, "ожидается диаметр клапана")),
    }
}

/// 调节阀
pub fn normalize_control(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let diameter = valve_diameter(&input.size_token()?)?;
    let model = input
        .record
        .transition_type()
        .unwrap_or_default()
        .to_uppercase();

    let name = if model.contains(MODEL_RSK) {
        rsk_name(diameter)
    } else if model.contains(MODEL_KVK) {
        format!("Воздушный клапан КВ с площадкой и ручкой d {} ГАЛВЕНТ", diameter)
    } else {
        return Err(NormalizeError::UnknownValveType(model));
    };

    Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()))
}

/// 止回阀
pub fn normalize_check(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;

    if let Some(diameter) = shape.single_round() {
        return Ok(CanonicalItem::pieces(rsk_name(diameter), input.pieces()?, input.unit()));
    }

    if let Some(rect) = shape.single_rect() {
        let thickness = input.thickness_for(rect.width, rect.height)?;
        let connection = resolve_connection(&[rect.width, rect.height]);
        let name = format!(
            "Обратный клапан ПР {} {}/{}/ {}",
            rect, MATERIAL, thickness, connection
        );
        return Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()));
    }

    Err(input.unsupported(&shape))
}
