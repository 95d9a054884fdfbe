// ==========================================
// 变径 (Переход)
// ==========================================
// 圆/圆、矩/矩、矩/圆(任意书写顺序); 长度固定
// 类型缺失为 "тип-1",纯数字类型补前缀 "тип-"
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::shape::{Rect, ShapeDescriptor};
use crate::domain::types::ConnectionClass;
use crate::engine::connection::resolve_connection;
use crate::engine::error::NormalizeResult;

const DEFAULT_TYPE: &str = "тип-1";

/// 变径类型字面量
pub fn transition_type(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_TYPE.to_string(),
        Some(value) if value.chars().all(|c| c.is_ascii_digit()) => format!("тип-{}", value),
        Some(value) => value.to_string(),
    }
}

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;
    let kind = transition_type(input.record.transition_type().as_deref());
    let length = input.config.transition_length_mm;

    let name = match &shape {
        ShapeDescriptor::Round(chain) if chain.len() == 2 => {
            // 小径在前
            let large = chain.main();
            let small = chain.branch().unwrap_or(large);
            let thickness = input.thickness_for(large, large)?;
            format!(
                "Переход КР d {}/{} -{} {} {}/{}/ {}",
                small,
                large,
                length,
                kind,
                MATERIAL,
                thickness,
                ConnectionClass::Np
            )
        }
        ShapeDescriptor::Rectangular(chain) if chain.len() == 2 => {
            let first = chain.input();
            let second = chain.branch().unwrap_or(first);
            let sides = chain.all_sides();
            let max_side = sides.iter().copied().max().unwrap_or_default();
            let thickness = input.thickness_for(max_side, max_side)?;
            let connection = resolve_connection(&sides);
            format!(
                "Переход ПР {}/{} -{} {} {}/{}/ {}",
                first, second, length, kind, MATERIAL, thickness, connection
            )
        }
        ShapeDescriptor::RoundInRectangular {
            rect,
            diameter,
            output: None,
        }
        | ShapeDescriptor::RectangularInRound {
            diameter,
            rect,
            output: None,
        } => rect_to_round(input, *rect, *diameter, length, &kind)?,
        _ => return Err(input.unsupported(&shape)),
    };

    Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()))
}

fn rect_to_round(
    input: &HandlerInput<'_>,
    rect: Rect,
    diameter: u32,
    length: u32,
    kind: &str,
) -> NormalizeResult<String> {
    let thickness = input.thickness_for(rect.width, rect.height)?;
    let connection = resolve_connection(&[rect.width, rect.height]);
    Ok(format!(
        "Переход с ПР на КР {}/d {} -{} {} {}/{}/ {}",
        rect, diameter, length, kind, MATERIAL, thickness, connection
    ))
}
