// ==========================================
// 插接件 (Врезка / Врезка в площадку)
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::shape::{Rect, ShapeDescriptor};
use crate::engine::connection::resolve_connection;
use crate::engine::error::{NormalizeError, NormalizeResult};

/// 翻边插接、圆插圆管、矩插圆管
pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;
    let length = input.config.insertion_length_mm;

    let name = match &shape {
        ShapeDescriptor::Round(chain) if chain.len() == 1 => {
            let diameter = chain.main();
            let thickness = input.thickness_for(diameter, diameter)?;
            format!("Врезка с отборт КР d {} -{} {}/{}/", diameter, length, MATERIAL, thickness)
        }
        ShapeDescriptor::Round(chain) if chain.len() == 2 => {
            let main = chain.main();
            let branch = chain.branch().unwrap_or(main);
            let thickness = input.thickness_for(branch, branch)?;
            format!(
                "Врезка КР в КР трубу d {}/{} -{} {}/{}/",
                branch, main, length, MATERIAL, thickness
            )
        }
        ShapeDescriptor::Rectangular(chain) if chain.len() == 1 => {
            let rect = chain.input();
            let thickness = input.thickness_for(rect.width, rect.height)?;
            let connection = resolve_connection(&[rect.width, rect.height]);
            format!(
                "Врезка с отборт ПР {} -{} {}/{}/ {}",
                rect, length, MATERIAL, thickness, connection
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
        } => {
            let thickness = input.thickness_for(rect.width, rect.height)?;
            let connection = resolve_connection(&[rect.width, rect.height]);
            format!(
                "Врезка ПР в КР трубу {}/d {} -{} {}/{}/ {}",
                rect, diameter, length, MATERIAL, thickness, connection
            )
        }
        _ => return Err(input.unsupported(&shape)),
    };

    Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()))
}

/// 平台插接: 平台尺寸 = 接口尺寸 + 两侧外扩
pub fn normalize_plate(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;
    let rect = match shape.single_rect() {
        Some(rect) => rect,
        None => return Err(input.unsupported(&shape)),
    };

    let plate = input
        .config
        .plate_margin_mm
        .checked_mul(2)
        .and_then(|margin| Some(Rect::new(rect.width.checked_add(margin)?, rect.height.checked_add(margin)?)))
        .ok_or_else(|| NormalizeError::size_parse(&rect.to_string(), "размер площадки вне диапазона"))?;
    let thickness = input.thickness_for(rect.width, rect.height)?;
    let name = format!(
        "Врезка ПР {} в площадку {} -{} {}/{}/",
        rect,
        plate,
        input.config.insertion_length_mm,
        MATERIAL,
        thickness
    );
    Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()))
}
