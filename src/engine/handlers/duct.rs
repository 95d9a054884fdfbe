// ==========================================
// 风管 (Спиралка КР / Воздуховод ПР)
// ==========================================
// 数量按标准节长由米数换算为件数

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::types::ConnectionClass;
use crate::engine::connection::resolve_connection;
use crate::engine::error::NormalizeResult;
use crate::engine::quantity::normalize_quantity;

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;
    let quantity = input.record.quantity();
    let unit = input.record.unit();

    if let Some(diameter) = shape.single_round() {
        let run = input.config.round_duct_run_mm;
        let thickness = input.thickness_for(diameter, diameter)?;
        let (count, unit) = normalize_quantity(quantity.as_deref(), unit.as_deref(), run)?;
        let name = format!(
            "Спиралка КР d {} -{} {}/{}/ {}",
            diameter,
            run,
            MATERIAL,
            thickness,
            ConnectionClass::Np
        );
        return Ok(CanonicalItem::pieces(name, count, unit));
    }

    if let Some(rect) = shape.single_rect() {
        let rect = rect.sorted_desc();
        let run = input.config.rect_duct_run_mm;
        let thickness = input.thickness_for(rect.width, rect.height)?;
        let connection = resolve_connection(&[rect.width, rect.height]);
        let (count, unit) = normalize_quantity(quantity.as_deref(), unit.as_deref(), run)?;
        let name = format!(
            "Воздуховод ПР {} -{} {}/{}/ {}",
            rect, run, MATERIAL, thickness, connection
        );
        return Ok(CanonicalItem::pieces(name, count, unit));
    }

    Err(input.unsupported(&shape))
}
