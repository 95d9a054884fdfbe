// ==========================================
// 屋面风罩 (Зонт крышный)
// ==========================================
// 仅支持矩形

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::engine::connection::resolve_connection;
use crate::engine::error::NormalizeResult;

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;
    let rect = match shape.single_rect() {
        Some(rect) => rect,
        None => return Err(input.unsupported(&shape)),
    };

    let thickness = input.thickness_for(rect.width, rect.height)?;
    let connection = resolve_connection(&[rect.width, rect.height]);
    let name = format!("Зонт крышный ПР {} {}/{}/ {}", rect, MATERIAL, thickness, connection);
    Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()))
}
