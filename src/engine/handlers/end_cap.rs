// ==========================================
// 堵头 (Заглушка)
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::engine::connection::resolve_connection;
use crate::engine::error::NormalizeResult;
use crate::engine::quantity::DEFAULT_UNIT;

/// 圆形: 单位透传; 矩形: 长边在前,单位固定为 шт
pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;

    if let Some(diameter) = shape.single_round() {
        let thickness = input.thickness_for(diameter, diameter)?;
        let name = format!("Заглушка КР d {} {}/{}/", diameter, MATERIAL, thickness);
        return Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()));
    }

    if let Some(rect) = shape.single_rect() {
        let rect = rect.sorted_desc();
        let thickness = input.thickness_for(rect.width, rect.height)?;
        let connection = resolve_connection(&[rect.width, rect.height]);
        let name = format!("Заглушка ПР {} {}/{}/ {}", rect, MATERIAL, thickness, connection);
        return Ok(CanonicalItem::pieces(name, input.pieces()?, DEFAULT_UNIT));
    }

    Err(input.unsupported(&shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RawItemRecord;
    use crate::domain::types::PartKind;
    use crate::engine::error::NormalizeError;
    use crate::engine::handlers::test_support::run;

    #[test]
    fn test_round_end_cap() {
        let item = run(PartKind::EndCap, RawItemRecord::new("Заглушка", "d315"), normalize).unwrap();
        assert_eq!(item.name, "Заглушка КР d 315 Оц.С/0,7/");
        assert_eq!(item.unit, "шт");
    }

    #[test]
    fn test_rect_end_cap_sorts_sides_and_connection() {
        let item = run(PartKind::EndCap, RawItemRecord::new("Заглушка", "200x400"), normalize).unwrap();
        assert_eq!(item.name, "Заглушка ПР 400*200 Оц.С/0,7/ [20]");

        let item = run(PartKind::EndCap, RawItemRecord::new("Заглушка", "1000x500"), normalize).unwrap();
        assert_eq!(item.name, "Заглушка ПР 1000*500 Оц.С/0,7/ [30]");
    }

    #[test]
    fn test_chain_not_supported() {
        let err = run(PartKind::EndCap, RawItemRecord::new("Заглушка", "200/100"), normalize).unwrap_err();
        assert!(matches!(err, NormalizeError::ShapeNotSupported { .. }));
    }
}
