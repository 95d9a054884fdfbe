// ==========================================
// 消声器 (Шумоглушитель SoundTek)
// ==========================================
// 圆形: 板厚缺省 0,5(不查表); 矩形(片式): 板厚查表
// 长度取 "Длина" 字段,缺失为配置缺省值
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::engine::connection::resolve_connection;
use crate::engine::error::{NormalizeError, NormalizeResult};
use crate::domain::value::DecimalValue;
use crate::engine::tokens::{normalize_thickness, parse_decimal};

const ROUND_DEFAULT_THICKNESS: &str = "0,5";

fn silencer_length(input: &HandlerInput<'_>) -> NormalizeResult<u32> {
    let default = DecimalValue::from_integer(i64::from(input.config.silencer_default_length_mm));
    let length = parse_decimal(input.record.length().as_deref(), default)?;
    if !length.is_positive() {
        return Err(NormalizeError::size_parse(&length.to_string(), "длина должна быть положительной"));
    }
    u32::try_from(length.floor())
        .map_err(|_| NormalizeError::size_parse(&length.to_string(), "слишком большая длина"))
}

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;
    let length = silencer_length(input)?;

    if let Some(diameter) = shape.single_round() {
        let thickness = input
            .record
            .thickness()
            .map(|t| normalize_thickness(&t))
            .unwrap_or_else(|| ROUND_DEFAULT_THICKNESS.to_string());
        let name = format!(
            "Шумоглушитель КР d {} -{} SoundTek {}/{}/",
            diameter, length, MATERIAL, thickness
        );
        return Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()));
    }

    if let Some(rect) = shape.single_rect() {
        let thickness = input.thickness_for(rect.width, rect.height)?;
        let connection = resolve_connection(&[rect.width, rect.height]);
        let name = format!(
            "Шумоглушитель пластинчатый ПР {} -{} SoundTek {}/{}/ {}",
            rect, length, MATERIAL, thickness, connection
        );
        return Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()));
    }

    Err(input.unsupported(&shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RawItemRecord;
    use crate::domain::types::PartKind;
    use crate::engine::handlers::test_support::run;

    #[test]
    fn test_round_silencer_defaults() {
        let item = run(PartKind::Silencer, RawItemRecord::new("Шумоглушитель", "d400"), normalize).unwrap();
        // 圆形消声器不查表
        assert_eq!(item.name, "Шумоглушитель КР d 400 -900 SoundTek Оц.С/0,5/");
    }

    #[test]
    fn test_round_silencer_with_length() {
        let record = RawItemRecord {
            length: Some("1200".to_string()),
            ..RawItemRecord::new("Шумоглушитель", "200")
        };
        let item = run(PartKind::Silencer, record, normalize).unwrap();
        assert_eq!(item.name, "Шумоглушитель КР d 200 -1200 SoundTek Оц.С/0,5/");
    }

    #[test]
    fn test_rect_silencer() {
        let item = run(PartKind::Silencer, RawItemRecord::new("Шумоглушитель", "500x300"), normalize).unwrap();
        assert_eq!(
            item.name,
            "Шумоглушитель пластинчатый ПР 500*300 -900 SoundTek Оц.С/0,7/ [20]"
        );
    }
}
