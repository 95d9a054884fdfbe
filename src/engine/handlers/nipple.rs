// ==========================================
// 短接头 (Ниппель)
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::types::ConnectionClass;
use crate::engine::error::NormalizeResult;

fn nipple_name(input: &HandlerInput<'_>, diameter: u32) -> NormalizeResult<String> {
    let thickness = input.thickness_for(diameter, diameter)?;
    Ok(format!(
        "Ниппель d {} -{} {}/{}/ {}",
        diameter,
        input.config.nipple_length_mm,
        MATERIAL,
        thickness,
        ConnectionClass::Np
    ))
}

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;
    match shape.single_round() {
        Some(diameter) => Ok(CanonicalItem::pieces(
            nipple_name(input, diameter)?,
            input.pieces()?,
            input.unit(),
        )),
        None => Err(input.unsupported(&shape)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RawItemRecord;
    use crate::domain::types::PartKind;
    use crate::engine::error::NormalizeError;
    use crate::engine::handlers::test_support::run;

    #[test]
    fn test_nipple() {
        let record = RawItemRecord {
            thickness: Some("0.55".to_string()),
            quantity: Some("3".to_string()),
            ..RawItemRecord::new("Ниппель", "d100")
        };
        let item = run(PartKind::Nipple, record, normalize).unwrap();
        assert_eq!(item.name, "Ниппель d 100 -100 Оц.С/0,5/ [нп]");
        assert_eq!(item.quantity, crate::domain::item::Quantity::Count(3));
    }

    #[test]
    fn test_rect_nipple_not_supported() {
        let err = run(PartKind::Nipple, RawItemRecord::new("Ниппель", "100x100"), normalize).unwrap_err();
        assert!(matches!(err, NormalizeError::ShapeNotSupported { .. }));
    }
}
