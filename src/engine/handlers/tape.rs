// ==========================================
// 铝箔胶带 (Скотч) - 固定 SKU
// ==========================================

use super::HandlerInput;
use crate::domain::item::CanonicalItem;
use crate::engine::error::NormalizeResult;
use crate::engine::quantity::DEFAULT_UNIT;

const TAPE_SKU: &str = "Скотч алюминиевый ВИНТЭЛ 100х40м (упак 12 шт)";

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    Ok(CanonicalItem::pieces(TAPE_SKU, input.pieces()?, DEFAULT_UNIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Quantity;
    use crate::domain::record::RawItemRecord;
    use crate::domain::types::PartKind;
    use crate::engine::handlers::test_support::run;

    #[test]
    fn test_tape_ignores_size() {
        let record = RawItemRecord {
            quantity: Some("2,7".to_string()),
            ..RawItemRecord::new("Скотч", "что угодно")
        };
        let item = run(PartKind::Tape, record, normalize).unwrap();
        assert_eq!(item.name, TAPE_SKU);
        assert_eq!(item.quantity, Quantity::Count(2));
    }
}
