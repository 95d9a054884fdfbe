// ==========================================
// 防火涂料 (ОЗКС)
// ==========================================
// 数量为公斤数,按桶向上取整

use super::HandlerInput;
use crate::domain::item::CanonicalItem;
use crate::engine::error::NormalizeResult;
use crate::engine::quantity::{bucket_quantity, DEFAULT_UNIT};

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let bucket_kg = input.config.fireproofing_bucket_kg;
    let buckets = bucket_quantity(input.record.quantity().as_deref(), bucket_kg)?;
    let name = format!("Огнезащитный состав \"ОЗКС\" ({}кг) серый", bucket_kg);
    Ok(CanonicalItem::pieces(name, buckets, DEFAULT_UNIT))
}
