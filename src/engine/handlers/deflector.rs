// ==========================================
// 风帽 (Дефлектор ЦАГИ)
// ==========================================
// 尺寸中的非数字字符全部去除

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::types::ConnectionClass;
use crate::engine::error::{NormalizeError, NormalizeResult};

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let token = input.size_token()?;
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();

    let diameter = match digits.parse::<u32>() {
        Ok(diameter) if diameter > 0 => diameter,
        _ => return Err(NormalizeError::size_parse(&token, "не удалось определить диаметр дефлектора")),
    };

    let thickness = input.thickness_for(diameter, diameter)?;
    let name = format!(
        "Дефлектор ЦАГИ d {} {}/{}/ {}",
        diameter,
        MATERIAL,
        thickness,
        ConnectionClass::Np
    );
    Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()))
}
