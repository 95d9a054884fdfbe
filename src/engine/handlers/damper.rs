// ==========================================
// 调节阀 (Дроссель)
// ==========================================

use super::elbow::{MANUFACTURER_GALVENT, MANUFACTURER_VINTEL};
use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::types::ConnectionClass;
use crate::engine::connection::resolve_connection;
use crate::engine::error::NormalizeResult;
use crate::engine::quantity::DEFAULT_UNIT;

/// 圆形调节阀不超过该直径时由 ГАЛВЕНТ 供货
const GALVENT_MAX_DIAMETER: u32 = 160;

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;

    if let Some(diameter) = shape.single_round() {
        let manufacturer = if diameter <= GALVENT_MAX_DIAMETER {
            MANUFACTURER_GALVENT
        } else {
            MANUFACTURER_VINTEL
        };
        let thickness = input.thickness_for(diameter, diameter)?;
        let name = format!(
            "Дроссель-клапан КР d {} {}/{}/ {} {}",
            diameter,
            MATERIAL,
            thickness,
            ConnectionClass::Np,
            manufacturer
        );
        return Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()));
    }

    if let Some(rect) = shape.single_rect() {
        let thickness = input.thickness_for(rect.width, rect.height)?;
        let connection = resolve_connection(&[rect.width, rect.height]);
        let name = format!("Дроссель ПР {} {}/{}/ {}", rect, MATERIAL, thickness, connection);
        return Ok(CanonicalItem::pieces(name, input.pieces()?, DEFAULT_UNIT));
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
    fn test_round_damper_manufacturer() {
        let item = run(PartKind::Damper, RawItemRecord::new("Дроссель", "d160"), normalize).unwrap();
        assert_eq!(item.name, "Дроссель-клапан КР d 160 Оц.С/0,5/ [нп] ГАЛВЕНТ");

        let item = run(PartKind::Damper, RawItemRecord::new("Дроссель", "d250"), normalize).unwrap();
        assert_eq!(item.name, "Дроссель-клапан КР d 250 Оц.С/0,5/ [нп] ВИНТЭЛ");
    }

    #[test]
    fn test_rect_damper() {
        let item = run(PartKind::Damper, RawItemRecord::new("Дроссель", "600х300"), normalize).unwrap();
        assert_eq!(item.name, "Дроссель ПР 600*300 Оц.С/0,7/ [20]");
        assert_eq!(item.unit, "шт");
    }
}
