// ==========================================
// 弯头 (Отвод)
// ==========================================
// 圆形: 角度归档到 45°/90°,厂家按直径与角度选择
// 矩形: 固定 90° 与 "шейка 50*50",无厂家字段
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::types::ConnectionClass;
use crate::engine::connection::resolve_connection;
use crate::engine::error::{NormalizeError, NormalizeResult};
use crate::engine::quantity::DEFAULT_UNIT;
use crate::domain::value::DecimalValue;
use crate::engine::tokens::parse_decimal;

pub const MANUFACTURER_GALVENT: &str = "ГАЛВЕНТ";
pub const MANUFACTURER_VINTEL: &str = "ВИНТЭЛ";

/// 不超过该直径的弯头由 ГАЛВЕНТ 供货
const GALVENT_MAX_DIAMETER: u32 = 125;
/// d160 / 90° 弯头: ГАЛВЕНТ,板厚固定 0,9
const FORCED_DIAMETER: u32 = 160;
const FORCED_THICKNESS: &str = "0,9";

/// 角度归档
///
/// - 缺失 → 90
/// - 0 ≤ a < 45 → 45
/// - 45 ≤ a ≤ 90 → 90
/// - 其他 → InvalidAngle
pub fn clamp_angle(raw_angle: Option<&str>) -> NormalizeResult<u32> {
    let cleaned = raw_angle.map(|a| a.trim().trim_end_matches('°').trim().to_string());
    let angle = parse_decimal(cleaned.as_deref(), DecimalValue::from_integer(90))?;

    let millis = angle.millis();
    if !(0..=90_000).contains(&millis) {
        return Err(NormalizeError::InvalidAngle(angle.to_string()));
    }
    Ok(if millis < 45_000 { 45 } else { 90 })
}

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;

    if let Some(diameter) = shape.single_round() {
        return normalize_round(input, diameter);
    }

    if let Some(rect) = shape.single_rect() {
        let thickness = input.thickness_for(rect.width, rect.height)?;
        let connection = resolve_connection(&[rect.width, rect.height]);
        let name = format!(
            "Отвод ПР {}-90° шейка 50*50 {}/{}/ {}",
            rect, MATERIAL, thickness, connection
        );
        return Ok(CanonicalItem::pieces(name, input.pieces()?, DEFAULT_UNIT));
    }

    Err(input.unsupported(&shape))
}

fn normalize_round(input: &HandlerInput<'_>, diameter: u32) -> NormalizeResult<CanonicalItem> {
    let angle = clamp_angle(input.record.angle().as_deref())?;

    let (manufacturer, thickness) = if diameter <= GALVENT_MAX_DIAMETER {
        (MANUFACTURER_GALVENT, input.thickness_for(diameter, diameter)?)
    } else if diameter == FORCED_DIAMETER && angle == 90 {
        (MANUFACTURER_GALVENT, FORCED_THICKNESS.to_string())
    } else {
        (MANUFACTURER_VINTEL, input.thickness_for(diameter, diameter)?)
    };

    let name = format!(
        "Отвод КР d {}-{}° R-150 {}/{}/ {} {}",
        diameter,
        angle,
        MATERIAL,
        thickness,
        ConnectionClass::Np,
        manufacturer
    );
    Ok(CanonicalItem::pieces(name, input.pieces()?, DEFAULT_UNIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RawItemRecord;
    use crate::domain::types::PartKind;
    use crate::engine::handlers::test_support::run;

    fn elbow(size: &str, angle: Option<&str>) -> RawItemRecord {
        RawItemRecord {
            angle: angle.map(str::to_string),
            ..RawItemRecord::new("Отвод", size)
        }
    }

    #[test]
    fn test_clamp_angle_bands() {
        assert_eq!(clamp_angle(None).unwrap(), 90);
        assert_eq!(clamp_angle(Some("0")).unwrap(), 45);
        assert_eq!(clamp_angle(Some("30")).unwrap(), 45);
        assert_eq!(clamp_angle(Some("44,5")).unwrap(), 45);
        assert_eq!(clamp_angle(Some("45")).unwrap(), 90);
        assert_eq!(clamp_angle(Some("90°")).unwrap(), 90);
        assert!(matches!(clamp_angle(Some("120")), Err(NormalizeError::InvalidAngle(_))));
        assert!(matches!(clamp_angle(Some("-10")), Err(NormalizeError::InvalidAngle(_))));
    }

    #[test]
    fn test_small_diameter_is_galvent() {
        let item = run(PartKind::Elbow, elbow("125", Some("90")), normalize).unwrap();
        assert_eq!(item.name, "Отвод КР d 125-90° R-150 Оц.С/0,5/ [нп] ГАЛВЕНТ");
    }

    #[test]
    fn test_d160_angle_30_clamps_to_45_vintel() {
        let item = run(PartKind::Elbow, elbow("d160", Some("30")), normalize).unwrap();
        assert_eq!(item.name, "Отвод КР d 160-45° R-150 Оц.С/0,5/ [нп] ВИНТЭЛ");
    }

    #[test]
    fn test_d160_angle_90_forces_thickness() {
        let record = RawItemRecord {
            thickness: Some("0,5".to_string()),
            ..elbow("d160", Some("90"))
        };
        let item = run(PartKind::Elbow, record, normalize).unwrap();
        assert_eq!(item.name, "Отвод КР d 160-90° R-150 Оц.С/0,9/ [нп] ГАЛВЕНТ");
    }

    #[test]
    fn test_large_diameter_is_vintel() {
        let item = run(PartKind::Elbow, elbow("315", None), normalize).unwrap();
        assert_eq!(item.name, "Отвод КР d 315-90° R-150 Оц.С/0,7/ [нп] ВИНТЭЛ");
    }

    #[test]
    fn test_rect_elbow_keeps_written_order() {
        let item = run(PartKind::Elbow, elbow("100×150", Some("90")), normalize).unwrap();
        assert_eq!(item.name, "Отвод ПР 100*150-90° шейка 50*50 Оц.С/0,5/ [20]");
        assert_eq!(item.unit, "шт");
    }

    #[test]
    fn test_invalid_angle_is_error() {
        let err = run(PartKind::Elbow, elbow("200", Some("135")), normalize).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidAngle(_)));
    }
}
