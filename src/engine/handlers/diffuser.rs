// ==========================================
// 散流器 (Диффузор)
// ==========================================
// 唯一的展开型处理器: 一条输入 → 散流器 + 转接箱 两条输出
// 仅支持矩形面板 W×H(可带 /d D 圆形接口); 转接箱接口 = 面板 - 缩进
// 圆形散流器没有目录模板,按不支持的形状处理
// 两条输出共享数量与单位
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::shape::{Rect, ShapeDescriptor};
use crate::engine::connection::resolve_connection;
use crate::engine::error::{NormalizeError, NormalizeResult};

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<Vec<CanonicalItem>> {
    let shape = input.shape()?;
    let purpose = input
        .record
        .transition_type()
        .map(|t| format!(" {}", t))
        .unwrap_or_default();

    let (diffuser, adapter) = match &shape {
        ShapeDescriptor::Rectangular(chain) if chain.len() == 1 => {
            let face = chain.input();
            (rect_diffuser_name(face, &purpose), adapter_name(input, face, None)?)
        }
        ShapeDescriptor::RoundInRectangular {
            rect,
            diameter,
            output: None,
        } => (
            rect_diffuser_name(*rect, &purpose),
            adapter_name(input, *rect, Some(*diameter))?,
        ),
        _ => return Err(input.unsupported(&shape)),
    };

    let count = input.pieces()?;
    let unit = input.unit();
    Ok(vec![
        CanonicalItem::pieces(diffuser, count, unit.clone()),
        CanonicalItem::pieces(adapter, count, unit),
    ])
}

/// 面板尺寸使用西里尔字母 х
fn rect_diffuser_name(face: Rect, purpose: &str) -> String {
    format!("Диффузор {}х{}{}", face.width, face.height, purpose)
}

fn adapter_name(input: &HandlerInput<'_>, face: Rect, collar: Option<u32>) -> NormalizeResult<String> {
    let reduction = input.config.diffuser_neck_reduction_mm;
    let neck = match (face.width.checked_sub(reduction), face.height.checked_sub(reduction)) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Rect::new(w, h),
        _ => {
            return Err(NormalizeError::size_parse(
                &face.to_string(),
                format!("размер панели диффузора должен превышать {} мм", reduction),
            ))
        }
    };

    let thickness = input.thickness_for(neck.width, neck.height)?;
    let connection = resolve_connection(&[neck.width, neck.height]);
    let collar = collar
        .map(|d| format!(" с врезкой d {}", d))
        .unwrap_or_default();

    Ok(format!(
        "Адаптер ПР {} -{}(h){} {}/{}/ {}",
        neck, input.config.adapter_height_mm, collar, MATERIAL, thickness, connection
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::domain::item::Quantity;
    use crate::domain::record::RawItemRecord;
    use crate::domain::types::PartKind;

    fn expand(record: RawItemRecord) -> NormalizeResult<Vec<CanonicalItem>> {
        let config = EngineConfig::default();
        normalize(&HandlerInput::new(PartKind::Diffuser, &record, &config))
    }

    #[test]
    fn test_rect_diffuser_expands_to_two_items() {
        let record = RawItemRecord {
            quantity: Some("2".to_string()),
            ..RawItemRecord::new("Диффузор", "450х450")
        };
        let items = expand(record).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Диффузор 450х450");
        assert_eq!(items[1].name, "Адаптер ПР 300*300 -300(h) Оц.С/0,7/ [20]");
        assert!(items.iter().all(|i| i.quantity == Quantity::Count(2) && i.unit == "шт"));
    }

    #[test]
    fn test_rect_diffuser_with_collar_and_purpose() {
        let record = RawItemRecord {
            transition_type: Some("вытяжной".to_string()),
            ..RawItemRecord::new("Диффузор", "600x600/d250")
        };
        let items = expand(record).unwrap();
        assert_eq!(items[0].name, "Диффузор 600х600 вытяжной");
        assert_eq!(items[1].name, "Адаптер ПР 450*450 -300(h) с врезкой d 250 Оц.С/0,7/ [20]");
    }

    #[test]
    fn test_round_diffuser_not_supported() {
        let record = RawItemRecord {
            transition_type: Some("вытяжной".to_string()),
            ..RawItemRecord::new("Диффузор", "Ø125")
        };
        let err = expand(record).unwrap_err();
        assert!(matches!(err, NormalizeError::ShapeNotSupported { .. }));
    }

    #[test]
    fn test_small_face_is_error() {
        let err = expand(RawItemRecord::new("Диффузор", "150x150")).unwrap_err();
        assert!(matches!(err, NormalizeError::SizeParse { .. }));
    }
}
