// ==========================================
// 三通 (Тройник)
// ==========================================
// 子类型完全由形状决定:
// - 圆/圆/圆          → Тройник КР
// - 圆主管 + 矩形支管  → Тройник КР с ПР врезкой
// - 矩形链(1..3 段)   → Тройник ПР
// - 矩形主管 + 圆支管  → Тройник ПР с КР врезкой
// 长度 = 支管控制尺寸 + 余量; 深度固定
// ==========================================

use super::{HandlerInput, MATERIAL};
use crate::domain::item::CanonicalItem;
use crate::domain::shape::{Rect, RectChain, RoundChain, ShapeDescriptor};
use crate::domain::types::ConnectionClass;
use crate::engine::connection::resolve_connection;
use crate::engine::error::{NormalizeError, NormalizeResult};

pub fn normalize(input: &HandlerInput<'_>) -> NormalizeResult<CanonicalItem> {
    let shape = input.shape()?;

    let name = match &shape {
        ShapeDescriptor::Round(chain) => round_tee(input, chain)?,
        ShapeDescriptor::RectangularInRound {
            diameter,
            rect,
            output,
        } => round_tee_with_rect_branch(input, *diameter, *rect, output.unwrap_or(*diameter))?,
        ShapeDescriptor::Rectangular(chain) => rect_tee(input, chain)?,
        ShapeDescriptor::RoundInRectangular {
            rect,
            diameter,
            output,
        } => rect_tee_with_round_branch(input, *rect, *diameter, output.unwrap_or(*rect))?,
    };

    Ok(CanonicalItem::pieces(name, input.pieces()?, input.unit()))
}

fn run_length(input: &HandlerInput<'_>, branch: u32) -> NormalizeResult<u32> {
    branch
        .checked_add(input.config.tee_branch_allowance_mm)
        .ok_or_else(|| NormalizeError::size_parse(&branch.to_string(), "длина тройника вне диапазона"))
}

fn round_tee(input: &HandlerInput<'_>, chain: &RoundChain) -> NormalizeResult<String> {
    let main = chain.main();
    let branch = chain.branch().unwrap_or(main);
    let output = chain.output().unwrap_or(main);

    let thickness = input.thickness_for(main, main)?;
    Ok(format!(
        "Тройник КР d {}/{}/{} -{} -{} {}/{}/ {}",
        main,
        branch,
        output,
        run_length(input, branch)?,
        input.config.tee_depth_mm,
        MATERIAL,
        thickness,
        ConnectionClass::Np
    ))
}

fn round_tee_with_rect_branch(
    input: &HandlerInput<'_>,
    diameter: u32,
    branch: Rect,
    output: u32,
) -> NormalizeResult<String> {
    let thickness = input.thickness_for(branch.width, branch.height)?;
    Ok(format!(
        "Тройник КР с ПР врезкой d {}/{}/d {} -{} -{} {}/{}/ {}",
        diameter,
        branch,
        output,
        run_length(input, branch.width)?,
        input.config.tee_depth_mm,
        MATERIAL,
        thickness,
        ConnectionClass::Np
    ))
}

/// 矩形三通: 板厚按入口边长与三通长度中的最大值查表
fn rect_tee(input: &HandlerInput<'_>, chain: &RectChain) -> NormalizeResult<String> {
    let main = chain.input();
    let branch = chain.branch().unwrap_or(main);
    let output = chain.output().unwrap_or(main);
    let length = run_length(input, branch.width)?;

    let thickness = input.thickness_for(main.max_side(), length)?;
    let connection = resolve_connection(&[
        main.width,
        main.height,
        branch.width,
        branch.height,
        output.width,
        output.height,
    ]);

    Ok(format!(
        "Тройник ПР {}/{}/{} -{} -{} {}/{}/ {}",
        main,
        branch,
        output,
        length,
        input.config.tee_depth_mm,
        MATERIAL,
        thickness,
        connection
    ))
}

fn rect_tee_with_round_branch(
    input: &HandlerInput<'_>,
    main: Rect,
    diameter: u32,
    output: Rect,
) -> NormalizeResult<String> {
    let length = run_length(input, diameter)?;
    let thickness = input.thickness_for(main.max_side(), length)?;
    let connection = resolve_connection(&[
        main.width,
        main.height,
        diameter,
        output.width,
        output.height,
    ]);

    Ok(format!(
        "Тройник ПР с КР врезкой {}/d {}/{} -{} -{} {}/{}/ {}",
        main,
        diameter,
        output,
        length,
        input.config.tee_depth_mm,
        MATERIAL,
        thickness,
        connection
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Quantity;
    use crate::domain::record::RawItemRecord;
    use crate::domain::types::PartKind;
    use crate::config::EngineConfig;
    use crate::engine::error::ThicknessError;
    use crate::engine::handlers::test_support::run;

    fn tee(size: &str) -> RawItemRecord {
        RawItemRecord::new("Тройник", size)
    }

    #[test]
    fn test_rect_tee_three_segments() {
        let record = RawItemRecord {
            thickness: Some("-".to_string()),
            quantity: Some("4".to_string()),
            unit: Some("шт".to_string()),
            ..tee("200x100/150x100/200x100")
        };
        let item = run(PartKind::Tee, record, normalize).unwrap();
        assert_eq!(item.name, "Тройник ПР 200*100/150*100/200*100 -350 -100 Оц.С/0,7/ [20]");
        assert_eq!(item.quantity, Quantity::Count(4));
        assert_eq!(item.unit, "шт");
    }

    #[test]
    fn test_round_tee_two_diameters() {
        let item = run(PartKind::Tee, tee("125/200"), normalize).unwrap();
        assert_eq!(item.name, "Тройник КР d 200/125/200 -325 -100 Оц.С/0,5/ [нп]");
    }

    #[test]
    fn test_round_tee_single_diameter() {
        let item = run(PartKind::Tee, tee("d160"), normalize).unwrap();
        assert_eq!(item.name, "Тройник КР d 160/160/160 -360 -100 Оц.С/0,5/ [нп]");
    }

    #[test]
    fn test_round_tee_with_rect_branch() {
        let item = run(PartKind::Tee, tee("d200/150x100"), normalize).unwrap();
        assert_eq!(
            item.name,
            "Тройник КР с ПР врезкой d 200/150*100/d 200 -350 -100 Оц.С/0,5/ [нп]"
        );
    }

    #[test]
    fn test_rect_tee_two_segments_swapped() {
        // 支管高于主管 → 交换
        let item = run(PartKind::Tee, tee("500x250/300x400"), normalize).unwrap();
        assert_eq!(item.name, "Тройник ПР 300*400/500*250/300*400 -700 -100 Оц.С/0,7/ [20]");
    }

    #[test]
    fn test_rect_tee_with_round_branch() {
        let item = run(PartKind::Tee, tee("1000x500/d315"), normalize).unwrap();
        assert_eq!(
            item.name,
            "Тройник ПР с КР врезкой 1000*500/d 315/1000*500 -515 -100 Оц.С/0,7/ [30]"
        );
    }

    #[test]
    fn test_narrow_branch_on_small_body_hits_thickness_gap() {
        // 长度 = 80 + 200 = 280,落在 251..299 空档
        let gap = NormalizeError::Thickness(ThicknessError::OutOfTable { max_side: 280 });
        assert_eq!(run(PartKind::Tee, tee("200x100/80x100/200x100"), normalize).unwrap_err(), gap);
        assert_eq!(run(PartKind::Tee, tee("250x200/d80"), normalize).unwrap_err(), gap);

        // 用户给定板厚时不查表
        let record = RawItemRecord {
            thickness: Some("0,5".to_string()),
            ..tee("250x200/d80")
        };
        let item = run(PartKind::Tee, record, normalize).unwrap();
        assert_eq!(item.name, "Тройник ПР с КР врезкой 250*200/d 80/250*200 -280 -100 Оц.С/0,5/ [20]");
    }

    #[test]
    fn test_run_length_overflow_is_error() {
        let config = EngineConfig {
            tee_branch_allowance_mm: u32::MAX,
            ..EngineConfig::default()
        };
        let record = RawItemRecord {
            thickness: Some("0,5".to_string()),
            ..tee("100/150/100")
        };
        let err = normalize(&HandlerInput::new(PartKind::Tee, &record, &config)).unwrap_err();
        assert!(matches!(err, NormalizeError::SizeParse { .. }));
    }
}
