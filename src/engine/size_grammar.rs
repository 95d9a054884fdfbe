// ==========================================
// 风管配件规格归一化引擎 - 尺寸语法解析
// ==========================================
// 职责: 自由格式尺寸字符串 → ShapeDescriptor
// 输入: "125" / "d160" / "100x150" / "125/200" / "160*125/d125" / "200*100/150*100/200*100"
// 红线: 所有尺寸必须为正整数; 段数只允许 1..3
// ==========================================

use crate::domain::shape::{Rect, RectChain, RoundChain, ShapeDescriptor};
use crate::engine::error::{NormalizeError, NormalizeResult};
use crate::domain::value::DecimalValue;
use crate::engine::tokens::parse_decimal;
use tracing::debug;

/// 矩形分隔符(西里尔 х、乘号、拉丁 x、星号)统一为 '*'
const RECT_DELIMITERS: &[char] = &['х', '×', 'x', '*'];

/// 圆形直径前缀
const ROUND_PREFIXES: &[char] = &['d', 'ф', 'ø'];

/// 单个尺寸上限(mm); 超出视为抽取错误,同时保证后续长度运算不溢出
pub const MAX_DIMENSION_MM: u32 = 100_000;

/// 单个尺寸段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Round(u32),
    Rect(Rect),
}

// ==========================================
// 主入口
// ==========================================

/// 解析尺寸字符串
///
/// # 分类规则(先匹配先生效)
/// 1. 无 "/"、无矩形分隔符 → 单一圆形
/// 2. 无 "/"、有矩形分隔符 → 单一矩形
/// 3. 有 "/",全部为圆形 → 圆形链(主/支[/出口])
/// 4. 有 "/",全部为矩形 → 矩形链(入口/支[/出口])
/// 5. 有 "/",圆矩混合 → 方向由先写的一侧决定
///
/// # 规整
/// - 两段圆形: 主管 = max,支管 = min,出口 = 主管
/// - 两段矩形: 第二段高度大于第一段时交换
pub fn parse_size(token: &str) -> NormalizeResult<ShapeDescriptor> {
    let normalized = normalize_token(token);
    if normalized.is_empty() {
        return Err(NormalizeError::size_parse(token, "пустой размер"));
    }

    let segments = normalized
        .split('/')
        .map(|raw| parse_segment(token, raw))
        .collect::<NormalizeResult<Vec<Segment>>>()?;

    if segments.is_empty() || segments.len() > 3 {
        return Err(NormalizeError::size_parse(
            token,
            format!("недопустимое число сегментов: {}", segments.len()),
        ));
    }

    let shape = classify(token, &segments)?;
    debug!(token = %token, shape = %shape, "尺寸解析完成");
    Ok(shape)
}

// ==========================================
// 内部工具
// ==========================================

/// 统一大小写、去空白、统一矩形分隔符
fn normalize_token(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .map(|c| if RECT_DELIMITERS.contains(&c) { '*' } else { c })
        .collect()
}

fn parse_segment(token: &str, raw: &str) -> NormalizeResult<Segment> {
    let body = raw.trim_start_matches(ROUND_PREFIXES);
    if body.is_empty() {
        return Err(NormalizeError::size_parse(token, "пустой сегмент"));
    }

    match body.split_once('*') {
        Some((width, height)) => {
            let width = parse_dimension(token, width)?;
            let height = parse_dimension(token, height)?;
            Ok(Segment::Rect(Rect::new(width, height)))
        }
        None => Ok(Segment::Round(parse_dimension(token, body)?)),
    }
}

/// 尺寸必须为正整数("160" 与表格导出的 "160.0" 均接受)
fn parse_dimension(token: &str, raw: &str) -> NormalizeResult<u32> {
    let value = parse_decimal(Some(raw), DecimalValue::ZERO)
        .map_err(|_| NormalizeError::size_parse(token, format!("'{}' не является числом", raw)))?;

    if !value.is_positive() || value.millis() % 1000 != 0 {
        return Err(NormalizeError::size_parse(
            token,
            format!("размер должен быть целым положительным числом: '{}'", raw),
        ));
    }

    match u32::try_from(value.floor()) {
        Ok(dimension) if dimension <= MAX_DIMENSION_MM => Ok(dimension),
        _ => Err(NormalizeError::size_parse(
            token,
            format!("слишком большой размер: '{}' (максимум {} мм)", raw, MAX_DIMENSION_MM),
        )),
    }
}

fn classify(token: &str, segments: &[Segment]) -> NormalizeResult<ShapeDescriptor> {
    use Segment::{Rect as R, Round as D};

    let shape = match segments {
        // ===== 单段 =====
        [D(d)] => ShapeDescriptor::Round(RoundChain { diameters: vec![*d] }),
        [R(r)] => ShapeDescriptor::Rectangular(RectChain { segments: vec![*r] }),

        // ===== 纯圆形链 =====
        [D(d1), D(d2)] => ShapeDescriptor::Round(RoundChain {
            diameters: vec![(*d1).max(*d2), (*d1).min(*d2)],
        }),
        [D(d1), D(d2), D(d3)] => ShapeDescriptor::Round(RoundChain {
            diameters: vec![*d1, *d2, *d3],
        }),

        // ===== 纯矩形链 =====
        [R(r1), R(r2)] => {
            let segments = if r2.height > r1.height {
                vec![*r2, *r1]
            } else {
                vec![*r1, *r2]
            };
            ShapeDescriptor::Rectangular(RectChain { segments })
        }
        [R(r1), R(r2), R(r3)] => ShapeDescriptor::Rectangular(RectChain {
            segments: vec![*r1, *r2, *r3],
        }),

        // ===== 混合: 矩形在前 =====
        [R(rect), D(diameter)] => ShapeDescriptor::RoundInRectangular {
            rect: *rect,
            diameter: *diameter,
            output: None,
        },
        [R(rect), D(diameter), R(output)] => ShapeDescriptor::RoundInRectangular {
            rect: *rect,
            diameter: *diameter,
            output: Some(*output),
        },

        // ===== 混合: 圆形在前 =====
        [D(diameter), R(rect)] => ShapeDescriptor::RectangularInRound {
            diameter: *diameter,
            rect: *rect,
            output: None,
        },
        [D(diameter), R(rect), D(output)] => ShapeDescriptor::RectangularInRound {
            diameter: *diameter,
            rect: *rect,
            output: Some(*output),
        },

        _ => {
            return Err(NormalizeError::size_parse(
                token,
                "неподдерживаемое сочетание круглых и прямоугольных сегментов",
            ))
        }
    };

    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(diameters: &[u32]) -> ShapeDescriptor {
        ShapeDescriptor::Round(RoundChain {
            diameters: diameters.to_vec(),
        })
    }

    fn rect_chain(segments: &[(u32, u32)]) -> ShapeDescriptor {
        ShapeDescriptor::Rectangular(RectChain {
            segments: segments.iter().map(|(w, h)| Rect::new(*w, *h)).collect(),
        })
    }

    #[test]
    fn test_single_round_prefixes() {
        assert_eq!(parse_size("125").unwrap(), round(&[125]));
        assert_eq!(parse_size("d160").unwrap(), round(&[160]));
        assert_eq!(parse_size("Ø 200").unwrap(), round(&[200]));
        assert_eq!(parse_size("ф315").unwrap(), round(&[315]));
        assert_eq!(parse_size("D 250").unwrap(), round(&[250]));
    }

    #[test]
    fn test_single_rect_delimiters() {
        let expected = rect_chain(&[(100, 150)]);
        assert_eq!(parse_size("100x150").unwrap(), expected);
        assert_eq!(parse_size("100х150").unwrap(), expected);
        assert_eq!(parse_size("100×150").unwrap(), expected);
        assert_eq!(parse_size("100 * 150").unwrap(), expected);
    }

    #[test]
    fn test_two_diameter_round_chain_orders_main_first() {
        // 主管 = max,支管 = min
        assert_eq!(parse_size("125/200").unwrap(), round(&[200, 125]));
        assert_eq!(parse_size("d200/d125").unwrap(), round(&[200, 125]));
        let shape = parse_size("125/200").unwrap();
        if let ShapeDescriptor::Round(chain) = shape {
            assert_eq!(chain.output(), Some(200));
        } else {
            panic!("expected round chain");
        }
    }

    #[test]
    fn test_three_diameter_chain_kept_as_written() {
        assert_eq!(parse_size("d160/d200/d125").unwrap(), round(&[160, 200, 125]));
    }

    #[test]
    fn test_two_segment_rect_swap() {
        // 第二段更高 → 交换
        assert_eq!(
            parse_size("200x100/150x200").unwrap(),
            rect_chain(&[(150, 200), (200, 100)])
        );
        // 第二段不高于第一段 → 保持
        assert_eq!(
            parse_size("200x100/150x100").unwrap(),
            rect_chain(&[(200, 100), (150, 100)])
        );
    }

    #[test]
    fn test_three_segment_rect_chain() {
        assert_eq!(
            parse_size("200x100/150x100/200x100").unwrap(),
            rect_chain(&[(200, 100), (150, 100), (200, 100)])
        );
    }

    #[test]
    fn test_mixed_orientation() {
        assert_eq!(
            parse_size("160*125/d125").unwrap(),
            ShapeDescriptor::RoundInRectangular {
                rect: Rect::new(160, 125),
                diameter: 125,
                output: None,
            }
        );
        assert_eq!(
            parse_size("d200/150x100/d200").unwrap(),
            ShapeDescriptor::RectangularInRound {
                diameter: 200,
                rect: Rect::new(150, 100),
                output: Some(200),
            }
        );
        assert_eq!(
            parse_size("250x250/d160/250x250").unwrap(),
            ShapeDescriptor::RoundInRectangular {
                rect: Rect::new(250, 250),
                diameter: 160,
                output: Some(Rect::new(250, 250)),
            }
        );
    }

    #[test]
    fn test_spreadsheet_float_dimension_accepted() {
        assert_eq!(parse_size("160.0").unwrap(), round(&[160]));
    }

    #[test]
    fn test_dimension_upper_bound() {
        assert_eq!(parse_size("100000").unwrap(), round(&[100_000]));
        let err = parse_size("100/4294967295/100").unwrap_err();
        assert!(err.to_string().contains("слишком большой размер"));
    }

    #[test]
    fn test_rejects_invalid_tokens() {
        for token in [
            "",
            "abc",
            "0",
            "d",
            "100x",
            "100x200x300",
            "1/2/3/4",
            "125/",
            "12.5",
            "100x100/100x100/d100",
            "d100/d100/100x100",
            "4294967295x100",
            "100x100/4294967295x50",
            "100001",
        ] {
            assert!(
                matches!(parse_size(token), Err(NormalizeError::SizeParse { .. })),
                "token {:?} should fail",
                token
            );
        }
    }
}
