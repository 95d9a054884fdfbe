// ==========================================
// 风管配件规格归一化引擎 - 字段工具
// ==========================================
// 职责: 容忍逗号的数值解析 / 板厚字面量规整
// 红线: 所有数值解析只经过 parse_decimal,不使用浮点
// ==========================================

use crate::domain::value::{is_sentinel, DecimalValue};
use crate::engine::error::ParseError;

/// 解析容忍逗号/点号的数值
///
/// # 规则
/// - 缺失或哨兵 → default
/// - 允许 `,` 或 `.` 作为小数点,允许数字间的空格作为千分位
/// - 超过三位的小数按四舍五入(远离零)截到三位
/// - 其他非数字内容 → ParseError
pub fn parse_decimal(token: Option<&str>, default: DecimalValue) -> Result<DecimalValue, ParseError> {
    let raw = match token {
        Some(value) if !is_sentinel(value) => value,
        _ => return Ok(default),
    };

    let invalid = || ParseError::InvalidNumber(raw.trim().to_string());

    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };

    let (whole_part, frac_part) = match body.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (body, ""),
    };

    if whole_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !whole_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let whole: i64 = if whole_part.is_empty() {
        0
    } else {
        whole_part.parse().map_err(|_| invalid())?
    };

    let mut frac_digits: Vec<i64> = frac_part
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    let round_up = frac_digits.get(3).is_some_and(|d| *d >= 5);
    frac_digits.resize(3, 0);
    let mut frac = frac_digits[0] * 100 + frac_digits[1] * 10 + frac_digits[2];
    if round_up {
        frac += 1;
    }

    let millis = whole
        .checked_mul(1000)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(invalid)?;

    Ok(DecimalValue::from_millis(if negative { -millis } else { millis }))
}

/// 板厚字面量规整
///
/// # 规则
/// - 哨兵值原样返回
/// - "0.55" → "0.5", "0.6" → "0.7"(目录中不存在这两个规格)
/// - 统一以逗号作为小数点输出
pub fn normalize_thickness(raw: &str) -> String {
    if is_sentinel(raw) {
        return raw.to_string();
    }
    let dotted = raw.trim().replace(',', ".");
    let mapped = match dotted.as_str() {
        "0.55" => "0.5",
        "0.6" => "0.7",
        other => other,
    };
    mapped.replace('.', ",")
}
