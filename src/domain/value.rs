// ==========================================
// 风管配件规格归一化引擎 - 值类型
// ==========================================
// 职责: 哨兵值识别 / 字段解码 / 三位小数定点数
// 红线: 哨兵 → 缺失的映射只在 decode_field 发生; 定点数不经浮点
// ==========================================

use std::fmt;

/// 上游抽取层使用的"空值"写法(比较时忽略大小写与首尾空白)
const SENTINELS: &[&str] = &["", "-", "–", "—", "none", "nan", "null"];

/// 判断是否为哨兵值
pub fn is_sentinel(token: &str) -> bool {
    let trimmed = token.trim().to_lowercase();
    SENTINELS.contains(&trimmed.as_str())
}

/// 解码单个输入列: 缺失或哨兵 → None,否则返回 trim 后的文本
///
/// 这是哨兵 → 缺失映射的唯一入口
pub fn decode_field(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(value) if !is_sentinel(value) => Some(value.trim().to_string()),
        _ => None,
    }
}

// ==========================================
// DecimalValue - 三位小数定点数
// ==========================================
// 以千分之一为单位存储: "55" → 55000, "0,55" → 550
// 米数 × 1000 恰好等于内部值,米 → 毫米换算无精度损失
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DecimalValue {
    millis: i64,
}

impl DecimalValue {
    pub const ZERO: DecimalValue = DecimalValue { millis: 0 };
    pub const ONE: DecimalValue = DecimalValue { millis: 1000 };

    pub fn from_integer(value: i64) -> Self {
        Self {
            millis: value * 1000,
        }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn millis(&self) -> i64 {
        self.millis
    }

    pub fn is_positive(&self) -> bool {
        self.millis > 0
    }

    /// 向下取整
    pub fn floor(&self) -> i64 {
        self.millis.div_euclid(1000)
    }

    /// ceil(self / divisor),divisor 为整数单位
    pub fn ceil_div(&self, divisor: u32) -> i64 {
        let denominator = i64::from(divisor) * 1000;
        let quotient = self.millis.div_euclid(denominator);
        if self.millis.rem_euclid(denominator) == 0 {
            quotient
        } else {
            quotient + 1
        }
    }

    /// 仅在输出边界(JSON 序列化)使用
    pub fn to_f64(&self) -> f64 {
        self.millis as f64 / 1000.0
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.millis < 0 { "-" } else { "" };
        let abs = self.millis.unsigned_abs();
        let whole = abs / 1000;
        let frac = abs % 1000;
        if frac == 0 {
            return write!(f, "{}{}", sign, whole);
        }
        let digits = format!("{:03}", frac);
        write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}
