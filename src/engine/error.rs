// ==========================================
// 风管配件规格归一化引擎 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 错误文本会写入输出行的名称字段,面向业务人员,使用俄文
// ==========================================

use thiserror::Error;

/// 数值字段解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("не удалось преобразовать в число: '{0}'")]
    InvalidNumber(String),
}

/// 厚度表查询错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThicknessError {
    /// 契约违规: 调用方必须先校验两个尺寸都存在
    #[error("CRITICAL ERROR! в расчёт толщины переданы пустые размеры: width={width:?}, height={height:?}")]
    MissingDimension {
        width: Option<u32>,
        height: Option<u32>,
    },

    #[error("Ошибка: уточните параметры для данного размера ({max_side} мм)")]
    OutOfTable { max_side: u32 },
}

/// 单条记录归一化错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("не удалось разобрать размер '{token}': {reason}")]
    SizeParse { token: String, reason: String },

    #[error("недопустимый угол отвода: {0}°, допустимы значения 0–90°")]
    InvalidAngle(String),

    #[error("Неизвестный тип: {0}")]
    UnknownType(String),

    #[error(transparent)]
    Thickness(#[from] ThicknessError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("не заполнено поле «{0}»")]
    MissingField(&'static str),

    #[error("размер {shape} не поддерживается для типа «{kind}»")]
    ShapeNotSupported { kind: String, shape: String },

    #[error("неизвестный тип регулирующего клапана: {0}")]
    UnknownValveType(String),

    #[error("недопустимое количество: {0}")]
    InvalidQuantity(String),
}

impl NormalizeError {
    /// 构造尺寸解析错误
    pub fn size_parse(token: &str, reason: impl Into<String>) -> Self {
        NormalizeError::SizeParse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_error_converts_transparently() {
        let err: NormalizeError = ThicknessError::OutOfTable { max_side: 2500 }.into();
        assert!(err.to_string().contains("уточните параметры"));
        assert!(err.to_string().contains("2500"));
    }

    #[test]
    fn test_unknown_type_message() {
        let err = NormalizeError::UnknownType("виджет".to_string());
        assert_eq!(err.to_string(), "Неизвестный тип: виджет");
    }
}
