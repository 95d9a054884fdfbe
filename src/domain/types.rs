// ==========================================
// 风管配件规格归一化引擎 - 领域类型定义
// ==========================================
// 职责: 配件类型 / 连接等级 / 板厚档位
// 红线: 关键字词表是封闭的,新增类型必须补全 match
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 配件类型 (Part Kind)
// ==========================================
// 每个类型对应一个处理器; 关键字别名映射到同一类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartKind {
    EndCap,         // Заглушка
    Duct,           // Труба / Воздуховод / Спиралка
    Elbow,          // Отвод
    Tee,            // Тройник
    Transition,     // Переход
    Insertion,      // Врезка
    PlateInsertion, // Врезка в площадку
    Damper,         // Дроссель
    ControlValve,   // Регулирующий клапан
    CheckValve,     // Обратный клапан
    Deflector,      // Дефлектор
    Nipple,         // Ниппель
    Silencer,       // Шумоглушитель
    RoofHood,       // Зонт
    Diffuser,       // Диффузор
    Penofol,        // Пенофол
    Mbor,           // МБОР
    Fireproofing,   // ОЗКС
    Tape,           // Скотч
}

impl PartKind {
    /// 全部类型(注册表按此顺序构建)
    pub const ALL: [PartKind; 19] = [
        PartKind::EndCap,
        PartKind::Duct,
        PartKind::Elbow,
        PartKind::Tee,
        PartKind::Transition,
        PartKind::Insertion,
        PartKind::PlateInsertion,
        PartKind::Damper,
        PartKind::ControlValve,
        PartKind::CheckValve,
        PartKind::Deflector,
        PartKind::Nipple,
        PartKind::Silencer,
        PartKind::RoofHood,
        PartKind::Diffuser,
        PartKind::Penofol,
        PartKind::Mbor,
        PartKind::Fireproofing,
        PartKind::Tape,
    ];

    /// 该类型接受的关键字(小写, 已 trim)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            PartKind::EndCap => &["заглушка"],
            PartKind::Duct => &["труба", "воздуховод", "спиралка"],
            PartKind::Elbow => &["отвод"],
            PartKind::Tee => &["тройник"],
            PartKind::Transition => &["переход", "переход кр", "переход пр", "переход пр на кр"],
            PartKind::Insertion => &["врезка", "врезка кр в кр трубу", "врезка пр в кр трубу"],
            PartKind::PlateInsertion => &["врезка в площадку"],
            PartKind::Damper => &["дроссель", "дроссель-клапан", "клапан дроссельный"],
            PartKind::ControlValve => &["регулирующий клапан"],
            PartKind::CheckValve => &["обратный клапан"],
            PartKind::Deflector => &["дефлектор"],
            PartKind::Nipple => &["ниппель"],
            PartKind::Silencer => &["шумоглушитель"],
            PartKind::RoofHood => &["зонт"],
            PartKind::Diffuser => &["диффузор"],
            PartKind::Penofol => &["пенофол"],
            PartKind::Mbor => &["мбор"],
            PartKind::Fireproofing => &["озкс"],
            PartKind::Tape => &["скотч"],
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 以主关键字显示,便于诊断信息直接对照输入
        write!(f, "{}", self.keywords()[0])
    }
}

// ==========================================
// 连接等级 (Connection Class)
// ==========================================
// [20]/[30] 由最大尺寸决定; [нп] 为固定字面量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionClass {
    Class20,
    Class30,
    Np,
}

impl ConnectionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionClass::Class20 => "[20]",
            ConnectionClass::Class30 => "[30]",
            ConnectionClass::Np => "[нп]",
        }
    }
}

impl fmt::Display for ConnectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// 板厚档位 (Sheet Gauge)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SheetGauge {
    G05, // 0.5 mm
    G07, // 0.7 mm
    G09, // 0.9 mm
}

impl SheetGauge {
    /// 点号形式 ("0.5"),与厚度表的标称值一致
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetGauge::G05 => "0.5",
            SheetGauge::G07 => "0.7",
            SheetGauge::G09 => "0.9",
        }
    }

    /// 目录名称中使用的逗号形式 ("0,5")
    pub fn catalog_str(&self) -> &'static str {
        match self {
            SheetGauge::G05 => "0,5",
            SheetGauge::G07 => "0,7",
            SheetGauge::G09 => "0,9",
        }
    }
}

impl fmt::Display for SheetGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_unique_across_kinds() {
        let mut seen = HashSet::new();
        for kind in PartKind::ALL {
            for keyword in kind.keywords() {
                assert!(seen.insert(*keyword), "重复关键字: {}", keyword);
                assert_eq!(keyword.trim(), *keyword);
                assert_eq!(keyword.to_lowercase(), *keyword);
            }
        }
    }

    #[test]
    fn test_connection_class_display() {
        assert_eq!(ConnectionClass::Class20.to_string(), "[20]");
        assert_eq!(ConnectionClass::Class30.to_string(), "[30]");
        assert_eq!(ConnectionClass::Np.to_string(), "[нп]");
    }

    #[test]
    fn test_sheet_gauge_forms() {
        assert_eq!(SheetGauge::G07.as_str(), "0.7");
        assert_eq!(SheetGauge::G07.catalog_str(), "0,7");
    }
}
