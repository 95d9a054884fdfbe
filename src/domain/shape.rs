// ==========================================
// 风管配件规格归一化引擎 - 截面形状描述
// ==========================================
// 职责: 尺寸语法解析结果的结构化表示
// 红线: 所有尺寸为正整数(mm); 多段顺序已按行业约定规整
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Rect - 矩形截面 (宽 × 高)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// 长边在前(风管、矩形堵头的目录写法)
    pub fn sorted_desc(&self) -> Rect {
        Rect::new(self.max_side(), self.width.min(self.height))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.width, self.height)
    }
}

// ==========================================
// RoundChain - 圆形截面链 (主管/支管[/出口])
// ==========================================
// 两段写法已规整为 [max, min],出口视为主管
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundChain {
    pub diameters: Vec<u32>,
}

impl RoundChain {
    pub fn main(&self) -> u32 {
        self.diameters[0]
    }

    pub fn branch(&self) -> Option<u32> {
        self.diameters.get(1).copied()
    }

    /// 出口直径: 三段写法取显式值,两段写法等于主管
    pub fn output(&self) -> Option<u32> {
        match self.diameters.len() {
            3 => self.diameters.get(2).copied(),
            2 => Some(self.main()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.diameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diameters.is_empty()
    }
}

// ==========================================
// RectChain - 矩形截面链 (入口/支管[/出口])
// ==========================================
// 两段写法: 若第二段高度大于第一段则交换(支管不能大于主管)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectChain {
    pub segments: Vec<Rect>,
}

impl RectChain {
    pub fn input(&self) -> Rect {
        self.segments[0]
    }

    pub fn branch(&self) -> Option<Rect> {
        self.segments.get(1).copied()
    }

    pub fn output(&self) -> Option<Rect> {
        match self.segments.len() {
            3 => self.segments.get(2).copied(),
            2 => Some(self.input()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 所有段的全部边长
    pub fn all_sides(&self) -> Vec<u32> {
        self.segments
            .iter()
            .flat_map(|r| [r.width, r.height])
            .collect()
    }
}

// ==========================================
// ShapeDescriptor - 形状判别联合
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeDescriptor {
    /// 纯圆形 (1..3 个直径)
    Round(RoundChain),
    /// 纯矩形 (1..3 段)
    Rectangular(RectChain),
    /// 矩形段在前、圆形段在后: 矩形主体上的圆形接口 ("250*250/d160[/250*250]")
    RoundInRectangular {
        rect: Rect,
        diameter: u32,
        output: Option<Rect>,
    },
    /// 圆形段在前、矩形段在后: 圆形主体上的矩形接口 ("d200/150*100[/d200]")
    RectangularInRound {
        diameter: u32,
        rect: Rect,
        output: Option<u32>,
    },
}

impl ShapeDescriptor {
    /// 单一圆形直径
    pub fn single_round(&self) -> Option<u32> {
        match self {
            ShapeDescriptor::Round(chain) if chain.len() == 1 => Some(chain.main()),
            _ => None,
        }
    }

    /// 单一矩形截面
    pub fn single_rect(&self) -> Option<Rect> {
        match self {
            ShapeDescriptor::Rectangular(chain) if chain.len() == 1 => Some(chain.input()),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeDescriptor::Round(chain) => {
                let parts: Vec<String> = chain.diameters.iter().map(|d| d.to_string()).collect();
                write!(f, "d {}", parts.join("/"))
            }
            ShapeDescriptor::Rectangular(chain) => {
                let parts: Vec<String> = chain.segments.iter().map(|r| r.to_string()).collect();
                write!(f, "{}", parts.join("/"))
            }
            ShapeDescriptor::RoundInRectangular { rect, diameter, output } => {
                write!(f, "{}/d {}", rect, diameter)?;
                if let Some(out) = output {
                    write!(f, "/{}", out)?;
                }
                Ok(())
            }
            ShapeDescriptor::RectangularInRound { diameter, rect, output } => {
                write!(f, "d {}/{}", diameter, rect)?;
                if let Some(out) = output {
                    write!(f, "/d {}", out)?;
                }
                Ok(())
            }
        }
    }
}
