// ==========================================
// 风管配件规格归一化引擎 - 连接等级
// ==========================================
// 职责: 尺寸阈值 → [20]/[30]
// ==========================================

use crate::domain::types::ConnectionClass;

/// 任一尺寸达到该值即使用 [30] 法兰
pub const CLASS_30_THRESHOLD_MM: u32 = 1000;

/// 计算连接等级: 任一尺寸 ≥ 1000 → [30],否则 [20]
///
/// 圆形三通/圆形变径/短接头等固定使用 ConnectionClass::Np,不调用本函数
pub fn resolve_connection(dimensions: &[u32]) -> ConnectionClass {
    if dimensions.iter().any(|d| *d >= CLASS_30_THRESHOLD_MM) {
        ConnectionClass::Class30
    } else {
        ConnectionClass::Class20
    }
}
