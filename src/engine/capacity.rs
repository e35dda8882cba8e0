// ==========================================
// 面粉厂生产计划系统 - 产能参考计算
// ==========================================
// 读取时计算, 不持久化; 仅供展示, 不做可行性约束
// ==========================================

use crate::domain::{MillSettings, PackerSettings};
use serde::Serialize;

// ==========================================
// CapacitySummary - 日产能参考
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySummary {
    pub daily_wheat_capacity_tonnes: f64, // 日小麦处理量 (吨)
    pub daily_flour_capacity_tonnes: f64, // 日面粉产量 (吨)
    pub daily_packing_capacity_kg: f64,   // 日包装能力 (kg)
}

/// 由当前设置计算日产能参考
pub fn capacity_summary(mill: &MillSettings, packer: &PackerSettings) -> CapacitySummary {
    let daily_wheat = f64::from(mill.number_of_mills) * mill.wheat_per_mill_per_day_tonnes;
    CapacitySummary {
        daily_wheat_capacity_tonnes: daily_wheat,
        daily_flour_capacity_tonnes: daily_wheat * mill.extraction_rate,
        daily_packing_capacity_kg: f64::from(packer.number_of_packers)
            * packer.capacity_per_packer_kg_per_day,
    }
}
