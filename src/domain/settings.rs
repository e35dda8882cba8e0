// ==========================================
// 面粉厂生产计划系统 - 产能参数设置
// ==========================================
// 两个独立配置单例, 首次运行取默认值, 保存时整体覆盖
// 产能数据仅用于展示, 不参与计划可行性校验
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// MillSettings - 磨机参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MillSettings {
    pub number_of_mills: u32,               // 磨机数量
    pub wheat_per_mill_per_day_tonnes: f64, // 单台日处理小麦 (吨)
    pub extraction_rate: f64,               // 出粉率 (习惯上取 0-1, 不强制)
}

impl Default for MillSettings {
    fn default() -> Self {
        Self {
            number_of_mills: 2,
            wheat_per_mill_per_day_tonnes: 1000.0,
            extraction_rate: 0.75,
        }
    }
}

// ==========================================
// PackerSettings - 包装机参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackerSettings {
    pub number_of_packers: u32,             // 包装机数量
    pub capacity_per_packer_kg_per_day: f64, // 单台日包装能力 (kg)
}

impl Default for PackerSettings {
    fn default() -> Self {
        Self {
            number_of_packers: 2,
            capacity_per_packer_kg_per_day: 40000.0,
        }
    }
}
