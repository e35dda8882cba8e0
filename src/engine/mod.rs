// ==========================================
// 面粉厂生产计划系统 - 引擎层
// ==========================================

pub mod capacity;
pub mod derivation;

pub use capacity::{capacity_summary, CapacitySummary};
pub use derivation::{default_plan_name, derive_plan};
