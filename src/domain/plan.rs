// ==========================================
// 面粉厂生产计划系统 - 生产计划领域模型
// ==========================================
// 字段命名: 持久化为 camelCase, 与历史存储数据兼容
// ==========================================

use crate::domain::types::PlanStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionPlan - 生产计划
// ==========================================
// 不变量: quantity_kg > 0, start_date <= end_date (由 API 层校验)
// 派生字段: package_weight_kg / number_of_packages 随规格集合联动,
//           不得相对最新规格集合过期
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlan {
    pub id: String,                // 计划ID (UUID, 创建后不可变)
    pub plan_name: String,         // 计划名称
    pub product_name: String,      // 产品名称 (规格关联键)
    pub flour_type: String,        // 面粉类别 (自由文本)
    pub quantity_kg: f64,          // 计划数量 (kg)
    pub start_date: NaiveDate,     // 开始日期
    pub end_date: NaiveDate,       // 结束日期
    pub status: PlanStatus,        // 计划状态
    #[serde(default)]
    pub notes: String,             // 备注

    // ===== 派生字段 (仅当存在匹配规格时出现) =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_weight_kg: Option<f64>, // 单包重量 (kg, 来自规格)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_packages: Option<u32>, // 包数 = ceil(数量/单包重量)
}

// ==========================================
// PlanDraft - 计划草稿
// ==========================================
// 来源: 表单提交或表格行映射
// 必填字段非 Option; 可缺省字段由派生引擎补全
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    pub id: Option<String>,         // 缺省时由派生引擎分配
    pub plan_name: Option<String>,  // 缺省时按 "<产品> - <当日>" 补全
    pub product_name: String,
    pub flour_type: Option<String>, // 缺省时取面粉类别清单首项
    pub quantity_kg: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<PlanStatus>, // 缺省时为 Pending
    pub notes: String,
}

impl From<ProductionPlan> for PlanDraft {
    fn from(plan: ProductionPlan) -> Self {
        Self {
            id: Some(plan.id),
            plan_name: Some(plan.plan_name),
            product_name: plan.product_name,
            flour_type: Some(plan.flour_type),
            quantity_kg: plan.quantity_kg,
            start_date: plan.start_date,
            end_date: plan.end_date,
            status: Some(plan.status),
            notes: plan.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ProductionPlan {
        ProductionPlan {
            id: "plan-1".to_string(),
            plan_name: "一月批次".to_string(),
            product_name: "Flour A".to_string(),
            flour_type: "All-Purpose".to_string(),
            quantity_kg: 1000.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            status: PlanStatus::Pending,
            notes: String::new(),
            package_weight_kg: Some(25.0),
            number_of_packages: Some(40),
        }
    }

    #[test]
    fn test_serde_camel_case_round_trip() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"planName\""));
        assert!(json.contains("\"packageWeightKg\""));
        let back: ProductionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_derived_fields_omitted_when_absent() {
        let mut plan = sample_plan();
        plan.package_weight_kg = None;
        plan.number_of_packages = None;
        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("packageWeightKg"));
        assert!(!json.contains("numberOfPackages"));
    }

    #[test]
    fn test_draft_from_plan_keeps_identity() {
        let plan = sample_plan();
        let draft = PlanDraft::from(plan.clone());
        assert_eq!(draft.id.as_deref(), Some("plan-1"));
        assert_eq!(draft.product_name, plan.product_name);
        assert_eq!(draft.status, Some(PlanStatus::Pending));
    }
}
