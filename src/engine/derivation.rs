// ==========================================
// 面粉厂生产计划系统 - 派生引擎
// ==========================================
// 职责: 计划草稿 + 当前规格集合 → 完整生产计划
// 红线: 纯函数; 规格集合变更后必须对全部计划重跑,
//       计划创建/编辑时对单条计划重跑
// ==========================================

use crate::config;
use crate::domain::{PlanDraft, PlanStatus, ProductSpecification, ProductionPlan};
use uuid::Uuid;

/// 缺省计划名称: "<产品名称> - <当日日期>"
pub fn default_plan_name(product_name: &str) -> String {
    format!(
        "{} - {}",
        product_name,
        chrono::Local::now().date_naive().format("%Y-%m-%d")
    )
}

/// 派生完整生产计划
///
/// # 步骤 (按序)
/// 1. 草稿缺 ID 时分配新 UUID
/// 2. 状态缺省为 Pending
/// 3. 面粉类别缺省为配置清单首项
/// 4. 按产品名称精确匹配规格 (大小写敏感, 重复时取首个)
/// 5. 命中规格: 写入单包重量, 重量为正时 包数 = ceil(数量/单包重量)
/// 6. 未命中: 清空两个派生字段
pub fn derive_plan(draft: PlanDraft, specs: &[ProductSpecification]) -> ProductionPlan {
    let spec = specs
        .iter()
        .find(|s| s.product_name == draft.product_name);

    let (package_weight_kg, number_of_packages) = match spec {
        Some(spec) => {
            let packages = if draft.quantity_kg > 0.0 && spec.package_weight_kg > 0.0 {
                Some((draft.quantity_kg / spec.package_weight_kg).ceil() as u32)
            } else {
                None
            };
            (Some(spec.package_weight_kg), packages)
        }
        None => (None, None),
    };

    let plan_name = draft
        .plan_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| default_plan_name(&draft.product_name));
    let flour_type = draft
        .flour_type
        .filter(|flour| !flour.trim().is_empty())
        .unwrap_or_else(|| config::default_flour_type().to_string());

    ProductionPlan {
        id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        plan_name,
        product_name: draft.product_name,
        flour_type,
        quantity_kg: draft.quantity_kg,
        start_date: draft.start_date,
        end_date: draft.end_date,
        status: draft.status.unwrap_or(PlanStatus::Pending),
        notes: draft.notes,
        package_weight_kg,
        number_of_packages,
    }
}
