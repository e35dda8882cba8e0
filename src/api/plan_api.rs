// ==========================================
// 面粉厂生产计划系统 - 生产计划 API
// ==========================================
// 职责: 表单提交的校验 → 派生 → 入库
// 校验失败时不触碰存储, 错误带字段名供内联展示
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{PlanDraft, PlanStatus, ProductionPlan};
use crate::engine::derive_plan;
use crate::repository::{PlanRepository, SpecificationRepository};
use chrono::NaiveDate;
use std::sync::Arc;

// ==========================================
// PlanInput - 表单输入
// ==========================================
#[derive(Debug, Clone)]
pub struct PlanInput {
    pub plan_name: String,
    pub product_name: String,
    pub flour_type: String,
    pub quantity_kg: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: PlanStatus,
    pub notes: String,
}

// ==========================================
// PlanApi - 生产计划 API
// ==========================================
pub struct PlanApi {
    plans: Arc<PlanRepository>,
    specs: Arc<SpecificationRepository>,
}

impl PlanApi {
    pub fn new(plans: Arc<PlanRepository>, specs: Arc<SpecificationRepository>) -> Self {
        Self { plans, specs }
    }

    /// 当前计划列表 (保持插入顺序)
    pub fn list(&self) -> ApiResult<Vec<ProductionPlan>> {
        Ok(self.plans.list()?)
    }

    /// 创建新计划
    pub async fn create(&self, input: PlanInput) -> ApiResult<ProductionPlan> {
        let (start_date, end_date) = Self::validate(&input)?;
        let specs = self.specs.list()?;
        let plan = derive_plan(Self::to_draft(input, None, start_date, end_date), &specs);
        self.plans.add(plan.clone()).await?;

        tracing::info!(plan_id = %plan.id, "生产计划已创建");
        Ok(plan)
    }

    /// 按 ID 整体替换一条计划 (表单编辑)
    pub async fn update(&self, id: &str, input: PlanInput) -> ApiResult<ProductionPlan> {
        let (start_date, end_date) = Self::validate(&input)?;
        let specs = self.specs.list()?;
        let plan = derive_plan(
            Self::to_draft(input, Some(id.to_string()), start_date, end_date),
            &specs,
        );
        self.plans.replace(id, plan.clone()).await?;

        tracing::info!(plan_id = id, "生产计划已更新");
        Ok(plan)
    }

    /// 按 ID 删除一条计划
    ///
    /// 删除前的用户确认由展示层负责, 本层直接执行
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.plans.remove(id).await?;
        tracing::info!(plan_id = id, "生产计划已删除");
        Ok(())
    }

    // ===== 表单校验 =====
    fn validate(input: &PlanInput) -> ApiResult<(NaiveDate, NaiveDate)> {
        if input.plan_name.trim().is_empty() {
            return Err(validation("planName", "计划名称不能为空"));
        }
        if input.product_name.trim().is_empty() {
            return Err(validation("productName", "产品名称不能为空"));
        }
        if input.flour_type.trim().is_empty() {
            return Err(validation("flourType", "面粉类别不能为空"));
        }
        if !(input.quantity_kg > 0.0) {
            return Err(validation("quantityKg", "数量必须大于 0"));
        }

        let start_date = input
            .start_date
            .ok_or_else(|| validation("startDate", "开始日期不能为空"))?;
        let end_date = input
            .end_date
            .ok_or_else(|| validation("endDate", "结束日期不能为空"))?;
        if end_date < start_date {
            return Err(validation("endDate", "结束日期不能早于开始日期"));
        }

        Ok((start_date, end_date))
    }

    fn to_draft(
        input: PlanInput,
        id: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> PlanDraft {
        PlanDraft {
            id,
            plan_name: Some(input.plan_name.trim().to_string()),
            product_name: input.product_name.trim().to_string(),
            flour_type: Some(input.flour_type.trim().to_string()),
            quantity_kg: input.quantity_kg,
            start_date,
            end_date,
            status: Some(input.status),
            notes: input.notes,
        }
    }
}

fn validation(field: &str, message: &str) -> ApiError {
    ApiError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
