// ==========================================
// 面粉厂生产计划系统 - 文件导入 API
// ==========================================
// 两个独立导入:
// - 计划文件: 整体替换计划集合
// - 规格文件: 整体替换规格集合, 并级联重算全部计划
// 行级问题只缩小结果集; 容器级解码失败整体失败且不触碰存储
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{PlanDraft, ProductSpecification, ProductionPlan};
use crate::engine::derive_plan;
use crate::importer::row_mapper::{self, headers, RowOutcome, RowSkip};
use crate::importer::{ImportError, RawRow, SheetReader};
use crate::repository::{PlanRepository, SpecificationRepository};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// 计划文件必需列
pub const PLAN_REQUIRED_COLUMNS: [&str; 4] = [
    headers::PRODUCT_NAME,
    headers::QUANTITY_KG,
    headers::START_DATE,
    headers::END_DATE,
];

/// 规格文件必需列
pub const SPEC_REQUIRED_COLUMNS: [&str; 2] = [headers::PRODUCT_NAME, headers::PACKAGE_WEIGHT_KG];

// ==========================================
// 导入响应
// ==========================================
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanImportResponse {
    pub file_name: String,     // 源文件名
    pub imported: usize,       // 成功导入的行数
    pub skipped: Vec<RowSkip>, // 行级跳过明细
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecImportResponse {
    pub file_name: String,
    pub imported: usize,
    pub skipped: Vec<RowSkip>,
    pub plans_refreshed: usize, // 级联重算的计划数
}

// ==========================================
// ImportApi - 文件导入 API
// ==========================================
pub struct ImportApi {
    parser: Arc<dyn SheetReader>,
    plans: Arc<PlanRepository>,
    specs: Arc<SpecificationRepository>,
}

impl ImportApi {
    pub fn new(
        parser: Arc<dyn SheetReader>,
        plans: Arc<PlanRepository>,
        specs: Arc<SpecificationRepository>,
    ) -> Self {
        Self {
            parser,
            plans,
            specs,
        }
    }

    /// 导入计划文件, 整体替换现有计划集合 (不做合并)
    pub async fn import_plan_file(&self, file_path: &Path) -> ApiResult<PlanImportResponse> {
        let file_name = display_name(file_path);
        let rows = self.read_rows(file_path, &file_name, &PLAN_REQUIRED_COLUMNS)?;

        let mut drafts: Vec<PlanDraft> = Vec::new();
        let mut skipped: Vec<RowSkip> = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            // 表头为第 1 行, 首条数据行为第 2 行
            match row_mapper::map_plan_row(idx + 2, row) {
                RowOutcome::Valid(draft) => drafts.push(draft),
                RowOutcome::Skipped(skip) => skipped.push(skip),
            }
        }

        // 每条草稿对当前规格集合派生后整体入库
        let specs = self.specs.list()?;
        let plans: Vec<ProductionPlan> = drafts
            .into_iter()
            .map(|draft| derive_plan(draft, &specs))
            .collect();
        let imported = plans.len();
        self.plans.replace_all(plans).await?;

        tracing::info!(file = %file_name, imported, skipped = skipped.len(), "计划文件导入完成");
        Ok(PlanImportResponse {
            file_name,
            imported,
            skipped,
        })
    }

    /// 导入规格文件, 整体替换规格集合并级联重算全部计划
    ///
    /// 级联完成前整个操作不算完成: 规格与计划存储不是各自独立一致的
    pub async fn import_spec_file(&self, file_path: &Path) -> ApiResult<SpecImportResponse> {
        let file_name = display_name(file_path);
        let rows = self.read_rows(file_path, &file_name, &SPEC_REQUIRED_COLUMNS)?;

        let mut specs: Vec<ProductSpecification> = Vec::new();
        let mut skipped: Vec<RowSkip> = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            match row_mapper::map_spec_row(idx + 2, row) {
                RowOutcome::Valid(spec) => specs.push(spec),
                RowOutcome::Skipped(skip) => skipped.push(skip),
            }
        }

        let imported = specs.len();
        self.specs.replace_all(specs.clone()).await?;

        // 级联: 对全部现有计划重跑派生, 消除过期的派生字段
        let refreshed: Vec<ProductionPlan> = self
            .plans
            .list()?
            .into_iter()
            .map(|plan| derive_plan(PlanDraft::from(plan), &specs))
            .collect();
        let plans_refreshed = refreshed.len();
        self.plans.replace_all(refreshed).await?;

        tracing::info!(
            file = %file_name,
            imported,
            skipped = skipped.len(),
            plans_refreshed,
            "规格文件导入完成"
        );
        Ok(SpecImportResponse {
            file_name,
            imported,
            skipped,
            plans_refreshed,
        })
    }

    // 容器级读取; 解码失败时报出文件名与期望列, 且不触碰存储
    fn read_rows(
        &self,
        file_path: &Path,
        file_name: &str,
        required_columns: &[&str],
    ) -> ApiResult<Vec<RawRow>> {
        match self.parser.read_rows(file_path) {
            Ok(rows) => Ok(rows),
            Err(e @ (ImportError::FileNotFound(_) | ImportError::UnsupportedFormat(_))) => {
                Err(ApiError::Import(e))
            }
            Err(e) => Err(ApiError::ImportFileFailed {
                file: file_name.to_string(),
                columns: required_columns.join("、"),
                detail: e.to_string(),
            }),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
