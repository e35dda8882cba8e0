// ==========================================
// 面粉厂生产计划系统 - 应用装配
// ==========================================
// 启动流程: 构建存储端口 → 创建仓储 → 一次性加载四条记录
// → 汇总损坏恢复提示 → 装配 API
// ==========================================

use crate::api::{ImportApi, PlanApi, SettingsApi};
use crate::importer::ExcelParser;
use crate::repository::{
    PlanRepository, RepositoryResult, SettingsRepository, SpecificationRepository,
};
use crate::storage::{JsonFileStorage, StoragePort};
use std::sync::Arc;

// ==========================================
// LoadReport - 启动加载报告
// ==========================================
/// 启动加载报告
///
/// notices 为面向用户的可关闭提示 (损坏数据回退等), 均非致命
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub plans_loaded: usize,
    pub specs_loaded: usize,
    pub notices: Vec<String>,
}

// ==========================================
// AppState - 应用状态
// ==========================================
pub struct AppState {
    pub plan_api: PlanApi,
    pub import_api: ImportApi,
    pub settings_api: SettingsApi,
}

impl AppState {
    /// 在指定存储端口上装配应用并加载已存数据
    pub async fn new(port: Arc<dyn StoragePort>) -> RepositoryResult<(Self, LoadReport)> {
        let plans = Arc::new(PlanRepository::new(Arc::clone(&port)));
        let specs = Arc::new(SpecificationRepository::new(Arc::clone(&port)));
        let settings = Arc::new(SettingsRepository::new(Arc::clone(&port)));

        let mut report = LoadReport::default();

        let plan_outcome = plans.load().await?;
        report.plans_loaded = plan_outcome.loaded;
        if plan_outcome.recovered {
            report
                .notices
                .push("已保存的生产计划无法读取, 可能已损坏, 已从空列表继续。".to_string());
        }

        let spec_outcome = specs.load().await?;
        report.specs_loaded = spec_outcome.loaded;
        if spec_outcome.recovered {
            report
                .notices
                .push("已保存的产品规格无法读取, 可能已损坏, 已从空列表继续。".to_string());
        }

        let settings_outcome = settings.load().await?;
        if settings_outcome.recovered {
            report
                .notices
                .push("已保存的产能参数无法读取, 已恢复为默认值。".to_string());
        }

        tracing::info!(
            plans = report.plans_loaded,
            specs = report.specs_loaded,
            notices = report.notices.len(),
            "应用状态加载完成"
        );

        let state = Self {
            plan_api: PlanApi::new(Arc::clone(&plans), Arc::clone(&specs)),
            import_api: ImportApi::new(Arc::new(ExcelParser), plans, specs),
            settings_api: SettingsApi::new(settings),
        };
        Ok((state, report))
    }

    /// 使用默认数据目录下的 JSON 文件存储装配应用
    pub async fn open_default() -> anyhow::Result<(Self, LoadReport)> {
        let port: Arc<dyn StoragePort> = Arc::new(JsonFileStorage::open_default()?);
        let (state, report) = Self::new(port).await?;
        Ok((state, report))
    }
}
