// ==========================================
// 面粉厂生产计划系统 - 生产计划仓储
// ==========================================
// 职责: 有序计划集合的唯一事实来源, UI 数据均来自这里
// 红线: 每次变更后必须整体持久化, 外部观察不到部分写入状态
// ==========================================

use crate::domain::ProductionPlan;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::LoadOutcome;
use crate::storage::{keys, StoragePort};
use std::sync::{Arc, Mutex};

// ==========================================
// PlanRepository - 生产计划仓储
// ==========================================
pub struct PlanRepository {
    port: Arc<dyn StoragePort>,
    plans: Mutex<Vec<ProductionPlan>>,
}

impl PlanRepository {
    /// 创建空仓储 (启动时调用 load 读取已存数据)
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self {
            port,
            plans: Mutex::new(Vec::new()),
        }
    }

    /// 启动时加载已存计划集合
    ///
    /// - 记录不存在: 保持空集合
    /// - 记录损坏: 警告日志 + 空集合回退, recovered=true (非致命)
    pub async fn load(&self) -> RepositoryResult<LoadOutcome> {
        let payload = match self.port.load(keys::PRODUCTION_PLANS).await? {
            Some(payload) => payload,
            None => return Ok(LoadOutcome::default()),
        };

        match serde_json::from_str::<Vec<ProductionPlan>>(&payload) {
            Ok(plans) => {
                let loaded = plans.len();
                *self.lock()? = plans;
                Ok(LoadOutcome {
                    loaded,
                    recovered: false,
                })
            }
            Err(e) => {
                tracing::warn!(
                    key = keys::PRODUCTION_PLANS,
                    error = %e,
                    "已存计划数据无法解析, 回退为空集合"
                );
                Ok(LoadOutcome {
                    loaded: 0,
                    recovered: true,
                })
            }
        }
    }

    /// 返回当前集合快照 (保持插入顺序)
    pub fn list(&self) -> RepositoryResult<Vec<ProductionPlan>> {
        Ok(self.lock()?.clone())
    }

    /// 追加一条计划并持久化
    pub async fn add(&self, plan: ProductionPlan) -> RepositoryResult<()> {
        let snapshot = {
            let mut plans = self.lock()?;
            plans.push(plan);
            plans.clone()
        };
        self.persist(&snapshot).await
    }

    /// 按 ID 整体替换一条计划并持久化
    pub async fn replace(&self, id: &str, plan: ProductionPlan) -> RepositoryResult<()> {
        let snapshot = {
            let mut plans = self.lock()?;
            let slot = plans
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| RepositoryError::NotFound {
                    entity: "ProductionPlan".to_string(),
                    id: id.to_string(),
                })?;
            *slot = plan;
            plans.clone()
        };
        self.persist(&snapshot).await
    }

    /// 按 ID 删除一条计划并持久化
    ///
    /// 删除前的用户确认由展示层负责
    pub async fn remove(&self, id: &str) -> RepositoryResult<()> {
        let snapshot = {
            let mut plans = self.lock()?;
            let index = plans
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| RepositoryError::NotFound {
                    entity: "ProductionPlan".to_string(),
                    id: id.to_string(),
                })?;
            plans.remove(index);
            plans.clone()
        };
        self.persist(&snapshot).await
    }

    /// 整体替换集合并持久化 (计划文件导入使用, 不做合并)
    pub async fn replace_all(&self, plans: Vec<ProductionPlan>) -> RepositoryResult<()> {
        let snapshot = {
            let mut current = self.lock()?;
            *current = plans;
            current.clone()
        };
        self.persist(&snapshot).await
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Vec<ProductionPlan>>> {
        self.plans
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    async fn persist(&self, snapshot: &[ProductionPlan]) -> RepositoryResult<()> {
        let payload = serde_json::to_string(snapshot).map_err(|e| {
            RepositoryError::SerializationError {
                key: keys::PRODUCTION_PLANS.to_string(),
                message: e.to_string(),
            }
        })?;
        self.port.save(keys::PRODUCTION_PLANS, &payload).await?;
        Ok(())
    }
}
