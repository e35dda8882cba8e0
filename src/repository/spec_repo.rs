// ==========================================
// 面粉厂生产计划系统 - 产品规格仓储
// ==========================================
// 职责: 产品名称 → 包装规格的有序集合
// 注意: 导入不去重, 查找按行序取首个匹配;
//       规格变更后的计划级联重算由 API 层编排
// ==========================================

use crate::domain::ProductSpecification;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::LoadOutcome;
use crate::storage::{keys, StoragePort};
use std::sync::{Arc, Mutex};

// ==========================================
// SpecificationRepository - 产品规格仓储
// ==========================================
pub struct SpecificationRepository {
    port: Arc<dyn StoragePort>,
    specs: Mutex<Vec<ProductSpecification>>,
}

impl SpecificationRepository {
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self {
            port,
            specs: Mutex::new(Vec::new()),
        }
    }

    /// 启动时加载已存规格集合, 损坏时回退为空集合 (非致命)
    pub async fn load(&self) -> RepositoryResult<LoadOutcome> {
        let payload = match self.port.load(keys::PRODUCT_SPECS).await? {
            Some(payload) => payload,
            None => return Ok(LoadOutcome::default()),
        };

        match serde_json::from_str::<Vec<ProductSpecification>>(&payload) {
            Ok(specs) => {
                let loaded = specs.len();
                *self.lock()? = specs;
                Ok(LoadOutcome {
                    loaded,
                    recovered: false,
                })
            }
            Err(e) => {
                tracing::warn!(
                    key = keys::PRODUCT_SPECS,
                    error = %e,
                    "已存规格数据无法解析, 回退为空集合"
                );
                Ok(LoadOutcome {
                    loaded: 0,
                    recovered: true,
                })
            }
        }
    }

    /// 返回当前集合快照 (保持导入行序)
    pub fn list(&self) -> RepositoryResult<Vec<ProductSpecification>> {
        Ok(self.lock()?.clone())
    }

    /// 按产品名称精确查找, 重复时取首个匹配
    pub fn find_by_product(&self, product_name: &str) -> RepositoryResult<Option<ProductSpecification>> {
        Ok(self
            .lock()?
            .iter()
            .find(|s| s.product_name == product_name)
            .cloned())
    }

    /// 整体替换集合并持久化 (规格文件导入使用)
    pub async fn replace_all(&self, specs: Vec<ProductSpecification>) -> RepositoryResult<()> {
        let snapshot = {
            let mut current = self.lock()?;
            *current = specs;
            current.clone()
        };
        self.persist(&snapshot).await
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Vec<ProductSpecification>>> {
        self.specs
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    async fn persist(&self, snapshot: &[ProductSpecification]) -> RepositoryResult<()> {
        let payload = serde_json::to_string(snapshot).map_err(|e| {
            RepositoryError::SerializationError {
                key: keys::PRODUCT_SPECS.to_string(),
                message: e.to_string(),
            }
        })?;
        self.port.save(keys::PRODUCT_SPECS, &payload).await?;
        Ok(())
    }
}
