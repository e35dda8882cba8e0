// ==========================================
// 面粉厂生产计划系统 - 产能参数仓储
// ==========================================
// 两个配置单例: 磨机参数 / 包装机参数
// 首次运行取默认值, 保存为整体覆盖, 不做字段级合并
// ==========================================

use crate::domain::{MillSettings, PackerSettings};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::LoadOutcome;
use crate::storage::{keys, StoragePort};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};

// ==========================================
// SettingsRepository - 产能参数仓储
// ==========================================
pub struct SettingsRepository {
    port: Arc<dyn StoragePort>,
    mill: Mutex<MillSettings>,
    packer: Mutex<PackerSettings>,
}

impl SettingsRepository {
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self {
            port,
            mill: Mutex::new(MillSettings::default()),
            packer: Mutex::new(PackerSettings::default()),
        }
    }

    /// 启动时加载两条设置记录
    ///
    /// loaded 统计存在且可解析的记录数; 任一记录损坏时 recovered=true,
    /// 对应单例回落为默认值 (非致命)
    pub async fn load(&self) -> RepositoryResult<LoadOutcome> {
        let (mill, mill_outcome) =
            Self::load_record::<MillSettings>(&*self.port, keys::MILL_SETTINGS).await?;
        if let Some(mill) = mill {
            *self.lock_mill()? = mill;
        }

        let (packer, packer_outcome) =
            Self::load_record::<PackerSettings>(&*self.port, keys::PACKER_SETTINGS).await?;
        if let Some(packer) = packer {
            *self.lock_packer()? = packer;
        }

        Ok(LoadOutcome {
            loaded: mill_outcome.loaded + packer_outcome.loaded,
            recovered: mill_outcome.recovered || packer_outcome.recovered,
        })
    }

    /// 当前磨机参数
    pub fn mill(&self) -> RepositoryResult<MillSettings> {
        Ok(self.lock_mill()?.clone())
    }

    /// 当前包装机参数
    pub fn packer(&self) -> RepositoryResult<PackerSettings> {
        Ok(self.lock_packer()?.clone())
    }

    /// 整体覆盖磨机参数并持久化
    pub async fn save_mill(&self, settings: MillSettings) -> RepositoryResult<()> {
        let snapshot = {
            let mut mill = self.lock_mill()?;
            *mill = settings;
            mill.clone()
        };
        self.persist(keys::MILL_SETTINGS, &snapshot).await
    }

    /// 整体覆盖包装机参数并持久化
    pub async fn save_packer(&self, settings: PackerSettings) -> RepositoryResult<()> {
        let snapshot = {
            let mut packer = self.lock_packer()?;
            *packer = settings;
            packer.clone()
        };
        self.persist(keys::PACKER_SETTINGS, &snapshot).await
    }

    async fn load_record<T: DeserializeOwned>(
        port: &dyn StoragePort,
        key: &str,
    ) -> RepositoryResult<(Option<T>, LoadOutcome)> {
        let payload = match port.load(key).await? {
            Some(payload) => payload,
            None => return Ok((None, LoadOutcome::default())),
        };

        match serde_json::from_str::<T>(&payload) {
            Ok(value) => Ok((
                Some(value),
                LoadOutcome {
                    loaded: 1,
                    recovered: false,
                },
            )),
            Err(e) => {
                tracing::warn!(key, error = %e, "已存设置数据无法解析, 回退为默认值");
                Ok((
                    None,
                    LoadOutcome {
                        loaded: 0,
                        recovered: true,
                    },
                ))
            }
        }
    }

    fn lock_mill(&self) -> RepositoryResult<std::sync::MutexGuard<'_, MillSettings>> {
        self.mill
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn lock_packer(&self) -> RepositoryResult<std::sync::MutexGuard<'_, PackerSettings>> {
        self.packer
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    async fn persist<T: Serialize>(&self, key: &str, value: &T) -> RepositoryResult<()> {
        let payload =
            serde_json::to_string(value).map_err(|e| RepositoryError::SerializationError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        self.port.save(key, &payload).await?;
        Ok(())
    }
}
