// ==========================================
// 面粉厂生产计划系统 - JSON 文件存储后端
// ==========================================
// 每条记录一个文件: <数据目录>/<key>.json
// ==========================================

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::port::StoragePort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// 默认数据目录: <系统数据目录>/flour-mill-planner
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flour-mill-planner")
}

// ==========================================
// JsonFileStorage - 文件存储后端
// ==========================================
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// 创建存储后端, 目录不存在时自动创建
    pub fn new(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::CreateDirError {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    /// 使用默认数据目录创建存储后端
    pub fn open_default() -> StorageResult<Self> {
        Self::new(default_data_dir())
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StoragePort for JsonFileStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let payload = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::ReadError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(Some(payload))
    }

    async fn save(&self, key: &str, payload: &str) -> StorageResult<()> {
        let path = self.record_path(key);
        tokio::fs::write(&path, payload)
            .await
            .map_err(|e| StorageError::WriteError {
                key: key.to_string(),
                message: e.to_string(),
            })
    }
}
