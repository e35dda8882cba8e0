// ==========================================
// 面粉厂生产计划系统 - 内存存储后端
// ==========================================
// 用于测试与无持久化场景
// ==========================================

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::port::StoragePort;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

// ==========================================
// MemoryStorage - 内存键值存储
// ==========================================
#[derive(Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一条记录 (测试损坏数据恢复等场景)
    pub fn with_record(self, key: &str, payload: &str) -> Self {
        {
            let mut records = self.records.lock().expect("内存存储锁中毒");
            records.insert(key.to_string(), payload.to_string());
        }
        self
    }
}

#[async_trait]
impl StoragePort for MemoryStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let records = self
            .records
            .lock()
            .map_err(|e| StorageError::ReadError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(records.get(key).cloned())
    }

    async fn save(&self, key: &str, payload: &str) -> StorageResult<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StorageError::WriteError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        records.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
