// ==========================================
// 面粉厂生产计划系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::storage::StorageError;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据访问错误 =====
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("存储访问失败: {0}")]
    Storage(#[from] StorageError),

    #[error("序列化失败 (key={key}): {message}")]
    SerializationError { key: String, message: String },

    #[error("锁获取失败: {0}")]
    LockError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
