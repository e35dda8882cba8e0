// ==========================================
// 面粉厂生产计划系统 - 存储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("存储目录创建失败 ({path}): {message}")]
    CreateDirError { path: String, message: String },

    #[error("存储记录读取失败 (key={key}): {message}")]
    ReadError { key: String, message: String },

    #[error("存储记录写入失败 (key={key}): {message}")]
    WriteError { key: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type StorageResult<T> = Result<T, StorageError>;
