// ==========================================
// 面粉厂生产计划系统 - API 层错误类型
// ==========================================
// 所有面向用户的错误均可关闭且不阻塞, 不终止应用
// ==========================================

use crate::api::suggestion::SuggestionError;
use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 表单校验错误 (字段级, 内联展示) =====
    #[error("字段校验失败 ({field}): {message}")]
    Validation { field: String, message: String },

    // ===== 导入错误 =====
    // 扩展名不合规/文件缺失: 解析前拒绝, 内联提示
    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    // 容器级解码失败: 整体导入失败, 提示文件名与期望列, 不触碰存储
    #[error("文件 {file} 处理失败: 请确认其为有效的 Excel 文件且包含必需列（{columns}）。详情: {detail}")]
    ImportFileFailed {
        file: String,
        columns: String,
        detail: String,
    },

    // ===== 数据访问错误 =====
    #[error("数据访问失败: {0}")]
    Repository(#[from] RepositoryError),

    // ===== 外部服务错误 =====
    #[error("名称建议失败: {0}")]
    Suggestion(#[from] SuggestionError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
