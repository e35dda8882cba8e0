// ==========================================
// 面粉厂生产计划系统 - 持久化端口
// ==========================================
// 仓储层通过该端口显式保存, 不做隐式后台同步
// ==========================================

use crate::storage::error::StorageResult;
use async_trait::async_trait;

/// 持久化端口
///
/// # 契约
/// - 每条记录以名字为键, 值为自描述文本 (JSON)
/// - load: 记录不存在返回 Ok(None); 内容是否可解析由调用方处理
/// - save: 整体覆写, 返回即视为完成 (单线程执行保证读写顺序)
#[async_trait]
pub trait StoragePort: Send + Sync {
    async fn load(&self, key: &str) -> StorageResult<Option<String>>;

    async fn save(&self, key: &str, payload: &str) -> StorageResult<()>;
}
