// ==========================================
// 面粉厂生产计划系统 - 存储层
// ==========================================
// 持久化模型: 四条命名文本记录, 启动时读取一次,
// 对应内存值每次变更后整体覆写
// ==========================================

pub mod error;
pub mod json_file;
pub mod memory;
pub mod port;

pub use error::{StorageError, StorageResult};
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use port::StoragePort;

/// 存储记录键名
///
/// 与历史版本的浏览器本地存储键保持一致
pub mod keys {
    pub const PRODUCTION_PLANS: &str = "productionPlans";
    pub const PRODUCT_SPECS: &str = "productSpecs";
    pub const MILL_SETTINGS: &str = "millSettings";
    pub const PACKER_SETTINGS: &str = "packerSettings";
}
