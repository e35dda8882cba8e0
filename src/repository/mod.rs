// ==========================================
// 面粉厂生产计划系统 - 数据仓储层
// ==========================================
// 仓储对象持有集合本体, 注入持久化端口;
// 每个变更方法都以显式 await 的保存结束
// ==========================================

pub mod error;
pub mod plan_repo;
pub mod settings_repo;
pub mod spec_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use plan_repo::PlanRepository;
pub use settings_repo::SettingsRepository;
pub use spec_repo::SpecificationRepository;

// ==========================================
// LoadOutcome - 启动加载结果
// ==========================================
/// 启动时单条记录的加载结果
///
/// recovered=true 表示已存数据无法解析, 已回落到空集合/默认值,
/// 应用层据此向用户展示可关闭的提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOutcome {
    /// 成功加载的条目数
    pub loaded: usize,
    /// 是否发生损坏回退
    pub recovered: bool,
}
