// ==========================================
// 面粉厂生产计划系统 - 核心库
// ==========================================
// 技术栈: Rust + JSON 键值存储
// 系统定位: 单用户计划管理工具 (产能数据仅供参考)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 存储层 - 持久化端口与后端
pub mod storage;

// 数据仓储层 - 集合所有权与持久化
pub mod repository;

// 引擎层 - 派生计算
pub mod engine;

// 导入层 - 外部表格数据
pub mod importer;

// API 层 - 业务接口
pub mod api;

// 应用层 - 启动装配
pub mod app;

// 配置 - 面粉类别等静态清单
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    MillSettings, PackerSettings, PlanDraft, PlanStatus, ProductSpecification, ProductionPlan,
};

// 引擎
pub use engine::{capacity_summary, derive_plan, CapacitySummary};

// 导入
pub use importer::{ExcelParser, RawRow, RowOutcome, RowSkip, SheetReader};

// 仓储
pub use repository::{LoadOutcome, PlanRepository, SettingsRepository, SpecificationRepository};

// 存储
pub use storage::{JsonFileStorage, MemoryStorage, StoragePort};

// API
pub use api::{
    DisabledSuggester, ImportApi, PlanApi, PlanInput, PlanNameSuggester, SettingsApi,
    SuggestionRequest,
};

// 应用
pub use app::{AppState, LoadReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "面粉厂生产计划系统";
