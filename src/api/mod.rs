// ==========================================
// 面粉厂生产计划系统 - API 层
// ==========================================
// 职责: 封装业务操作, 供展示层调用
// 红线: 不含渲染逻辑; 删除确认等交互由展示层负责
// ==========================================

pub mod error;
pub mod import_api;
pub mod plan_api;
pub mod settings_api;
pub mod suggestion;

pub use error::{ApiError, ApiResult};
pub use import_api::{ImportApi, PlanImportResponse, SpecImportResponse};
pub use plan_api::{PlanApi, PlanInput};
pub use settings_api::SettingsApi;
pub use suggestion::{DisabledSuggester, PlanNameSuggester, SuggestionError, SuggestionRequest};
