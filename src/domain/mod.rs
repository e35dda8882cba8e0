// ==========================================
// 面粉厂生产计划系统 - 领域层
// ==========================================

pub mod plan;
pub mod product_spec;
pub mod settings;
pub mod types;

pub use plan::{PlanDraft, ProductionPlan};
pub use product_spec::ProductSpecification;
pub use settings::{MillSettings, PackerSettings};
pub use types::PlanStatus;
