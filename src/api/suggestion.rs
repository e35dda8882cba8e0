// ==========================================
// 面粉厂生产计划系统 - 名称建议端口
// ==========================================
// 外部协作方: 由外部服务根据产品/数量/类别给出简短计划名称
// 未配置凭证时功能不可用, 触发控件应禁用并提示配置错误
// ==========================================

use async_trait::async_trait;
use thiserror::Error;

/// 名称建议错误类型
#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("API_KEY 未配置, 名称建议功能不可用")]
    MissingCredential,

    #[error("API Key 无效, 请检查配置")]
    InvalidCredential,

    #[error("名称建议服务调用失败: {0}")]
    ServiceFailure(String),
}

/// 名称建议请求
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub product_name: String,
    pub quantity_kg: f64,
    pub flour_type: Option<String>,
}

// ==========================================
// PlanNameSuggester - 名称建议接口
// ==========================================
#[async_trait]
pub trait PlanNameSuggester: Send + Sync {
    /// 是否可用 (展示层据此禁用触发控件)
    fn is_available(&self) -> bool;

    /// 请求一个简短的计划名称建议
    async fn suggest_plan_name(&self, request: &SuggestionRequest)
        -> Result<String, SuggestionError>;
}

// ==========================================
// DisabledSuggester - 未配置凭证时的实现
// ==========================================
pub struct DisabledSuggester;

#[async_trait]
impl PlanNameSuggester for DisabledSuggester {
    fn is_available(&self) -> bool {
        false
    }

    async fn suggest_plan_name(
        &self,
        _request: &SuggestionRequest,
    ) -> Result<String, SuggestionError> {
        Err(SuggestionError::MissingCredential)
    }
}
