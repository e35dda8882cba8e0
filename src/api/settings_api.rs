// ==========================================
// 面粉厂生产计划系统 - 产能参数 API
// ==========================================
// 保存为整体覆盖; 产能汇总为读取时计算
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::{MillSettings, PackerSettings};
use crate::engine::{capacity_summary, CapacitySummary};
use crate::repository::SettingsRepository;
use std::sync::Arc;

// ==========================================
// SettingsApi - 产能参数 API
// ==========================================
pub struct SettingsApi {
    settings: Arc<SettingsRepository>,
}

impl SettingsApi {
    pub fn new(settings: Arc<SettingsRepository>) -> Self {
        Self { settings }
    }

    pub fn mill_settings(&self) -> ApiResult<MillSettings> {
        Ok(self.settings.mill()?)
    }

    pub fn packer_settings(&self) -> ApiResult<PackerSettings> {
        Ok(self.settings.packer()?)
    }

    pub async fn save_mill_settings(&self, settings: MillSettings) -> ApiResult<()> {
        self.settings.save_mill(settings).await?;
        tracing::info!("磨机参数已保存");
        Ok(())
    }

    pub async fn save_packer_settings(&self, settings: PackerSettings) -> ApiResult<()> {
        self.settings.save_packer(settings).await?;
        tracing::info!("包装机参数已保存");
        Ok(())
    }

    /// 当前设置下的日产能参考
    pub fn capacity_summary(&self) -> ApiResult<CapacitySummary> {
        let mill = self.settings.mill()?;
        let packer = self.settings.packer()?;
        Ok(capacity_summary(&mill, &packer))
    }
}
