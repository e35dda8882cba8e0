// ==========================================
// 面粉厂生产计划系统 - 领域类型定义
// ==========================================
// 序列化格式: 与历史存储数据一致的英文标签
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 计划状态 (Plan Status)
// ==========================================
// 无强制状态机: 任意状态可直接改为任意其他状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl PlanStatus {
    /// 识别表格单元格中的状态标签
    ///
    /// 仅精确匹配四个已知标签; 其余值视为未识别, 由调用方回落到 Pending
    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim() {
            "Pending" => Some(PlanStatus::Pending),
            "In Progress" => Some(PlanStatus::InProgress),
            "Completed" => Some(PlanStatus::Completed),
            "Cancelled" => Some(PlanStatus::Cancelled),
            _ => None,
        }
    }
}

impl Default for PlanStatus {
    fn default() -> Self {
        PlanStatus::Pending
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::Pending => write!(f, "Pending"),
            PlanStatus::InProgress => write!(f, "In Progress"),
            PlanStatus::Completed => write!(f, "Completed"),
            PlanStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_known_values() {
        assert_eq!(PlanStatus::parse_label("Pending"), Some(PlanStatus::Pending));
        assert_eq!(
            PlanStatus::parse_label(" In Progress "),
            Some(PlanStatus::InProgress)
        );
        assert_eq!(
            PlanStatus::parse_label("Completed"),
            Some(PlanStatus::Completed)
        );
        assert_eq!(
            PlanStatus::parse_label("Cancelled"),
            Some(PlanStatus::Cancelled)
        );
    }

    #[test]
    fn test_parse_label_unknown_value() {
        assert_eq!(PlanStatus::parse_label("Done"), None);
        assert_eq!(PlanStatus::parse_label(""), None);
    }

    #[test]
    fn test_serde_labels_match_display() {
        let json = serde_json::to_string(&PlanStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: PlanStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlanStatus::InProgress);
    }
}
