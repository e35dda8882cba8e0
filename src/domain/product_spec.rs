// ==========================================
// 面粉厂生产计划系统 - 产品规格领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductSpecification - 产品包装规格
// ==========================================
// product_name 为关联键; 导入不去重, 查找时首个匹配生效
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecification {
    pub product_name: String,   // 产品名称 (关联键)
    pub package_weight_kg: f64, // 单包重量 (kg, 解析时要求为正数)
}

impl ProductSpecification {
    pub fn new(product_name: impl Into<String>, package_weight_kg: f64) -> Self {
        Self {
            product_name: product_name.into(),
            package_weight_kg,
        }
    }
}
