// ==========================================
// 面粉厂生产计划系统 - 静态配置清单
// ==========================================
// 面粉类别清单: 表单下拉框与派生默认值共用
// 注意: 数据层不校验封闭集合,任意字符串均可接受
// ==========================================

/// 面粉类别清单(首项为派生默认值)
pub const FLOUR_TYPES: &[&str] = &[
    "All-Purpose",
    "Whole Wheat",
    "Bread Flour",
    "Cake Flour",
    "Rye Flour",
    "Spelt Flour",
    "Semolina",
    "Buckwheat Flour",
];

/// 默认面粉类别(清单首项)
pub fn default_flour_type() -> &'static str {
    FLOUR_TYPES.first().copied().unwrap_or("N/A")
}
