// ==========================================
// 面粉厂生产计划系统 - 行映射与校验
// ==========================================
// 每行产出一个判别结果: 有效记录 或 结构化跳过原因,
// 调用方据此聚合成功/跳过计数, 不必重复校验逻辑
// ==========================================

use crate::domain::{PlanDraft, PlanStatus, ProductSpecification};
use crate::engine::default_plan_name;
use crate::importer::file_parser::RawRow;
use chrono::{DateTime, Duration, NaiveDate};
use serde::Serialize;

/// 期望的表格列头
pub mod headers {
    pub const PLAN_NAME: &str = "Plan Name";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const FLOUR_TYPE: &str = "Flour Type";
    pub const QUANTITY_KG: &str = "Quantity (kg)";
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";
    pub const STATUS: &str = "Status";
    pub const NOTES: &str = "Notes";
    pub const PACKAGE_WEIGHT_KG: &str = "Package Weight (kg)";
}

// ==========================================
// RowSkip - 行级跳过原因
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSkip {
    pub row: usize,     // 表格中的行号 (表头为第 1 行)
    pub field: String,  // 问题列头
    pub reason: String, // 跳过原因
}

// ==========================================
// RowOutcome - 行级判别结果
// ==========================================
#[derive(Debug)]
pub enum RowOutcome<T> {
    Valid(T),
    Skipped(RowSkip),
}

/// 映射生产计划行
///
/// 必填列: Product Name / Quantity (kg) / Start Date / End Date,
/// 任一不合规即整行跳过 (记录日志, 非致命)
pub fn map_plan_row(row_no: usize, row: &RawRow) -> RowOutcome<PlanDraft> {
    let product_name = field(row, headers::PRODUCT_NAME);
    if product_name.is_empty() {
        return skip(row_no, headers::PRODUCT_NAME, "产品名称为空");
    }

    let quantity_kg = match parse_positive_number(field(row, headers::QUANTITY_KG)) {
        Some(quantity) => quantity,
        None => {
            return skip(row_no, headers::QUANTITY_KG, "数量缺失或不是正数");
        }
    };

    let start_date = match parse_cell_date(field(row, headers::START_DATE)) {
        Some(date) => date,
        None => return skip(row_no, headers::START_DATE, "开始日期缺失或无法解析"),
    };
    let end_date = match parse_cell_date(field(row, headers::END_DATE)) {
        Some(date) => date,
        None => return skip(row_no, headers::END_DATE, "结束日期缺失或无法解析"),
    };

    // 可选列缺省值
    let plan_name = non_empty(field(row, headers::PLAN_NAME))
        .unwrap_or_else(|| default_plan_name(product_name));
    let flour_type = non_empty(field(row, headers::FLOUR_TYPE)).unwrap_or_else(|| "N/A".to_string());
    let status = PlanStatus::parse_label(field(row, headers::STATUS)).unwrap_or_default();
    let notes = field(row, headers::NOTES).to_string();

    RowOutcome::Valid(PlanDraft {
        id: None,
        plan_name: Some(plan_name),
        product_name: product_name.to_string(),
        flour_type: Some(flour_type),
        quantity_kg,
        start_date,
        end_date,
        status: Some(status),
        notes,
    })
}

/// 映射产品规格行
///
/// 必填列: Product Name / Package Weight (kg)
pub fn map_spec_row(row_no: usize, row: &RawRow) -> RowOutcome<ProductSpecification> {
    let product_name = field(row, headers::PRODUCT_NAME);
    if product_name.is_empty() {
        return skip(row_no, headers::PRODUCT_NAME, "产品名称为空");
    }

    let package_weight_kg = match parse_positive_number(field(row, headers::PACKAGE_WEIGHT_KG)) {
        Some(weight) => weight,
        None => {
            return skip(
                row_no,
                headers::PACKAGE_WEIGHT_KG,
                "单包重量缺失或不是正数",
            );
        }
    };

    RowOutcome::Valid(ProductSpecification::new(product_name, package_weight_kg))
}

/// 解析日期单元格
///
/// 两种编码:
/// - 数值: 表格序列日期 (相对 1899-12-30 的天数, 小数部分忽略)
/// - 文本: ISO 日期/日期时间, 以及 %Y/%m/%d 与 %m/%d/%Y
pub fn parse_cell_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(serial) = value.parse::<f64>() {
        return excel_serial_to_date(serial);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%m/%d/%Y") {
        return Some(date);
    }
    None
}

// 序列日期: 1899-12-30 基准兼容 1900 闰年缺陷
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial <= 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

fn parse_positive_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

fn field<'a>(row: &'a RawRow, key: &str) -> &'a str {
    row.get(key).map(|v| v.trim()).unwrap_or("")
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn skip<T>(row: usize, field: &str, reason: &str) -> RowOutcome<T> {
    tracing::warn!(row, field, reason, "导入行跳过");
    RowOutcome::Skipped(RowSkip {
        row,
        field: field.to_string(),
        reason: reason.to_string(),
    })
}
