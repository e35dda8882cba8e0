// ==========================================
// 面粉厂生产计划系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls), 仅读取第一个工作表
// 输出: 每行一个 表头 → 单元格文本 的映射, 保持行序
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::path::Path;

/// 原始行: 表头 → 单元格文本
pub type RawRow = HashMap<String, String>;

// ==========================================
// SheetReader - 表格读取接口
// ==========================================
// 导入 API 依赖该接口, 测试时以固定行集替身注入
pub trait SheetReader: Send + Sync {
    fn read_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// ExcelParser - Excel 实现
// ==========================================
pub struct ExcelParser;

impl SheetReader for ExcelParser {
    fn read_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名 (不合规文件在解析前拒绝)
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开工作簿 (按容器格式自动识别)
        let mut workbook =
            open_workbook_auto(path).map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个工作表
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "Excel 文件无工作表".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell_to_string(cell).trim().to_string())
            .collect();

        // 读取数据行
        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = RawRow::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell_to_string(cell).trim().to_string();
                    row_map.insert(header.clone(), value);
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

/// 单元格 → 文本
///
/// 日期单元格输出序列值文本, 由行映射层统一按序列值/文本两种编码解析
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found() {
        let parser = ExcelParser;
        let result = parser.read_rows(Path::new("non_existent.xlsx"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension_rejected_before_parse() {
        // 内容无关紧要, 扩展名检查应先于解析
        let temp_file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .unwrap();

        let parser = ExcelParser;
        let result = parser.read_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_corrupt_container_fails_whole_parse() {
        // 扩展名合规但内容不是有效的 xlsx 容器
        let mut temp_file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .unwrap();
        use std::io::Write;
        temp_file.write_all(b"not an excel file").unwrap();

        let parser = ExcelParser;
        let result = parser.read_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_date_cell_renders_as_serial_text() {
        let cell = Data::Float(45292.0);
        assert_eq!(cell_to_string(&cell), "45292");
    }
}
