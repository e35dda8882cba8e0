// ==========================================
// 面粉厂生产计划系统 - 导入层
// ==========================================
// 职责: 表格文件 → 原始行 → 类型化记录/跳过原因
// 红线: 行级问题只缩小结果集, 不使整体导入失败;
//       仅容器级解码失败才让整体导入失败
// ==========================================

pub mod error;
pub mod file_parser;
pub mod row_mapper;

pub use error::{ImportError, ImportResult};
pub use file_parser::{ExcelParser, RawRow, SheetReader};
pub use row_mapper::{headers, map_plan_row, map_spec_row, parse_cell_date, RowOutcome, RowSkip};
