//! Report rendering for the payroll engine.
//!
//! Number formatting, per-employee pay descriptions, and the weekly report
//! that ties them together.

mod describe;
mod format;
mod weekly;

pub use describe::describe_pay;
pub use format::{format_currency, format_hours, format_percent};
pub use weekly::{BLOCK_SEPARATOR, REPORT_HEADER, ReportEntry, WeeklyReport};
