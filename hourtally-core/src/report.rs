//! Plain-text report of workbook totals

use std::fmt;

use crate::aggregate::WorkbookTotal;

/// Width of the separator printed after each sheet line
pub const SEPARATOR_WIDTH: usize = 40;

/// Format an hour total with at least one decimal place (`2.0`, `3.5`, `4.25`)
pub fn format_hours(hours: f64) -> String {
    format!("{:?}", hours)
}

/// Render totals as `"<name> | <total>"` lines with separators and a final
/// `"Total: <grand>"` line
pub fn render_report(totals: &WorkbookTotal) -> String {
    totals.to_string()
}

impl fmt::Display for WorkbookTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sheet in &self.sheets {
            writeln!(f, "{} | {}", sheet.name, format_hours(sheet.total_hours))?;
            writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }
        writeln!(f, "Total: {}", format_hours(self.total_hours))
    }
}
