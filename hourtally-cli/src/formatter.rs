//! Output formatters for workbook totals

use anyhow::Result;
use colored::*;
use hourtally_core::WorkbookTotal;
use hourtally_core::report::{SEPARATOR_WIDTH, format_hours};
use std::path::Path;

/// Print totals in human-readable format with colors
pub fn print_human(file_path: &Path, totals: &WorkbookTotal) {
    println!("{}", format!("Tallying: {}", file_path.display()).bold());
    println!();

    if totals.sheets.is_empty() {
        println!("{}", "No sheets found".yellow().bold());
    }

    for sheet in &totals.sheets {
        println!(
            "{} | {}",
            sheet.name.cyan().bold(),
            format_hours(sheet.total_hours).green()
        );
        println!("{}", "-".repeat(SEPARATOR_WIDTH).bright_black());
    }

    println!(
        "{} {}",
        "Total:".bold().underline(),
        format_hours(totals.total_hours).green().bold()
    );
}

/// Print the bare report
pub fn print_plain(totals: &WorkbookTotal) {
    print!("{}", totals);
}

/// Print totals in JSON format
pub fn print_json(file_path: &Path, totals: &WorkbookTotal) -> Result<()> {
    let output = serde_json::json!({
        "file": file_path.display().to_string(),
        "sheets": totals.sheets,
        "total_hours": totals.total_hours,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
