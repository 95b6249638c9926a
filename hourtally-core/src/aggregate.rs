//! Per-sheet and whole-workbook hour totals

use serde::Serialize;
use tracing::debug;

use crate::duration::total_hours;
use crate::error::Result;
use crate::reader::Workbook;
use crate::sheet::{HeaderRow, SheetView};

/// Total hours of one sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetTotal {
    pub name: String,
    pub total_hours: f64,
}

impl SheetTotal {
    pub fn new(name: impl Into<String>, total_hours: f64) -> Self {
        Self {
            name: name.into(),
            total_hours,
        }
    }
}

/// Totals of every sheet, in workbook order, plus their sum
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkbookTotal {
    pub sheets: Vec<SheetTotal>,
    pub total_hours: f64,
}

impl WorkbookTotal {
    /// Append a sheet total and add it to the grand total
    pub fn push(&mut self, sheet: SheetTotal) {
        self.total_hours += sheet.total_hours;
        self.sheets.push(sheet);
    }
}

/// Total the durations under `column_name`, naming columns from row 0 if the
/// view has not been configured yet
pub fn sheet_total(view: &mut SheetView<'_>, column_name: &str) -> Result<f64> {
    if !view.is_configured() {
        view.configure(None)?;
    }
    let values = view.column_values(column_name)?;
    let total = total_hours(&values);
    debug!(sheet = view.name(), column = column_name, rows = values.len(), total, "sheet total");
    Ok(total)
}

/// Total every sheet of the workbook using the same column and header row.
///
/// The first sheet that fails aborts the whole run.
pub fn workbook_total(
    workbook: &Workbook,
    column_name: &str,
    header_row: Option<HeaderRow>,
) -> Result<WorkbookTotal> {
    let mut totals = WorkbookTotal::default();

    for sheet in &workbook.sheets {
        let mut view = SheetView::new(sheet);
        view.configure(header_row)?;
        let total = sheet_total(&mut view, column_name)?;
        totals.push(SheetTotal::new(&sheet.name, total));
    }

    Ok(totals)
}
