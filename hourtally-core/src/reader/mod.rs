//! Excel/ODS file reader using calamine

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{Result, TallyError};

pub mod workbook;

pub use workbook::{Cell, CellValue, Sheet, Workbook};

/// Read a workbook from a file path
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TallyError::FileNotFound(path.to_path_buf()));
    }

    // Open workbook with calamine
    let mut excel: Sheets<_> = open_workbook_auto(path).map_err(|source| TallyError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = excel.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in &sheet_names {
        let range = match excel.worksheet_range(sheet_name) {
            Ok(range) => Some(range),
            Err(e) => {
                // Chart sheets and the like have no cell range
                warn!(sheet = %sheet_name, error = %e, "sheet has no readable cells");
                None
            }
        };
        let sheet = parse_sheet(sheet_name, range.as_ref());
        debug!(sheet = %sheet.name, cells = sheet.cells.len(), "read sheet");
        sheets.push(sheet);
    }

    info!(path = %path.display(), sheets = sheets.len(), "loaded workbook");

    Ok(Workbook {
        path: Some(path.to_path_buf()),
        sheets,
    })
}

fn parse_sheet(name: &str, range: Option<&Range<Data>>) -> Sheet {
    let mut cells = HashMap::new();

    let Some(range) = range else {
        return Sheet {
            name: name.to_string(),
            cells,
            used_range: None,
        };
    };

    // Range positions are relative to its start; store absolute ones
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let mut max_row = None;
    let mut max_col = None;

    for (rel_row, rel_col, data) in range.used_cells() {
        let value = parse_cell_value(data);
        if value.is_empty() {
            continue;
        }
        let row = start_row + rel_row as u32;
        let col = start_col + rel_col as u32;
        max_row = max_row.max(Some(row));
        max_col = max_col.max(Some(col));
        cells.insert((row, col), Cell { row, col, value });
    }

    Sheet {
        name: name.to_string(),
        cells,
        used_range: max_row.zip(max_col).map(|(r, c)| (r + 1, c + 1)),
    }
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
