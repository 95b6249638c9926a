//! Workbook data structures

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Result, TallyError};

/// Represents a complete workbook, immutable once loaded
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    /// Source file, `None` for workbooks built in memory
    pub path: Option<PathBuf>,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Build an in-memory workbook from sheets in declaration order
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { path: None, sheets }
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get a sheet by name, failing if it does not exist
    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.get_sheet(name)
            .ok_or_else(|| TallyError::SheetNotFound(name.to_string()))
    }

    /// Get all sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Represents a worksheet
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    /// Non-empty cells keyed by absolute `(row, col)`
    pub cells: HashMap<(u32, u32), Cell>,
    pub used_range: Option<(u32, u32)>, // (rows, cols)
}

impl Sheet {
    /// Build a sheet from rows of values, starting at row 0, column 0
    pub fn from_rows<R, C>(name: impl Into<String>, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        let mut cells = HashMap::new();
        let mut rows_used = 0;
        let mut cols_used = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let row = row as u32;
            rows_used = row + 1;
            for (col, value) in values.into_iter().enumerate() {
                let col = col as u32;
                let value = value.into();
                if value.is_empty() {
                    continue;
                }
                cols_used = cols_used.max(col + 1);
                cells.insert((row, col), Cell { row, col, value });
            }
        }

        Sheet {
            name: name.into(),
            cells,
            used_range: (rows_used > 0 && cols_used > 0).then_some((rows_used, cols_used)),
        }
    }

    /// Get a cell at the given position
    pub fn get_cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Number of rows up to and including the last used one
    pub fn row_count(&self) -> u32 {
        self.used_range.map_or(0, |(rows, _)| rows)
    }

    /// Number of columns up to and including the last used one
    pub fn col_count(&self) -> u32 {
        self.used_range.map_or(0, |(_, cols)| cols)
    }

    /// Cell values of one row rendered as text, empty cells as `""`
    pub fn row_text(&self, row: u32) -> Vec<String> {
        (0..self.col_count())
            .map(|col| self.text_at(row, col))
            .collect()
    }

    /// Cell value at `(row, col)` rendered as text
    pub fn text_at(&self, row: u32, col: u32) -> String {
        self.get_cell(row, col)
            .map(|c| c.value.to_text())
            .unwrap_or_default()
    }
}

/// Represents a single cell
#[derive(Debug, Clone)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub value: CellValue,
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Render the value the way a column extraction sees it
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => b.to_string(),
            CellValue::Error(e) => e.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}
