//! Header-addressed views over a worksheet

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TallyError};
use crate::reader::Sheet;

/// Validated index of the row whose values become column names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeaderRow(u32);

impl HeaderRow {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HeaderRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HeaderRow {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl FromStr for HeaderRow {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(HeaderRow)
            .map_err(|_| TallyError::InvalidHeaderRow {
                found: format!("{s:?}"),
            })
    }
}

impl TryFrom<&toml::Value> for HeaderRow {
    type Error = TallyError;

    fn try_from(value: &toml::Value) -> Result<Self> {
        match value {
            toml::Value::Integer(i) => u32::try_from(*i).map(HeaderRow).map_err(|_| {
                TallyError::InvalidHeaderRow {
                    found: i.to_string(),
                }
            }),
            other => Err(TallyError::InvalidHeaderRow {
                found: format!("'{}' ({})", other, other.type_str()),
            }),
        }
    }
}

/// How the column names of a view were assigned
#[derive(Debug, Clone, PartialEq, Eq)]
enum Columns {
    Unconfigured,
    /// Names taken from a row; data starts on the row below
    FromRow { row: u32, names: Vec<String> },
    /// Names supplied by the caller; every row is data
    Explicit(Vec<String>),
}

/// A view over one sheet that addresses columns by name.
///
/// Views borrow the sheet immutably, so any number of them can be derived
/// from the same workbook and reconfigured without affecting each other.
#[derive(Debug, Clone)]
pub struct SheetView<'a> {
    sheet: &'a Sheet,
    columns: Columns,
}

impl<'a> SheetView<'a> {
    /// A fresh, unconfigured view
    pub fn new(sheet: &'a Sheet) -> Self {
        Self {
            sheet,
            columns: Columns::Unconfigured,
        }
    }

    pub fn name(&self) -> &str {
        &self.sheet.name
    }

    pub fn is_configured(&self) -> bool {
        self.columns != Columns::Unconfigured
    }

    /// Name columns by the values of `header_row` (row 0 when `None`)
    pub fn configure(&mut self, header_row: Option<HeaderRow>) -> Result<&mut Self> {
        let row = header_row.unwrap_or_default().index();
        // An empty sheet has no rows at all; row 0 still names zero columns
        if row > 0 && row >= self.sheet.row_count() {
            return Err(TallyError::HeaderRowOutOfRange {
                sheet: self.sheet.name.clone(),
                row,
            });
        }
        let names = self.sheet.row_text(row);
        self.columns = Columns::FromRow { row, names };
        Ok(self)
    }

    /// Name columns explicitly, left to right
    pub fn assign_column_names<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Columns::Explicit(names.into_iter().map(Into::into).collect());
        self
    }

    /// Assigned column names, if any
    pub fn column_names(&self) -> Option<&[String]> {
        match &self.columns {
            Columns::Unconfigured => None,
            Columns::FromRow { names, .. } | Columns::Explicit(names) => Some(names),
        }
    }

    /// Values under `column_name` for every data row, in row order
    pub fn column_values(&self, column_name: &str) -> Result<Vec<String>> {
        let (names, first_data_row) = match &self.columns {
            Columns::Unconfigured => {
                return Err(TallyError::HeadersNotAssigned(self.sheet.name.clone()));
            }
            Columns::FromRow { row, names } => (names, row + 1),
            Columns::Explicit(names) => (names, 0),
        };

        let col = names
            .iter()
            .position(|n| n == column_name)
            .ok_or_else(|| TallyError::ColumnNotFound {
                sheet: self.sheet.name.clone(),
                column: column_name.to_string(),
            })? as u32;

        Ok((first_data_row..self.sheet.row_count())
            .map(|row| self.sheet.text_at(row, col))
            .collect())
    }
}
