//! hourtally-core: total free-text work hours in spreadsheet timesheets
//!
//! A timesheet column holds durations such as `"1h 30min"`. This library reads
//! Excel/ODS workbooks, extracts that column from one or every sheet and sums
//! it into decimal hours.

pub mod aggregate;
pub mod config;
pub mod duration;
pub mod error;
pub mod reader;
pub mod report;
pub mod sheet;

use std::path::Path;
use tracing::info;

pub use aggregate::{SheetTotal, WorkbookTotal, sheet_total, workbook_total};
pub use config::TallyConfig;
pub use duration::{DurationTotal, parse_durations, total_hours};
pub use error::{ErrorKind, Result, TallyError};
pub use reader::{Sheet, Workbook, read_workbook};
pub use report::render_report;
pub use sheet::{HeaderRow, SheetView};

/// Config-driven totals interface
pub struct Tally {
    config: TallyConfig,
}

impl Tally {
    /// Create a tally with default configuration
    pub fn new() -> Self {
        Self::with_config(TallyConfig::default())
    }

    /// Create a tally with custom configuration
    pub fn with_config(config: TallyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    /// Read a workbook and total it, or only the configured sheet if one is set
    pub fn tally_file<P: AsRef<Path>>(&self, path: P) -> Result<WorkbookTotal> {
        let workbook = reader::read_workbook(path)?;

        match self.config.global.sheet.as_deref() {
            Some(name) => {
                let mut totals = WorkbookTotal::default();
                totals.push(self.tally_sheet(&workbook, name)?);
                Ok(totals)
            }
            None => self.tally_workbook(&workbook),
        }
    }

    /// Total every sheet in workbook order; the first failure aborts the run
    pub fn tally_workbook(&self, workbook: &Workbook) -> Result<WorkbookTotal> {
        let mut totals = WorkbookTotal::default();
        for name in workbook.sheet_names() {
            totals.push(self.tally_sheet(workbook, name)?);
        }
        info!(
            sheets = totals.sheets.len(),
            total_hours = totals.total_hours,
            "tallied workbook"
        );
        Ok(totals)
    }

    /// Total a single sheet using its configured column and header row
    pub fn tally_sheet(&self, workbook: &Workbook, name: &str) -> Result<SheetTotal> {
        let sheet = workbook.sheet(name)?;
        let mut view = SheetView::new(sheet);

        match self.config.column_names_for(name) {
            Some(names) => {
                view.assign_column_names(names.iter().cloned());
            }
            None => {
                view.configure(self.config.header_row_for(name)?)?;
            }
        }

        let total = sheet_total(&mut view, self.config.column_for(name))?;
        Ok(SheetTotal::new(name, total))
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}
