//! Configuration system for timesheet totals

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, TallyError};
use crate::sheet::HeaderRow;

/// Column holding the durations when nothing else is configured
pub const DEFAULT_COLUMN: &str = "time";

/// Main tally configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(flatten)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub sheets: HashMap<String, SheetConfig>,
}

impl TallyConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TallyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TallyConfig =
            toml::from_str(&content).map_err(|source| TallyError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every configured header row is a non-negative integer
    pub fn validate(&self) -> Result<()> {
        if let Some(value) = &self.global.header_row {
            HeaderRow::try_from(value)?;
        }
        for sheet in self.sheets.values() {
            if let Some(value) = &sheet.header_row {
                HeaderRow::try_from(value)?;
            }
        }
        Ok(())
    }

    /// Override the global header row with an already validated one
    pub fn set_header_row(&mut self, row: HeaderRow) {
        self.global.header_row = Some(toml::Value::Integer(i64::from(row.index())));
    }

    /// Duration column with fallback chain: sheet -> global -> default
    pub fn column_for(&self, sheet_name: &str) -> &str {
        if let Some(column) = self.sheet(sheet_name).and_then(|s| s.column.as_deref()) {
            return column;
        }
        self.global.column.as_deref().unwrap_or(DEFAULT_COLUMN)
    }

    /// Header row with fallback chain: sheet -> global; `None` means row 0
    pub fn header_row_for(&self, sheet_name: &str) -> Result<Option<HeaderRow>> {
        let value = self
            .sheet(sheet_name)
            .and_then(|s| s.header_row.as_ref())
            .or(self.global.header_row.as_ref());
        value.map(HeaderRow::try_from).transpose()
    }

    /// Explicit column names with fallback chain: sheet -> global
    pub fn column_names_for(&self, sheet_name: &str) -> Option<&[String]> {
        self.sheet(sheet_name)
            .and_then(|s| s.column_names.as_deref())
            .or(self.global.column_names.as_deref())
    }

    fn sheet(&self, sheet_name: &str) -> Option<&SheetConfig> {
        let sheet = self.sheets.get(sheet_name);
        if sheet.is_none() {
            debug!(sheet = sheet_name, "no sheet-specific config, using global");
        }
        sheet
    }
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Workbook to read when none is given on the command line
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Only tally this sheet instead of the whole workbook
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub column: Option<String>,
    /// Kept raw so a non-integer value is reported as an invalid header row
    #[serde(default)]
    pub header_row: Option<toml::Value>,
    /// Fixed column names; when set no header row is read
    #[serde(default)]
    pub column_names: Option<Vec<String>>,
}

/// Sheet-specific configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub header_row: Option<toml::Value>,
    #[serde(default)]
    pub column_names: Option<Vec<String>>,
}
