//! Error types for loading workbooks and totalling hours

use std::path::PathBuf;
use thiserror::Error;

/// Result type for hourtally operations
pub type Result<T> = std::result::Result<T, TallyError>;

/// Broad category of a [`TallyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file, sheet, or column asked for does not exist
    ResourceNotFound,
    /// The caller broke a precondition (bad header row, unconfigured view)
    PreconditionViolation,
    /// The file or configuration exists but could not be read
    Unreadable,
}

/// Errors that can occur while totalling a timesheet
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error("Column '{column}' not found in sheet '{sheet}'")]
    ColumnNotFound { sheet: String, column: String },

    #[error("\"header_row\" expects a non-negative integer, got {found}")]
    InvalidHeaderRow { found: String },

    #[error("Sheet '{0}' has no column names assigned; configure a header row first")]
    HeadersNotAssigned(String),

    #[error("Header row {row} is outside sheet '{sheet}'")]
    HeaderRowOutOfRange { sheet: String, row: u32 },

    #[error("No workbook path given on the command line or in the configuration")]
    MissingInput,

    #[error("Failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl TallyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TallyError::FileNotFound(_)
            | TallyError::SheetNotFound(_)
            | TallyError::ColumnNotFound { .. } => ErrorKind::ResourceNotFound,
            TallyError::InvalidHeaderRow { .. }
            | TallyError::HeadersNotAssigned(_)
            | TallyError::HeaderRowOutOfRange { .. }
            | TallyError::MissingInput => ErrorKind::PreconditionViolation,
            TallyError::Open { .. } | TallyError::ConfigRead { .. } | TallyError::ConfigParse { .. } => {
                ErrorKind::Unreadable
            }
        }
    }
}
