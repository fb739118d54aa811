use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while converting a workbook to JSON.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source workbook does not exist.
    #[error("Source file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The source could not be opened or read as an xlsx workbook.
    #[error("Failed to parse workbook {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// The workbook contains no worksheets.
    #[error("No sheets found in workbook {}", path.display())]
    EmptyWorkbook { path: PathBuf },

    #[error("Sheet '{sheet}' not found in workbook {}", path.display())]
    SheetNotFound { path: PathBuf, sheet: String },

    /// The destination could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    /// True for every failure that happens while reading the source table.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::EmptyWorkbook { .. } | Self::SheetNotFound { .. }
        )
    }

    /// True for every failure that happens while producing the destination file.
    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Serialize(_))
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
