use calamine::{open_workbook, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::table::Table;
use crate::value_conversion::{cell_to_value, dedupe_headers, header_name, is_blank_row};

use super::Parser;

pub struct XlsxParser {
    pub sheet_name: Option<String>,
}

impl XlsxParser {
    pub fn new() -> Self {
        Self { sheet_name: None }
    }

    pub fn with_sheet(sheet_name: String) -> Self {
        Self {
            sheet_name: Some(sheet_name),
        }
    }
}

impl Default for XlsxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for XlsxParser {
    /// Reads the whole sheet; the first row of the used range holds the headers
    /// and blank rows after it are skipped.
    fn read_table(&self, input_path: &Path) -> Result<Table> {
        let parse_error = |source| ConvertError::Parse {
            path: input_path.to_path_buf(),
            source,
        };

        let mut workbook: Xlsx<_> = open_workbook(input_path).map_err(parse_error)?;

        let sheet_name = match &self.sheet_name {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| ConvertError::EmptyWorkbook {
                    path: input_path.to_path_buf(),
                })?,
        };

        debug!(sheet = %sheet_name, "reading sheet");

        let range = workbook
            .worksheet_range(&sheet_name)
            .ok_or_else(|| ConvertError::SheetNotFound {
                path: input_path.to_path_buf(),
                sheet: sheet_name.clone(),
            })?
            .map_err(parse_error)?;

        let (height, width) = range.get_size();
        debug!(rows = height, columns = width, "sheet dimensions");

        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            None => {
                debug!("sheet is empty");
                return Ok(Table::default());
            }
        };

        let headers = dedupe_headers(
            (0..width)
                .map(|col| header_name(header_row.get(col), col))
                .collect(),
        );

        // Rows with no content are not data rows.
        let data: Vec<Vec<_>> = rows
            .filter(|row| !is_blank_row(row))
            .map(|row| row.iter().map(cell_to_value).collect())
            .collect();
        debug!(
            records = data.len(),
            skipped = height.saturating_sub(1 + data.len()),
            "data rows"
        );

        Ok(Table::new(headers, data))
    }
}
