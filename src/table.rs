use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ConvertError, Result};

/// One output object: field name to cell value, in column order.
pub type Record = Map<String, Value>;

/// A worksheet read into memory: header names plus positional data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table, padding short rows with `null` and dropping cells
    /// beyond the last header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Maps every data row to a record keyed by the headers.
    pub fn into_document(self) -> Document {
        let headers = self.headers;
        let records = self
            .rows
            .into_iter()
            .map(|row| headers.iter().cloned().zip(row).collect::<Record>())
            .collect();
        Document { records }
    }
}

/// The ordered records of a table, serialized as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty JSON with 2-space indentation. Non-ASCII text is kept literal.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `output_path`, replacing any existing file.
    pub fn write_json(&self, output_path: &Path) -> Result<()> {
        let write_error = |source| ConvertError::Write {
            path: output_path.to_path_buf(),
            source,
        };

        let file = File::create(output_path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            if e.is_io() {
                write_error(e.into())
            } else {
                ConvertError::Serialize(e)
            }
        })?;
        writer.flush().map_err(write_error)?;

        Ok(())
    }
}
