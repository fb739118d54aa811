pub mod error;
pub mod logging;
pub mod parsers;
pub mod paths;
pub mod table;
pub mod value_conversion;

// Re-export commonly used items for convenience
pub use error::{ConvertError, Result};
pub use parsers::{xlsx::XlsxParser, Parser};
pub use paths::{ConverterPaths, DESTINATION_FILE_NAME, SOURCE_FILE_NAME};
pub use table::{Document, Record, Table};
pub use value_conversion::cell_to_value;

use std::path::Path;
use tracing::{debug, info};

/// Converts the first sheet of `source_path` to a JSON array at `destination_path`.
///
/// Returns the number of records written. The source is checked for existence
/// before anything is parsed, and nothing is written if parsing fails.
pub fn convert(source_path: &Path, destination_path: &Path) -> Result<usize> {
    if !source_path.is_file() {
        return Err(ConvertError::FileNotFound {
            path: source_path.to_path_buf(),
        });
    }

    let table = XlsxParser::new().read_table(source_path)?;
    debug!(
        columns = table.headers().len(),
        rows = table.rows().len(),
        "table read"
    );

    let document = table.into_document();
    document.write_json(destination_path)?;

    info!(
        records = document.len(),
        destination = %destination_path.display(),
        "conversion complete"
    );

    Ok(document.len())
}
