pub mod xlsx;

use std::path::Path;

use crate::error::Result;
use crate::table::Table;

/// Common trait for all table readers
pub trait Parser {
    /// Read the input file into a header + rows table
    fn read_table(&self, input_path: &Path) -> Result<Table>;
}
