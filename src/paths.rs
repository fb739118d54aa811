use std::io;
use std::path::{Path, PathBuf};

/// Workbook read on every run.
pub const SOURCE_FILE_NAME: &str = "DetallePortafolio.xlsx";
/// JSON document written next to the workbook.
pub const DESTINATION_FILE_NAME: &str = "DetallePortafolio.json";

/// The fixed source/destination pair used by the command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterPaths {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConverterPaths {
    /// Both files inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            source: dir.join(SOURCE_FILE_NAME),
            destination: dir.join(DESTINATION_FILE_NAME),
        }
    }

    /// Both files in the directory holding the running executable.
    pub fn beside_executable() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable path has no parent directory: {:?}", exe),
            )
        })?;
        Ok(Self::in_dir(dir))
    }
}
