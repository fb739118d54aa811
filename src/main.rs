use anyhow::{Context, Result};
use clap::Parser;

use portafolio_converter::logging::init_cli_logger;
use portafolio_converter::{convert, ConverterPaths, SOURCE_FILE_NAME};

/// Takes no arguments: the workbook and the JSON output always live next to
/// the executable.
#[derive(clap::Parser, Debug)]
#[command(
    name = "portafolio-converter",
    version,
    about = "Converts DetallePortafolio.xlsx (next to this program) into DetallePortafolio.json"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    init_cli_logger();

    let paths = ConverterPaths::beside_executable()
        .context("Failed to locate the directory of the running program")?;

    if !paths.source.is_file() {
        println!("ERROR: No existe el archivo: {}", paths.source.display());
        println!(
            "Coloca '{}' junto a este programa y vuélvelo a ejecutar.",
            SOURCE_FILE_NAME
        );
        std::process::exit(1);
    }

    convert(&paths.source, &paths.destination).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            paths.source.display(),
            paths.destination.display()
        )
    })?;

    println!(
        "Convertido: '{}' → '{}'",
        paths.source.display(),
        paths.destination.display()
    );

    Ok(())
}
