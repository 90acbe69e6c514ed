//! File I/O boundary
//!
//! One JSON document in, one JSON document out. Output is pretty-printed
//! with two-space indentation and ends with a newline.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::dto::{InputDocument, OutputDocument};
use crate::error::CliError;

fn io_error(path: &Path, source: std::io::Error) -> CliError {
    CliError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Reads one input document from a JSON file
pub fn read_input(path: impl AsRef<Path>) -> Result<InputDocument, CliError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| io_error(path, source))?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Writes one output document to a JSON file
pub fn write_output(path: impl AsRef<Path>, document: &OutputDocument) -> Result<(), CliError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| CliError::Json {
        path: path.display().to_string(),
        source,
    })?;
    writer
        .write_all(b"\n")
        .map_err(|source| io_error(path, source))?;
    writer.flush().map_err(|source| io_error(path, source))?;

    Ok(())
}
