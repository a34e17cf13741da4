use std::io::{Cursor, Read};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::domain::TableKind;
use crate::error::AnnotatorError;

/// Reads the named entry out of an in-memory ZIP payload.
pub fn extract_entry(
    table: TableKind,
    payload: &[u8],
    entry: &str,
) -> Result<Vec<u8>, AnnotatorError> {
    let mut archive =
        ZipArchive::new(Cursor::new(payload)).map_err(|err| AnnotatorError::Archive {
            table,
            message: err.to_string(),
        })?;

    let mut file = match archive.by_name(entry) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => {
            return Err(AnnotatorError::MissingArchiveEntry {
                table,
                entry: entry.to_string(),
            });
        }
        Err(err) => {
            return Err(AnnotatorError::Archive {
                table,
                message: err.to_string(),
            });
        }
    };

    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|err| AnnotatorError::Archive {
            table,
            message: format!("read {entry}: {err}"),
        })?;
    Ok(content)
}
