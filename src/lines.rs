use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::domain::AnnotationRow;
use crate::error::AnnotatorError;

pub const OUTPUT_HEADER: [&str; 6] = [
    "Gene_Symbol",
    "PharmGKB_id",
    "Feature",
    "Feature_type",
    "Status",
    "PMIDs",
];

/// An input gene list: pass-through comment lines plus gene symbols, both in
/// file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneList {
    pub comments: Vec<String>,
    pub symbols: Vec<String>,
}

impl GeneList {
    pub fn parse<R: BufRead>(reader: R, comment_marker: &str) -> io::Result<Self> {
        let mut list = GeneList::default();
        for line in reader.lines() {
            let line = line?;
            if line.starts_with(comment_marker) {
                list.comments.push(line);
                continue;
            }
            let symbol = line.trim();
            if !symbol.is_empty() {
                list.symbols.push(symbol.to_string());
            }
        }
        Ok(list)
    }

    pub fn read(path: &Path, comment_marker: &str) -> Result<Self, AnnotatorError> {
        let input_error = |err: io::Error| AnnotatorError::InputRead {
            path: path.to_path_buf(),
            message: err.to_string(),
        };
        let file = File::open(path).map_err(input_error)?;
        Self::parse(BufReader::new(file), comment_marker).map_err(input_error)
    }
}

/// Writes comment lines verbatim, then the header, then one CSV line per row.
pub fn write_annotations<W: Write>(
    mut writer: W,
    comments: &[String],
    rows: &[AnnotationRow],
) -> io::Result<()> {
    for comment in comments {
        writer.write_all(comment.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(OUTPUT_HEADER)?;
    for row in rows {
        csv_writer.write_record(row.fields())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_annotations_file(
    path: &Path,
    comments: &[String],
    rows: &[AnnotationRow],
) -> Result<(), AnnotatorError> {
    let output_error = |err: io::Error| AnnotatorError::OutputWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let file = File::create(path).map_err(output_error)?;
    write_annotations(BufWriter::new(file), comments, rows).map_err(output_error)
}
