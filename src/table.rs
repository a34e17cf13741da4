use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::domain::TableKind;
use crate::error::AnnotatorError;

/// A parsed tab-separated reference table: one header row plus data rows,
/// kept in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    kind: TableKind,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn parse<R: Read>(kind: TableKind, reader: R) -> Result<Self, AnnotatorError> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| parse_error(kind, err))?
            .clone();
        if headers.is_empty() {
            return Err(AnnotatorError::TableParse {
                table: kind,
                message: "missing header row".to_string(),
            });
        }

        let mut rows = Vec::new();
        let mut row = StringRecord::new();
        while csv_reader
            .read_record(&mut row)
            .map_err(|err| parse_error(kind, err))?
        {
            rows.push(row.clone());
        }

        Ok(Self {
            kind,
            headers,
            rows,
        })
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), AnnotatorError> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);
        csv_writer
            .write_record(&self.headers)
            .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
        for row in &self.rows {
            csv_writer
                .write_record(row)
                .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
        }
        csv_writer
            .flush()
            .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
        Ok(())
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Result<usize, AnnotatorError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| AnnotatorError::MissingColumn {
                table: self.kind,
                column: name.to_string(),
            })
    }
}

fn parse_error(kind: TableKind, err: csv::Error) -> AnnotatorError {
    AnnotatorError::TableParse {
        table: kind,
        message: err.to_string(),
    }
}
