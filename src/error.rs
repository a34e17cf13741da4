use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::TableKind;

#[derive(Debug, Error, Diagnostic)]
pub enum AnnotatorError {
    #[error("failed to read input gene list at {path}: {message}")]
    InputRead { path: PathBuf, message: String },

    #[error("failed to write annotation output at {path}: {message}")]
    OutputWrite { path: PathBuf, message: String },

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("unable to resolve default cache directory: {0}")]
    CacheDir(String),

    #[error("PharmGKB request failed: {0}")]
    Http(String),

    #[error("PharmGKB returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("invalid {table} archive: {message}")]
    Archive { table: TableKind, message: String },

    #[error("{table} archive does not contain {entry}")]
    #[diagnostic(help("check the archive_entry configured for this table"))]
    MissingArchiveEntry { table: TableKind, entry: String },

    #[error("malformed {table} table: {message}")]
    TableParse { table: TableKind, message: String },

    #[error("{table} table has no column named {column:?}")]
    #[diagnostic(help("the upstream schema may have changed; try --refresh"))]
    MissingColumn { table: TableKind, column: String },

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
