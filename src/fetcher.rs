use std::fs;
use std::io::BufReader;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tempfile::Builder;
use tracing::{debug, info};

use crate::archive::extract_entry;
use crate::config::AnnotatorConfig;
use crate::domain::TableKind;
use crate::error::AnnotatorError;
use crate::pharmgkb::PharmGkbClient;
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableOrigin {
    Cache,
    Download,
}

#[derive(Debug, Clone)]
pub struct FetchedTable {
    pub table: Table,
    pub origin: TableOrigin,
}

/// Sidecar written next to each cache file. Informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub table: TableKind,
    pub source_url: String,
    pub archive_entry: String,
    pub rows: usize,
    pub downloaded_at: String,
    pub tool: String,
}

pub struct ReferenceFetcher<C: PharmGkbClient> {
    config: AnnotatorConfig,
    client: C,
    refresh: bool,
}

impl<C: PharmGkbClient> ReferenceFetcher<C> {
    pub fn new(config: AnnotatorConfig, client: C) -> Self {
        Self {
            config,
            client,
            refresh: false,
        }
    }

    /// Ignore existing cache files and download every table again.
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    pub fn get_table(&self, kind: TableKind) -> Result<Table, AnnotatorError> {
        self.fetch_table(kind).map(|fetched| fetched.table)
    }

    pub fn fetch_table(&self, kind: TableKind) -> Result<FetchedTable, AnnotatorError> {
        let cache_path = self.config.cache_path(kind);
        if !self.refresh && cache_path.as_std_path().exists() {
            info!(table = %kind, path = %cache_path, "using cached reference table");
            let table = read_cached(kind, &cache_path)?;
            debug!(table = %kind, rows = table.len(), "parsed cached table");
            return Ok(FetchedTable {
                table,
                origin: TableOrigin::Cache,
            });
        }

        let source = self.config.source(kind);
        info!(table = %kind, url = %source.url, "downloading reference table");
        let payload = self.client.download(&source.url)?;
        debug!(table = %kind, bytes = payload.len(), "downloaded archive");

        let content = extract_entry(kind, &payload, &source.archive_entry)?;
        let table = Table::parse(kind, content.as_slice())?;
        debug!(table = %kind, rows = table.len(), "parsed downloaded table");

        self.write_cache(kind, &table)?;
        Ok(FetchedTable {
            table,
            origin: TableOrigin::Download,
        })
    }

    fn write_cache(&self, kind: TableKind, table: &Table) -> Result<(), AnnotatorError> {
        let cache_dir = &self.config.cache_dir;
        fs::create_dir_all(cache_dir.as_std_path())
            .map_err(|err| AnnotatorError::Filesystem(format!("create {cache_dir}: {err}")))?;

        let cache_path = self.config.cache_path(kind);
        let mut temp = Builder::new()
            .prefix(".pgx-annotate")
            .tempfile_in(cache_dir.as_std_path())
            .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
        table.write_to(&mut temp)?;
        if cache_path.as_std_path().exists() {
            fs::remove_file(cache_path.as_std_path())
                .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
        }
        temp.persist(cache_path.as_std_path())
            .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
        info!(table = %kind, path = %cache_path, "cached reference table");

        let source = self.config.source(kind);
        let metadata = CacheMetadata {
            table: kind,
            source_url: source.url.clone(),
            archive_entry: source.archive_entry.clone(),
            rows: table.len(),
            downloaded_at: iso_timestamp(),
            tool: format!("pgx-annotate/{}", env!("CARGO_PKG_VERSION")),
        };
        let content = serde_json::to_vec_pretty(&metadata)
            .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
        write_bytes_atomic(&self.config.cache_metadata_path(kind), &content)
    }
}

fn read_cached(kind: TableKind, path: &Utf8Path) -> Result<Table, AnnotatorError> {
    let file = fs::File::open(path.as_std_path())
        .map_err(|err| AnnotatorError::Filesystem(format!("open {path}: {err}")))?;
    Table::parse(kind, BufReader::new(file))
}

fn write_bytes_atomic(path: &Utf8Path, content: &[u8]) -> Result<(), AnnotatorError> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(tmp_path.as_std_path(), content)
        .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
    fs::rename(tmp_path.as_std_path(), path.as_std_path())
        .map_err(|err| AnnotatorError::Filesystem(err.to_string()))?;
    Ok(())
}

fn iso_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
