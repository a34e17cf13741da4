use std::fs;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::domain::TableKind;
use crate::error::AnnotatorError;

pub const GENES_URL: &str = "https://api.pharmgkb.org/v1/download/file/data/genes.zip";
pub const RELATIONSHIPS_URL: &str =
    "https://api.pharmgkb.org/v1/download/file/data/relationships.zip";
pub const DEFAULT_CACHE_DIR_NAME: &str = "pharmgkb_cache";
pub const DEFAULT_COMMENT_MARKER: &str = "#";

/// On-disk config shape; every field is optional.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache_dir: Option<String>,
    #[serde(default)]
    pub comment_marker: Option<String>,
    #[serde(default)]
    pub genes: Option<TableSourceEntry>,
    #[serde(default)]
    pub relationships: Option<TableSourceEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TableSourceEntry {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub archive_entry: Option<String>,
    #[serde(default)]
    pub cache_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSource {
    pub url: String,
    pub archive_entry: String,
    pub cache_file: String,
}

impl TableSource {
    pub fn default_for(kind: TableKind) -> Self {
        let url = match kind {
            TableKind::Genes => GENES_URL,
            TableKind::Relationships => RELATIONSHIPS_URL,
        };
        Self {
            url: url.to_string(),
            archive_entry: format!("{kind}.tsv"),
            cache_file: format!("{kind}.tsv"),
        }
    }

    fn merge(kind: TableKind, entry: Option<TableSourceEntry>) -> Self {
        let defaults = Self::default_for(kind);
        let Some(entry) = entry else {
            return defaults;
        };
        Self {
            url: entry.url.unwrap_or(defaults.url),
            archive_entry: entry.archive_entry.unwrap_or(defaults.archive_entry),
            cache_file: entry.cache_file.unwrap_or(defaults.cache_file),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    pub cache_dir: Utf8PathBuf,
    pub comment_marker: String,
    pub genes: TableSource,
    pub relationships: TableSource,
}

impl AnnotatorConfig {
    pub fn with_cache_dir(cache_dir: Utf8PathBuf) -> Self {
        Self {
            cache_dir,
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
            genes: TableSource::default_for(TableKind::Genes),
            relationships: TableSource::default_for(TableKind::Relationships),
        }
    }

    pub fn source(&self, kind: TableKind) -> &TableSource {
        match kind {
            TableKind::Genes => &self.genes,
            TableKind::Relationships => &self.relationships,
        }
    }

    pub fn cache_path(&self, kind: TableKind) -> Utf8PathBuf {
        self.cache_dir.join(&self.source(kind).cache_file)
    }

    pub fn cache_metadata_path(&self, kind: TableKind) -> Utf8PathBuf {
        self.cache_dir.join(format!("{}.json", self.source(kind).cache_file))
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(path: Option<&str>) -> Result<AnnotatorConfig, AnnotatorError> {
        let config = match path {
            Some(path) => {
                let config_path = PathBuf::from(path);
                let content = fs::read_to_string(&config_path)
                    .map_err(|_| AnnotatorError::ConfigRead(config_path.clone()))?;
                serde_json::from_str(&content)
                    .map_err(|err| AnnotatorError::ConfigParse(err.to_string()))?
            }
            None => Config::default(),
        };
        Self::resolve_config(config)
    }

    pub fn resolve_config(config: Config) -> Result<AnnotatorConfig, AnnotatorError> {
        let cache_dir = match config.cache_dir {
            Some(dir) => Utf8PathBuf::from(dir),
            None => default_cache_dir()?,
        };
        let comment_marker = config
            .comment_marker
            .filter(|marker| !marker.is_empty())
            .unwrap_or_else(|| DEFAULT_COMMENT_MARKER.to_string());

        Ok(AnnotatorConfig {
            cache_dir,
            comment_marker,
            genes: TableSource::merge(TableKind::Genes, config.genes),
            relationships: TableSource::merge(TableKind::Relationships, config.relationships),
        })
    }
}

/// `pharmgkb_cache/` in the directory holding the running executable.
pub fn default_cache_dir() -> Result<Utf8PathBuf, AnnotatorError> {
    let exe = std::env::current_exe().map_err(|err| AnnotatorError::CacheDir(err.to_string()))?;
    let parent = exe
        .parent()
        .ok_or_else(|| AnnotatorError::CacheDir("executable has no parent directory".to_string()))?;
    Utf8PathBuf::from_path_buf(parent.join(DEFAULT_CACHE_DIR_NAME))
        .map_err(|_| AnnotatorError::CacheDir("cache path is not valid UTF-8".to_string()))
}
