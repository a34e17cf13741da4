//! Annotates gene symbol lists with PharmGKB gene/drug/disease relationships.
//!
//! The reference tables (genes and relationships) are downloaded once as ZIP
//! archives and cached as TSV files; each input symbol is resolved to a
//! PharmGKB accession id and joined to its first relationship row.

pub mod annotator;
pub mod app;
pub mod archive;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod lines;
pub mod matcher;
pub mod output;
pub mod pharmgkb;
pub mod resolver;
pub mod table;
