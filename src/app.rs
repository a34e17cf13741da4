use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::annotator::{AnnotationStats, annotate};
use crate::domain::TableKind;
use crate::error::AnnotatorError;
use crate::fetcher::{ReferenceFetcher, TableOrigin};
use crate::lines::{GeneList, write_annotations_file};
use crate::matcher::RelationshipIndex;
use crate::pharmgkb::PharmGkbClient;
use crate::resolver::GeneIndex;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: String,
    pub output: String,
    pub genes: usize,
    pub resolved: usize,
    pub matched: usize,
    pub unresolved: usize,
    pub genes_source: TableOrigin,
    pub relationships_source: TableOrigin,
    pub cache_dir: String,
}

pub struct App<C: PharmGkbClient> {
    fetcher: ReferenceFetcher<C>,
}

impl<C: PharmGkbClient> App<C> {
    pub fn new(fetcher: ReferenceFetcher<C>) -> Self {
        Self { fetcher }
    }

    /// Reads `input`, annotates every gene symbol against the PharmGKB
    /// reference tables and writes the CSV to `output`.
    pub fn annotate_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<RunSummary, AnnotatorError> {
        let config = self.fetcher.config();
        // Input is read first so a bad path fails before any download.
        let gene_list = GeneList::read(input, &config.comment_marker)?;
        info!(
            genes = gene_list.symbols.len(),
            comments = gene_list.comments.len(),
            "read gene list"
        );

        let genes = self.fetcher.fetch_table(TableKind::Genes)?;
        let relationships = self.fetcher.fetch_table(TableKind::Relationships)?;
        let gene_index = GeneIndex::build(&genes.table)?;
        let relationship_index = RelationshipIndex::build(&relationships.table)?;

        let rows = annotate(&gene_list.symbols, &gene_index, &relationship_index);
        write_annotations_file(output, &gene_list.comments, &rows)?;

        let stats = AnnotationStats::from_rows(&rows);
        info!(
            genes = stats.genes,
            resolved = stats.resolved,
            matched = stats.matched,
            output = %output.display(),
            "annotation written"
        );

        Ok(RunSummary {
            input: input.display().to_string(),
            output: output.display().to_string(),
            genes: stats.genes,
            resolved: stats.resolved,
            matched: stats.matched,
            unresolved: stats.unresolved,
            genes_source: genes.origin,
            relationships_source: relationships.origin,
            cache_dir: config.cache_dir.to_string(),
        })
    }
}
