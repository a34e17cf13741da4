use serde::Serialize;

use crate::domain::AnnotationRow;
use crate::matcher::RelationshipIndex;
use crate::resolver::GeneIndex;

/// Annotates each symbol in input order. Unknown symbols and accessions
/// without relationships are regular outcomes, not errors.
pub fn annotate<S: AsRef<str>>(
    symbols: &[S],
    genes: &GeneIndex,
    relationships: &RelationshipIndex,
) -> Vec<AnnotationRow> {
    symbols
        .iter()
        .map(|symbol| annotate_one(symbol.as_ref(), genes, relationships))
        .collect()
}

pub fn annotate_one(
    symbol: &str,
    genes: &GeneIndex,
    relationships: &RelationshipIndex,
) -> AnnotationRow {
    let Some(accession) = genes.resolve(symbol) else {
        return AnnotationRow::unresolved(symbol);
    };
    match relationships.find_first(accession) {
        Some(relationship) => AnnotationRow::matched(symbol, relationship.clone()),
        None => AnnotationRow::unmatched(symbol, accession),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationStats {
    pub genes: usize,
    pub resolved: usize,
    pub matched: usize,
    pub unresolved: usize,
}

impl AnnotationStats {
    pub fn from_rows(rows: &[AnnotationRow]) -> Self {
        let resolved = rows
            .iter()
            .filter(|row| row.accession_id().is_some())
            .count();
        let matched = rows
            .iter()
            .filter(|row| row.relationship().is_some())
            .count();
        Self {
            genes: rows.len(),
            resolved,
            matched,
            unresolved: rows.len() - resolved,
        }
    }
}
