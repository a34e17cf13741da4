use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::GeneRecord;
use crate::error::AnnotatorError;
use crate::table::Table;

pub const SYMBOL_COLUMN: &str = "Symbol";
pub const ACCESSION_COLUMN: &str = "PharmGKB Accession Id";

/// Gene symbol to PharmGKB accession id. Case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct GeneIndex {
    accessions: HashMap<String, String>,
}

impl GeneIndex {
    /// Builds the index in table order. A repeated symbol keeps the
    /// accession id of its last row.
    pub fn build(table: &Table) -> Result<Self, AnnotatorError> {
        let symbol_idx = table.column(SYMBOL_COLUMN)?;
        let accession_idx = table.column(ACCESSION_COLUMN)?;

        let mut accessions = HashMap::with_capacity(table.len());
        for row in table.rows() {
            let symbol = row.get(symbol_idx).unwrap_or_default();
            let accession = row.get(accession_idx).unwrap_or_default();
            if let Some(previous) = accessions.insert(symbol.to_string(), accession.to_string()) {
                if previous != accession {
                    warn!(
                        symbol,
                        previous = %previous,
                        accession,
                        "duplicate gene symbol, keeping last"
                    );
                }
            }
        }
        debug!(genes = accessions.len(), "built gene index");
        Ok(Self { accessions })
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = GeneRecord>,
    {
        let accessions = records
            .into_iter()
            .map(|record| (record.symbol, record.accession_id))
            .collect();
        Self { accessions }
    }

    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        self.accessions.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::domain::TableKind;

    fn genes(content: &str) -> Table {
        Table::parse(TableKind::Genes, content.as_bytes()).unwrap()
    }

    #[test]
    fn resolves_known_symbols() {
        let table = genes("PharmGKB Accession Id\tSymbol\nPA1\tBRCA1\nPA2\tTP53\n");
        let index = GeneIndex::build(&table).unwrap();
        assert_eq!(index.resolve("BRCA1"), Some("PA1"));
        assert_eq!(index.resolve("TP53"), Some("PA2"));
        assert_eq!(index.resolve("XYZ"), None);
    }

    #[test]
    fn resolution_is_case_sensitive() {
        let table = genes("PharmGKB Accession Id\tSymbol\nPA1\tBRCA1\n");
        let index = GeneIndex::build(&table).unwrap();
        assert_eq!(index.resolve("brca1"), None);
    }

    #[test]
    fn duplicate_symbol_keeps_last_row() {
        let table = genes("PharmGKB Accession Id\tSymbol\nPA1\tDUP\nPA9\tDUP\n");
        let index = GeneIndex::build(&table).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("DUP"), Some("PA9"));
    }

    #[test]
    fn requires_symbol_and_accession_columns() {
        let table = genes("Gene\tId\nBRCA1\tPA1\n");
        let err = GeneIndex::build(&table).unwrap_err();
        assert_matches!(err, AnnotatorError::MissingColumn { .. });
    }
}
