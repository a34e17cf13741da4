use std::collections::HashMap;
use std::collections::hash_map::Entry;

use csv::StringRecord;
use tracing::debug;

use crate::domain::RelationshipRecord;
use crate::error::AnnotatorError;
use crate::table::Table;

pub const SOURCE_ACCESSION_COLUMN: &str = "Entity1_id";
pub const TARGET_NAME_COLUMN: &str = "Entity2_name";
pub const TARGET_TYPE_COLUMN: &str = "Entity2_type";
pub const ASSOCIATION_COLUMN: &str = "Association";
pub const PUBMED_IDS_COLUMN: &str = "PMIDs";

#[derive(Debug, Clone, Copy)]
struct RelationshipColumns {
    source: usize,
    target_name: usize,
    target_type: usize,
    association: usize,
    pubmed_ids: usize,
}

impl RelationshipColumns {
    fn locate(table: &Table) -> Result<Self, AnnotatorError> {
        Ok(Self {
            source: table.column(SOURCE_ACCESSION_COLUMN)?,
            target_name: table.column(TARGET_NAME_COLUMN)?,
            target_type: table.column(TARGET_TYPE_COLUMN)?,
            association: table.column(ASSOCIATION_COLUMN)?,
            pubmed_ids: table.column(PUBMED_IDS_COLUMN)?,
        })
    }

    fn record(&self, row: &StringRecord) -> RelationshipRecord {
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        RelationshipRecord {
            source_accession_id: field(self.source),
            target_name: field(self.target_name),
            target_type: field(self.target_type),
            association: field(self.association),
            pubmed_ids: field(self.pubmed_ids),
        }
    }
}

/// Linear scan for the first row, in table order, whose source accession
/// equals `accession_id`.
pub fn find_first(
    table: &Table,
    accession_id: &str,
) -> Result<Option<RelationshipRecord>, AnnotatorError> {
    let columns = RelationshipColumns::locate(table)?;
    Ok(table
        .rows()
        .iter()
        .find(|row| row.get(columns.source) == Some(accession_id))
        .map(|row| columns.record(row)))
}

/// Accession id to its first relationship row, built in one pass.
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex {
    first: HashMap<String, RelationshipRecord>,
}

impl RelationshipIndex {
    pub fn build(table: &Table) -> Result<Self, AnnotatorError> {
        let columns = RelationshipColumns::locate(table)?;
        let mut first = HashMap::new();
        for row in table.rows() {
            let source = row.get(columns.source).unwrap_or_default();
            if let Entry::Vacant(slot) = first.entry(source.to_string()) {
                slot.insert(columns.record(row));
            }
        }
        debug!(
            rows = table.len(),
            accessions = first.len(),
            "built relationship index"
        );
        Ok(Self { first })
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RelationshipRecord>,
    {
        let mut first = HashMap::new();
        for record in records {
            first
                .entry(record.source_accession_id.clone())
                .or_insert(record);
        }
        Self { first }
    }

    pub fn find_first(&self, accession_id: &str) -> Option<&RelationshipRecord> {
        self.first.get(accession_id)
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}
