use std::fmt;

use serde::{Deserialize, Serialize};

/// The two PharmGKB reference tables the annotator joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Genes,
    Relationships,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Genes, TableKind::Relationships];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Genes => "genes",
            TableKind::Relationships => "relationships",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneRecord {
    pub symbol: String,
    pub accession_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipRecord {
    pub source_accession_id: String,
    pub target_name: String,
    pub target_type: String,
    pub association: String,
    pub pubmed_ids: String,
}

/// One output line. A row without an accession id never carries a
/// relationship; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRow {
    gene_symbol: String,
    accession_id: Option<String>,
    relationship: Option<RelationshipRecord>,
}

impl AnnotationRow {
    pub fn unresolved(gene_symbol: impl Into<String>) -> Self {
        Self {
            gene_symbol: gene_symbol.into(),
            accession_id: None,
            relationship: None,
        }
    }

    pub fn unmatched(gene_symbol: impl Into<String>, accession_id: impl Into<String>) -> Self {
        Self {
            gene_symbol: gene_symbol.into(),
            accession_id: Some(accession_id.into()),
            relationship: None,
        }
    }

    pub fn matched(gene_symbol: impl Into<String>, relationship: RelationshipRecord) -> Self {
        Self {
            gene_symbol: gene_symbol.into(),
            accession_id: Some(relationship.source_accession_id.clone()),
            relationship: Some(relationship),
        }
    }

    pub fn gene_symbol(&self) -> &str {
        &self.gene_symbol
    }

    pub fn accession_id(&self) -> Option<&str> {
        self.accession_id.as_deref()
    }

    pub fn relationship(&self) -> Option<&RelationshipRecord> {
        self.relationship.as_ref()
    }

    /// Output fields in header order; absent values are empty strings.
    pub fn fields(&self) -> [&str; 6] {
        let relationship = self.relationship.as_ref();
        [
            self.gene_symbol.as_str(),
            self.accession_id.as_deref().unwrap_or(""),
            relationship.map(|r| r.target_name.as_str()).unwrap_or(""),
            relationship.map(|r| r.target_type.as_str()).unwrap_or(""),
            relationship.map(|r| r.association.as_str()).unwrap_or(""),
            relationship.map(|r| r.pubmed_ids.as_str()).unwrap_or(""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relationship() -> RelationshipRecord {
        RelationshipRecord {
            source_accession_id: "PA2".to_string(),
            target_name: "Drug".to_string(),
            target_type: "disease".to_string(),
            association: "associated".to_string(),
            pubmed_ids: "PMID1".to_string(),
        }
    }

    #[test]
    fn unresolved_row_has_only_symbol() {
        let row = AnnotationRow::unresolved("XYZ");
        assert_eq!(row.fields(), ["XYZ", "", "", "", "", ""]);
        assert!(row.relationship().is_none());
    }

    #[test]
    fn unmatched_row_keeps_accession() {
        let row = AnnotationRow::unmatched("BRCA1", "PA1");
        assert_eq!(row.fields(), ["BRCA1", "PA1", "", "", "", ""]);
    }

    #[test]
    fn matched_row_takes_accession_from_relationship() {
        let row = AnnotationRow::matched("TP53", relationship());
        assert_eq!(row.accession_id(), Some("PA2"));
        assert_eq!(
            row.fields(),
            ["TP53", "PA2", "Drug", "disease", "associated", "PMID1"]
        );
    }

    #[test]
    fn table_kind_names() {
        assert_eq!(TableKind::Genes.to_string(), "genes");
        assert_eq!(TableKind::Relationships.as_str(), "relationships");
    }
}
