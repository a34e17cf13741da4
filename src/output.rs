use std::io::{self, Write};

use crate::app::RunSummary;
use crate::fetcher::TableOrigin;

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Human,
    Json,
}

pub struct SummaryOutput;

impl SummaryOutput {
    pub fn print(summary: &RunSummary, mode: OutputMode) -> io::Result<()> {
        let mut stdout = io::stdout();
        match mode {
            OutputMode::Human => Self::write_human(&mut stdout, summary),
            OutputMode::Json => Self::write_json(&mut stdout, summary),
        }
    }

    pub fn write_json<W: Write>(mut writer: W, summary: &RunSummary) -> io::Result<()> {
        let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn write_human<W: Write>(mut writer: W, summary: &RunSummary) -> io::Result<()> {
        writeln!(
            writer,
            "annotated {} genes -> {} ({} resolved, {} with relationships, {} unknown)",
            summary.genes, summary.output, summary.resolved, summary.matched, summary.unresolved
        )?;
        writeln!(
            writer,
            "reference tables: genes from {}, relationships from {} ({})",
            origin_label(summary.genes_source),
            origin_label(summary.relationships_source),
            summary.cache_dir
        )?;
        Ok(())
    }
}

fn origin_label(origin: TableOrigin) -> &'static str {
    match origin {
        TableOrigin::Cache => "cache",
        TableOrigin::Download => "download",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            input: "genes.txt".to_string(),
            output: "out.csv".to_string(),
            genes: 3,
            resolved: 2,
            matched: 1,
            unresolved: 1,
            genes_source: TableOrigin::Cache,
            relationships_source: TableOrigin::Download,
            cache_dir: "cache".to_string(),
        }
    }

    #[test]
    fn json_summary_uses_lowercase_origins() {
        let mut buffer = Vec::new();
        SummaryOutput::write_json(&mut buffer, &summary()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["genes"], 3);
        assert_eq!(value["genes_source"], "cache");
        assert_eq!(value["relationships_source"], "download");
    }

    #[test]
    fn human_summary_mentions_counts() {
        let mut buffer = Vec::new();
        SummaryOutput::write_human(&mut buffer, &summary()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("annotated 3 genes -> out.csv"));
        assert!(text.contains("genes from cache, relationships from download"));
    }
}
