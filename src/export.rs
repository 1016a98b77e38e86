//! Result export: structured JSON and flat CSV.
//!
//! JSON preserves full nested link-match detail and can be re-parsed into
//! the same records. CSV is a one-row-per-page summary (URL, title,
//! relevant-link count) that intentionally discards per-link detail.

use std::path::Path;

use crate::error::{ReconError, Result};
use crate::types::PageRecord;

/// Supported export formats, detected from the output path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON array of full page records.
    Json,
    /// Flat per-page summary table.
    Csv,
}

impl ExportFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Write the result collection to `path` in the format its extension names.
///
/// # Errors
///
/// Returns [`ReconError::Export`] for an unrecognised extension or a
/// filesystem failure.
pub fn export_records(records: &[PageRecord], path: &Path) -> Result<()> {
    let format = ExportFormat::from_path(path).ok_or_else(|| {
        ReconError::Export(format!(
            "unsupported output format: {} (use .json or .csv)",
            path.display()
        ))
    })?;

    let body = match format {
        ExportFormat::Json => to_json(records)?,
        ExportFormat::Csv => to_csv(records),
    };

    std::fs::write(path, body)
        .map_err(|e| ReconError::Export(format!("failed to write {}: {e}", path.display())))
}

/// Serialise records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ReconError::Export`] if serialisation fails.
pub fn to_json(records: &[PageRecord]) -> Result<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| ReconError::Export(format!("JSON serialisation failed: {e}")))
}

/// Render records as a CSV summary with one row per page.
pub fn to_csv(records: &[PageRecord]) -> String {
    let mut out = String::from("URL,Title,Relevant Links Count\n");
    for record in records {
        out.push_str(&csv_field(&record.url));
        out.push(',');
        out.push_str(&csv_field(record.title.as_deref().unwrap_or("")));
        out.push(',');
        out.push_str(&record.links.len().to_string());
        out.push('\n');
    }
    out
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinkMatch, MatchReason};
    use std::path::PathBuf;

    fn sample_records() -> Vec<PageRecord> {
        vec![
            PageRecord {
                url: "https://example.com/a".into(),
                title: Some("Example, with comma".into()),
                links: vec![
                    LinkMatch {
                        url: "https://example.com/a/1".into(),
                        text: "first".into(),
                        reason: MatchReason::UrlContainsQuery,
                    },
                    LinkMatch {
                        url: "https://example.com/a/2".into(),
                        text: "second".into(),
                        reason: MatchReason::FuzzyTextMatch,
                    },
                ],
            },
            PageRecord::failed("https://unreachable.example"),
        ]
    }

    #[test]
    fn format_detected_from_extension() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out.CSV")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(ExportFormat::from_path(&PathBuf::from("out.txt")), None);
        assert_eq!(ExportFormat::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let records = sample_records();
        let json = to_json(&records).expect("serialize");
        let decoded: Vec<PageRecord> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, records);
        assert_eq!(decoded[0].links[0].text, "first");
        assert_eq!(decoded[0].links[1].reason, MatchReason::FuzzyTextMatch);
        assert!(decoded[1].title.is_none());
    }

    #[test]
    fn csv_has_header_and_one_row_per_page() {
        let csv = to_csv(&sample_records());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "URL,Title,Relevant Links Count");
        assert_eq!(lines[1], "https://example.com/a,\"Example, with comma\",2");
        assert_eq!(lines[2], "https://unreachable.example,,0");
    }

    #[test]
    fn csv_escapes_embedded_quotes() {
        let records = vec![PageRecord {
            url: "https://example.com".into(),
            title: Some("He said \"hi\"".into()),
            links: vec![],
        }];
        let csv = to_csv(&records);
        assert!(csv.contains("\"He said \"\"hi\"\"\""));
    }

    #[test]
    fn export_writes_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.json");
        export_records(&sample_records(), &path).expect("export");

        let body = std::fs::read_to_string(&path).expect("read back");
        let decoded: Vec<PageRecord> = serde_json::from_str(&body).expect("parse");
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn export_writes_csv_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.csv");
        export_records(&sample_records(), &path).expect("export");

        let body = std::fs::read_to_string(&path).expect("read back");
        assert!(body.starts_with("URL,Title,Relevant Links Count\n"));
    }

    #[test]
    fn export_rejects_unknown_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.xml");
        let err = export_records(&sample_records(), &path).unwrap_err();
        assert!(err.to_string().contains("unsupported output format"));
    }

    #[test]
    fn empty_collection_exports_header_only_csv() {
        let csv = to_csv(&[]);
        assert_eq!(csv, "URL,Title,Relevant Links Count\n");
    }
}
