//! Run report: per-file records plus aggregate counts.
//!
//! The report is an explicit accumulator owned by a single [`crate::engine::Engine::run`]
//! invocation and threaded through the traversal; it is never shared
//! between runs or stored globally.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::attribution::AttributionData;
use crate::classify::FileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Examined and eligible, but nothing written (dry run).
    Processed,
    Modified,
    Skipped,
    Error,
}

/// Outcome for one visited file. Finalized before being appended; never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileKind>,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<AttributionData>,
}

impl FileRecord {
    /// Demote a record to an error outcome, clearing any interim skip
    /// reason.
    pub(crate) fn into_error(mut self, message: String) -> Self {
        self.status = FileStatus::Error;
        self.reason = None;
        self.error = Some(message);
        self
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub processed: usize,
    pub modified: usize,
    pub skipped: usize,
    pub errors: usize,
    pub duration_secs: f64,
    pub files: Vec<FileRecord>,
    /// Where the report was persisted, if it was.
    #[serde(skip)]
    pub report_path: Option<PathBuf>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized record and bump the matching counters.
    pub fn push(&mut self, record: FileRecord) {
        self.processed += 1;
        match record.status {
            FileStatus::Modified => self.modified += 1,
            FileStatus::Skipped => self.skipped += 1,
            FileStatus::Error => self.errors += 1,
            FileStatus::Processed => {}
        }
        self.files.push(record);
    }

    pub fn modified_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Modified)
    }

    pub fn error_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| f.status == FileStatus::Error)
    }

    /// Files a dry run would have modified.
    pub fn would_modify(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Processed)
            .count()
    }

    /// Persist the report as pretty-printed JSON. The conventional file
    /// name is `authorship-framework-report-<unixTimestamp>.json` in the
    /// current working directory.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    pub fn report_file_name(unix_timestamp: i64) -> String {
        format!("authorship-framework-report-{}.json", unix_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skipped(path: &str, reason: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            extension: None,
            size: None,
            file_type: None,
            status: FileStatus::Skipped,
            reason: Some(reason.to_string()),
            error: None,
            attribution: None,
        }
    }

    #[test]
    fn test_counters_track_statuses() {
        let mut report = RunReport::new();
        report.push(skipped("a.bin", "No template for file type"));
        report.push(FileRecord {
            status: FileStatus::Error,
            error: Some("boom".to_string()),
            reason: None,
            ..skipped("b.py", "")
        });
        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(report.modified, 0);
        assert_eq!(report.files.len(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let mut report = RunReport::new();
        report.push(skipped("a.bin", "No template for file type"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["processed"], 1);
        assert_eq!(json["files"][0]["status"], "skipped");
        assert_eq!(json["files"][0]["reason"], "No template for file type");
        // absent optionals are omitted entirely
        assert!(json["files"][0].get("error").is_none());
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            RunReport::report_file_name(1700000000),
            "authorship-framework-report-1700000000.json"
        );
    }
}
