//! The attribution engine: recursive traversal, per-file classification,
//! header insertion, and report accumulation.
//!
//! The engine assumes exclusive access to the tree for the duration of a
//! run. Reads and writes are whole-file; atomicity of the in-place rewrite
//! is the caller's concern.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::attribution::{self, AttributionData};
use crate::classify::{Category, FileKind};
use crate::config::EngineConfig;
use crate::error::LafError;
use crate::report::{FileRecord, FileStatus, RunReport};
use crate::template::TemplateStore;

pub const SKIP_NO_TEMPLATE_TYPE: &str = "No template for file type";
pub const SKIP_TOO_LARGE: &str = "File too large";
pub const SKIP_BINARY: &str = "Binary file or encoding issue";
pub const SKIP_ALREADY_ATTRIBUTED: &str = "Attribution already exists";
pub const SKIP_TEMPLATE_NOT_FOUND: &str = "Template not found";

pub struct Engine {
    config: EngineConfig,
    templates: TemplateStore,
}

impl Engine {
    /// Construct an engine, validating the configuration. An empty primary
    /// author is rejected here rather than silently defaulted.
    pub fn new(config: EngineConfig) -> Result<Self, LafError> {
        config.validate()?;
        let templates = TemplateStore::new(&config.template_dir);
        Ok(Self { config, templates })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process a whole tree and persist the run report.
    ///
    /// An unreadable root is run-fatal; everything below it degrades to
    /// per-file records or logged warnings.
    pub fn run(&self, root: &Path) -> Result<RunReport, LafError> {
        let root = std::fs::canonicalize(root).map_err(|e| LafError::RootPath {
            path: root.display().to_string(),
            source: e,
        })?;
        std::fs::read_dir(&root).map_err(|e| LafError::RootPath {
            path: root.display().to_string(),
            source: e,
        })?;

        tracing::info!("starting attribution run at {}", root.display());
        let started = Instant::now();

        let mut report = RunReport::new();
        let mut visited = HashSet::new();
        self.process_directory(&root, &mut report, &mut visited);
        report.duration_secs = started.elapsed().as_secs_f64();

        if !self.config.dry_run {
            let name = RunReport::report_file_name(chrono::Utc::now().timestamp());
            let path = PathBuf::from(&name);
            match report.save(&path) {
                Ok(()) => report.report_path = Some(path),
                Err(e) => tracing::warn!("failed to write report '{}': {}", name, e),
            }
        }

        tracing::info!(
            "run finished: {} processed, {} modified, {} skipped, {} errors",
            report.processed,
            report.modified,
            report.skipped,
            report.errors
        );
        Ok(report)
    }

    /// Recursively visit directory entries in filesystem enumeration order.
    ///
    /// Excluded directory names are pruned before descent, so nothing under
    /// them ever produces a record. The visited set of canonical paths
    /// guards against symlink cycles.
    pub fn process_directory(
        &self,
        dir: &Path,
        report: &mut RunReport,
        visited: &mut HashSet<PathBuf>,
    ) {
        let canonical = match std::fs::canonicalize(dir) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("cannot resolve directory '{}': {}", dir.display(), e);
                return;
            }
        };
        if !visited.insert(canonical) {
            tracing::debug!("already visited '{}', skipping", dir.display());
            return;
        }

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("permission denied or unreadable '{}': {}", dir.display(), e);
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if path.is_dir() {
                if !self.config.exclude_dirs.contains(&name) {
                    self.process_directory(&path, report, visited);
                }
            } else if path.is_file() && !self.config.exclude_files.contains(&name) {
                let record = self.process_file(&path);
                tracing::debug!(
                    "{}: {:?}{}",
                    record.path,
                    record.status,
                    record
                        .reason
                        .as_deref()
                        .map(|r| format!(" ({})", r))
                        .unwrap_or_default()
                );
                report.push(record);
            }
        }
    }

    /// The per-file state machine: classify, bound, read, test, render,
    /// compose, write. Every outcome is a record; nothing here aborts the
    /// traversal.
    pub fn process_file(&self, path: &Path) -> FileRecord {
        let mut record = FileRecord {
            path: display_relative(path),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().to_ascii_lowercase()),
            size: None,
            file_type: None,
            status: FileStatus::Skipped,
            reason: None,
            error: None,
            attribution: None,
        };

        let kind = match FileKind::from_path(path) {
            Some(kind) => kind,
            None => {
                record.reason = Some(SKIP_NO_TEMPLATE_TYPE.to_string());
                return record;
            }
        };
        record.file_type = Some(kind);

        let size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => return record.into_error(format!("cannot stat: {}", e)),
        };
        record.size = Some(size);
        if size > self.config.max_file_size {
            record.reason = Some(SKIP_TOO_LARGE.to_string());
            return record;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                record.reason = Some(SKIP_BINARY.to_string());
                return record;
            }
            Err(e) => return record.into_error(format!("cannot read: {}", e)),
        };

        if attribution::has_attribution(&content, &self.config.primary_author) {
            record.reason = Some(SKIP_ALREADY_ATTRIBUTED.to_string());
            return record;
        }

        let template = match self.templates.load(kind.template_name()) {
            Some(template) => template,
            None => {
                record.reason = Some(SKIP_TEMPLATE_NOT_FOUND.to_string());
                return record;
            }
        };

        let data = AttributionData::generate(&self.config.primary_author, path);
        let new_content = compose(kind, &template, &data, &content, path);

        if self.config.dry_run {
            record.status = FileStatus::Processed;
            record.attribution = Some(data);
            return record;
        }

        match std::fs::write(path, new_content) {
            Ok(()) => {
                record.status = FileStatus::Modified;
                record.attribution = Some(data);
                record
            }
            Err(e) => record.into_error(format!("cannot write: {}", e)),
        }
    }
}

/// Compose the rewritten file. Documents take the whole template as the new
/// body, folding the original content and the parent directory name into
/// the content/project placeholders; every other category gets the rendered
/// header prepended with a blank-line separator, original bytes untouched.
fn compose(
    kind: FileKind,
    template: &str,
    data: &AttributionData,
    content: &str,
    path: &Path,
) -> String {
    if kind.category() == Category::Document {
        let project = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        attribution::render_with_extras(
            template,
            data,
            &[
                ("PROJECT_NAME", project.as_str()),
                ("PROJECT_DESCRIPTION", "Project description here"),
                ("PROJECT_CONTENT", content),
            ],
        )
    } else {
        let header = attribution::render(template, data);
        format!("{}\n\n{}", header, content)
    }
}

fn display_relative(path: &Path) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    path.strip_prefix(&cwd)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
