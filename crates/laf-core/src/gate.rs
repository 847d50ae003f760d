//! Commit compliance gate.
//!
//! Applies the engine's attribution predicate to the staged set and, on
//! request, remediates non-compliant files through the engine's own
//! file-processing entry point before re-staging them.
//!
//! Checking works without a configured author (the fixed framework markers
//! still apply); remediation constructs a full engine and therefore
//! requires one. Remediation is best-effort, not transactional: any
//! failure aborts the batch, and files fixed earlier in the batch stay
//! fixed. Callers must re-check rather than assume success.

use std::path::{Path, PathBuf};

use crate::attribution;
use crate::classify::FileKind;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::git;
use crate::report::FileStatus;

pub struct ComplianceGate {
    config: EngineConfig,
    repo: PathBuf,
}

impl ComplianceGate {
    /// Gate over the enclosing git repository (current directory when not
    /// in one).
    pub fn new(config: EngineConfig) -> Self {
        let repo = git::repo_root();
        Self::with_repo(config, repo)
    }

    pub fn with_repo(config: EngineConfig, repo: PathBuf) -> Self {
        Self { config, repo }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Whether a path is of a kind that requires attribution. Same
    /// classification the engine uses; there is no separate extension list.
    pub fn needs_attribution(&self, path: &Path) -> bool {
        FileKind::from_path(path).is_some()
    }

    /// The shared predicate, evaluated against on-disk content. Unreadable
    /// or non-UTF-8 files count as attributed: binaries are not this
    /// gate's business.
    pub fn has_attribution(&self, path: &Path) -> bool {
        match std::fs::read_to_string(path) {
            Ok(content) => attribution::has_attribution(&content, &self.config.primary_author),
            Err(_) => true,
        }
    }

    /// Check every staged, existing, attribution-needing file. Returns the
    /// non-compliant paths (repo-relative, as git reports them) and whether
    /// the staged set is compliant as a whole.
    pub fn check_staged_files(&self) -> (Vec<PathBuf>, bool) {
        let staged = git::staged_files(&self.repo);
        let mut missing = Vec::new();

        for path in staged {
            let full = self.repo.join(&path);
            if full.exists() && self.needs_attribution(&full) && !self.has_attribution(&full) {
                missing.push(path);
            }
        }

        let compliant = missing.is_empty();
        (missing, compliant)
    }

    /// Remediate the given files: copy each into a per-run unique staging
    /// directory, run the engine on the copy, copy the result back, and
    /// re-stage. Returns false as soon as any step fails for any file;
    /// earlier files are not rolled back.
    pub fn remediate(&self, missing: &[PathBuf]) -> bool {
        let engine = match Engine::new(self.config.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                tracing::warn!("cannot remediate: {}", e);
                return false;
            }
        };

        for path in missing {
            let full = self.repo.join(path);
            let file_name = match full.file_name() {
                Some(name) => name.to_owned(),
                None => {
                    tracing::warn!("cannot remediate '{}': no file name", full.display());
                    return false;
                }
            };

            let staging = match tempfile::TempDir::new() {
                Ok(dir) => dir,
                Err(e) => {
                    tracing::warn!("cannot create staging directory: {}", e);
                    return false;
                }
            };
            let scratch = staging.path().join(file_name);

            if let Err(e) = std::fs::copy(&full, &scratch) {
                tracing::warn!("cannot copy '{}' to staging: {}", full.display(), e);
                return false;
            }

            let record = engine.process_file(&scratch);
            if record.status == FileStatus::Error {
                tracing::warn!(
                    "engine failed on '{}': {}",
                    path.display(),
                    record.error.as_deref().unwrap_or("unknown error")
                );
                return false;
            }

            if scratch.exists() {
                if let Err(e) = std::fs::copy(&scratch, &full) {
                    tracing::warn!("cannot copy result back to '{}': {}", full.display(), e);
                    return false;
                }
                if !git::stage(&self.repo, path) {
                    tracing::warn!("cannot re-stage '{}'", path.display());
                    return false;
                }
                tracing::info!("added attribution to {}", path.display());
            }
        }
        true
    }
}
