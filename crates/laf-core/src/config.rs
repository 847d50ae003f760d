//! Engine configuration: built-in defaults plus an optional JSON override
//! document.
//!
//! Override keys mirror the config fields in camelCase. Unknown keys are
//! ignored; present keys replace the default wholesale (sets are not
//! merged). A missing override file means "use defaults"; a malformed one
//! aborts the run.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::LafError;

const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    "dist",
    "build",
    ".vscode",
    ".idea",
    "__pycache__",
    "target",
];

const DEFAULT_EXCLUDE_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Immutable configuration for one engine run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Full name stamped into attribution headers. Must be non-empty by the
    /// time an [`crate::engine::Engine`] is constructed.
    pub primary_author: String,
    /// Directory names pruned before descent.
    pub exclude_dirs: HashSet<String>,
    /// File names that never produce a record.
    pub exclude_files: HashSet<String>,
    /// Files above this many bytes are skipped without being read.
    pub max_file_size: u64,
    /// Root directory of the template store.
    pub template_dir: String,
    /// Classify and render but write nothing.
    pub dry_run: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            primary_author: String::new(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude_files: DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            template_dir: "templates".to_string(),
            dry_run: false,
        }
    }
}

/// Partial override document parsed from JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(default)]
    pub primary_author: Option<String>,
    #[serde(default)]
    pub exclude_dirs: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_files: Option<Vec<String>>,
    #[serde(default)]
    pub max_file_size: Option<u64>,
    #[serde(default)]
    pub template_dir: Option<String>,
    #[serde(default)]
    pub dry_run: Option<bool>,
}

impl EngineConfig {
    /// Defaults with an override document applied on top.
    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        let mut config = Self::default();
        if let Some(author) = overrides.primary_author {
            config.primary_author = author;
        }
        if let Some(dirs) = overrides.exclude_dirs {
            config.exclude_dirs = dirs.into_iter().collect();
        }
        if let Some(files) = overrides.exclude_files {
            config.exclude_files = files.into_iter().collect();
        }
        if let Some(size) = overrides.max_file_size {
            config.max_file_size = size;
        }
        if let Some(dir) = overrides.template_dir {
            config.template_dir = dir;
        }
        if let Some(dry) = overrides.dry_run {
            config.dry_run = dry;
        }
        config
    }

    /// Load an override document from disk and apply it over the defaults.
    ///
    /// A malformed or unreadable document is run-fatal.
    pub fn from_file(path: &Path) -> Result<Self, LafError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LafError::Config(format!("cannot read config '{}': {}", path.display(), e))
        })?;
        let overrides: ConfigOverrides = serde_json::from_str(&raw).map_err(|e| {
            LafError::Config(format!("malformed config '{}': {}", path.display(), e))
        })?;
        Ok(Self::with_overrides(overrides))
    }

    /// Explicit validation, called at engine construction.
    pub fn validate(&self) -> Result<(), LafError> {
        if self.primary_author.trim().is_empty() {
            return Err(LafError::Config(
                "primary author must not be empty (set --author or primaryAuthor in the config)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
