//! CLI command implementations.
//!
//! Each submodule corresponds to a top-level `laf` subcommand and reuses
//! the laf-core domain logic. Commands return the process exit code; an
//! `Err` is a run-fatal failure that `main` prints and maps to exit 1.

pub mod add;
pub mod check;

use std::path::Path;

use laf_core::{EngineConfig, LafError};

/// Build an `EngineConfig` from the optional override document and the
/// optional `--author` flag (the flag wins over the document).
pub fn load_config(
    config_path: Option<&str>,
    author: Option<&str>,
) -> Result<EngineConfig, LafError> {
    let mut config = match config_path {
        Some(path) => EngineConfig::from_file(Path::new(path))?,
        None => EngineConfig::default(),
    };
    if let Some(author) = author {
        config.primary_author = author.to_string();
    }
    Ok(config)
}
