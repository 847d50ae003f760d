//! File classification: extension → supported kind → template.
//!
//! The mapping is a closed enum rather than a lookup table, so adding a
//! supported type is a deliberate, compile-checked change. Both the engine
//! and the compliance gate classify through [`FileKind::from_path`]; there
//! is no second extension list anywhere.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Semantic category of a supported file kind. Documents get the full
/// template treatment (original content folded into the template); every
/// other category gets a header prepended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Code,
    Markup,
    Document,
    Config,
}

/// A file kind the engine knows how to attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Python,
    JavaScript,
    Html,
    Markdown,
    Yaml,
}

impl FileKind {
    /// Classify by extension, case-insensitive. `None` means the file is
    /// unsupported and will always be skipped.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "py" => Some(Self::Python),
            "js" | "jsx" | "ts" | "tsx" => Some(Self::JavaScript),
            "html" => Some(Self::Html),
            "md" => Some(Self::Markdown),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Python | Self::JavaScript => Category::Code,
            Self::Html => Category::Markup,
            Self::Markdown => Category::Document,
            Self::Yaml => Category::Config,
        }
    }

    /// Name of the template file in the template store.
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Python => "python-header-template.py",
            Self::JavaScript => "code-header-template.js",
            Self::Html => "html-header-template.html",
            Self::Markdown => "README_TEMPLATE.md",
            Self::Yaml => "project-metadata.yml",
        }
    }
}
