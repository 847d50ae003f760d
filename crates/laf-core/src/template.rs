//! Read-only template store.
//!
//! Templates are opaque text files looked up by name under a configured
//! root. A missing template is a missing external dependency, not an
//! engine error: the caller records a skip and moves on.

use std::path::PathBuf;

pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load a template by file name, or `None` if it cannot be read.
    pub fn load(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("template '{}' not found: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_existing_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("header.py"), "# {primary_author}\n").unwrap();
        let store = TemplateStore::new(dir.path());
        assert_eq!(store.load("header.py").unwrap(), "# {primary_author}\n");
    }

    #[test]
    fn test_missing_template_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        assert!(store.load("nope.md").is_none());
    }
}
