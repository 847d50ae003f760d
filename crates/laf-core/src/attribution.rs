//! Attribution data, marker detection, and template rendering.
//!
//! `has_attribution` is the single predicate both the engine (idempotence)
//! and the compliance gate (commit blocking) rely on. Keep it here and
//! nowhere else.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Marker phrases that mean "this file is already attributed". Matched
/// case-insensitively, together with the configured author's full name.
const ATTRIBUTION_MARKERS: &[&str] = &["layered authorship framework", "authorship attribution"];

const DEFAULT_ASSISTANCE: &str = "code structure and formatting";
const DEFAULT_CONTRIBUTION_LEVEL: &str = "Level 2 - Assisted Development";

/// Check whether file content already carries an attribution header.
///
/// Case-insensitive substring test. An empty `primary_author` contributes
/// no marker.
pub fn has_attribution(content: &str, primary_author: &str) -> bool {
    let content_lower = content.to_lowercase();
    if ATTRIBUTION_MARKERS
        .iter()
        .any(|marker| content_lower.contains(marker))
    {
        return true;
    }
    let author = primary_author.trim().to_lowercase();
    !author.is_empty() && content_lower.contains(&author)
}

/// Authorship metadata generated fresh for each file at processing time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionData {
    pub primary_author: String,
    pub assistance_type: String,
    pub collaborators: String,
    pub creation_date: String,
    pub last_modified: String,
    pub artifact_id: String,
    pub contribution_level: String,
    pub relative_file_path: String,
}

impl AttributionData {
    /// Build attribution for `path`, stamped with today's date and a
    /// best-effort unique artifact id.
    pub fn generate(primary_author: &str, path: &Path) -> Self {
        let now = chrono::Local::now().format("%Y-%m-%d").to_string();
        let relative = relative_to_cwd(path);
        let artifact_id = artifact_id(primary_author, &relative);

        Self {
            primary_author: primary_author.to_string(),
            assistance_type: DEFAULT_ASSISTANCE.to_string(),
            collaborators: "None".to_string(),
            creation_date: now.clone(),
            last_modified: now,
            artifact_id,
            contribution_level: DEFAULT_CONTRIBUTION_LEVEL.to_string(),
            relative_file_path: relative,
        }
    }

    /// Placeholder lookup. Snake-case and camelCase token forms map to the
    /// same field; unknown tokens resolve to `None` and stay verbatim.
    fn token_value(&self, token: &str) -> Option<&str> {
        match token {
            "primary_author" | "primaryAuthor" => Some(&self.primary_author),
            "assistance_type" | "assistanceType" => Some(&self.assistance_type),
            "collaborators" => Some(&self.collaborators),
            "creation_date" | "creationDate" => Some(&self.creation_date),
            "last_modified" | "lastModified" => Some(&self.last_modified),
            "artifact_id" | "artifactId" => Some(&self.artifact_id),
            "contribution_level" | "contributionLevel" => Some(&self.contribution_level),
            _ => None,
        }
    }
}

/// `<INITIALS>-<unix-ts>-<path hash % 1e6, zero-padded>`. Uniqueness is
/// best-effort: two files hashing to the same suffix in the same second
/// collide.
fn artifact_id(primary_author: &str, relative_path: &str) -> String {
    let mut hasher = DefaultHasher::new();
    relative_path.hash(&mut hasher);
    let suffix = hasher.finish() % 1_000_000;
    format!(
        "{}-{}-{:06}",
        author_initials(primary_author),
        chrono::Utc::now().timestamp(),
        suffix
    )
}

fn author_initials(author: &str) -> String {
    let initials: String = author
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if initials.is_empty() {
        "LAF".to_string()
    } else {
        initials
    }
}

fn relative_to_cwd(path: &Path) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    path.strip_prefix(&cwd)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

/// Render a template against attribution data.
///
/// Single pass over `{token}` occurrences: each token is looked up once and
/// either replaced or kept verbatim. Values are never re-scanned, so a value
/// containing another placeholder's literal text is not substituted again.
pub fn render(template: &str, data: &AttributionData) -> String {
    render_with_extras(template, data, &[])
}

/// Like [`render`], with additional `(token, value)` pairs that take
/// precedence over the attribution fields. Used for the document category's
/// `PROJECT_NAME` / `PROJECT_DESCRIPTION` / `PROJECT_CONTENT` tokens.
pub fn render_with_extras(
    template: &str,
    data: &AttributionData,
    extras: &[(&str, &str)],
) -> String {
    let token_re = regex::Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
    token_re
        .replace_all(template, |caps: &regex::Captures| {
            let token = &caps[1];
            extras
                .iter()
                .find(|(name, _)| *name == token)
                .map(|(_, value)| value.to_string())
                .or_else(|| data.token_value(token).map(|v| v.to_string()))
                .unwrap_or_else(|| format!("{{{}}}", token))
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> AttributionData {
        AttributionData {
            primary_author: "Ada Lovelace".to_string(),
            assistance_type: "analysis".to_string(),
            collaborators: "None".to_string(),
            creation_date: "2026-01-01".to_string(),
            last_modified: "2026-01-01".to_string(),
            artifact_id: "AL-1234-000042".to_string(),
            contribution_level: "Level 2 - Assisted Development".to_string(),
            relative_file_path: "src/demo.py".to_string(),
        }
    }

    #[test]
    fn test_has_attribution_markers() {
        assert!(has_attribution("# Layered Authorship Framework", "Ada"));
        assert!(has_attribution("AUTHORSHIP ATTRIBUTION block", ""));
        assert!(has_attribution("written by ada lovelace", "Ada Lovelace"));
        assert!(!has_attribution("print(1)", "Ada Lovelace"));
    }

    #[test]
    fn test_empty_author_is_not_a_marker() {
        assert!(!has_attribution("anything at all", ""));
        assert!(!has_attribution("anything at all", "   "));
    }

    #[test]
    fn test_snake_and_camel_tokens_render_identically() {
        let data = sample_data();
        let out = render("{artifact_id} == {artifactId}", &data);
        assert_eq!(out, "AL-1234-000042 == AL-1234-000042");
    }

    #[test]
    fn test_unknown_token_kept_verbatim() {
        let data = sample_data();
        assert_eq!(render("keep {foo} here", &data), "keep {foo} here");
    }

    #[test]
    fn test_value_containing_placeholder_text_not_resubstituted() {
        let mut data = sample_data();
        data.assistance_type = "{artifact_id}".to_string();
        let out = render("{assistance_type} / {artifact_id}", &data);
        assert_eq!(out, "{artifact_id} / AL-1234-000042");
    }

    #[test]
    fn test_extras_take_precedence() {
        let data = sample_data();
        let out = render_with_extras(
            "# {PROJECT_NAME}\n{PROJECT_CONTENT}",
            &data,
            &[("PROJECT_NAME", "demo"), ("PROJECT_CONTENT", "body")],
        );
        assert_eq!(out, "# demo\nbody");
    }

    #[test]
    fn test_artifact_id_shape() {
        let id = artifact_id("Ada Lovelace", "src/demo.py");
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "AL");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 6);
    }

    #[test]
    fn test_author_initials() {
        assert_eq!(author_initials("Ada Lovelace"), "AL");
        assert_eq!(author_initials("Jean-Luc Picard"), "JP");
        assert_eq!(author_initials(""), "LAF");
    }
}
