//! Git helpers for the compliance gate.
//!
//! All three operations are synchronous `git` process invocations. A
//! failing call degrades to "no information" rather than an error; the
//! gate treats an empty staged list as "nothing to check".

use std::path::{Path, PathBuf};
use std::process::Command;

/// Repository root via `git rev-parse --show-toplevel`, falling back to
/// the current directory when not in a repository.
pub fn repo_root() -> PathBuf {
    Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Staged paths (added, copied, or modified), relative to `repo`.
///
/// Empty on any underlying failure, which silently permits commits when
/// the git call itself breaks. Known policy gap.
pub fn staged_files(repo: &Path) -> Vec<PathBuf> {
    Command::new("git")
        .args(["diff", "--cached", "--name-only", "--diff-filter=ACM"])
        .current_dir(repo)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(PathBuf::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Re-stage a path after remediation.
pub fn stage(repo: &Path, path: &Path) -> bool {
    Command::new("git")
        .arg("add")
        .arg(path)
        .current_dir(repo)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
