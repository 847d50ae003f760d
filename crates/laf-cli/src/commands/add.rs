//! `laf add` — recursively add attribution headers to a project tree.

use std::path::Path;

use laf_core::Engine;

pub fn run(
    path: &str,
    config_path: Option<&str>,
    author: Option<&str>,
    dry_run: bool,
) -> Result<i32, String> {
    let mut config = super::load_config(config_path, author).map_err(|e| e.to_string())?;
    if dry_run {
        config.dry_run = true;
    }

    let engine = Engine::new(config).map_err(|e| e.to_string())?;
    tracing::debug!(
        "configured author '{}', template dir '{}'",
        engine.config().primary_author,
        engine.config().template_dir
    );

    println!("🚀 Starting Layered Authorship Framework addition...");
    println!("📁 Root path: {}", path);
    if engine.config().dry_run {
        println!("⚙️  Mode: DRY RUN");
    }

    let report = engine.run(Path::new(path)).map_err(|e| e.to_string())?;

    println!();
    println!("📊 PROCESSING REPORT");
    println!("{}", "=".repeat(50));
    println!("⏱️  Processing time: {:.2}s", report.duration_secs);
    println!("📄 Files processed: {}", report.processed);
    if engine.config().dry_run {
        println!("✅ Files that would be modified: {}", report.would_modify());
    } else {
        println!("✅ Files modified: {}", report.modified);
    }
    println!("⏭️  Files skipped: {}", report.skipped);
    println!("❌ Errors: {}", report.errors);

    if report.modified > 0 {
        println!();
        println!("📝 MODIFIED FILES:");
        for file in report.modified_files() {
            let kind = file
                .file_type
                .map(|k| format!("{:?}", k).to_lowercase())
                .unwrap_or_else(|| "unknown".to_string());
            println!("  ✅ {} ({})", file.path, kind);
        }
    }

    if report.errors > 0 {
        println!();
        println!("❌ ERRORS:");
        for file in report.error_files() {
            println!(
                "  ❌ {}: {}",
                file.path,
                file.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    if let Some(report_path) = &report.report_path {
        println!();
        println!("📋 Detailed report saved to: {}", report_path.display());
    }

    println!();
    println!("🎉 Framework addition complete!");
    Ok(0)
}
