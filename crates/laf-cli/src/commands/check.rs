//! `laf check` — pre-commit compliance gate.
//!
//! Exit 0 when every staged file that needs attribution has it (or was
//! remediated and re-checked); exit 1 otherwise. The remediation prompt is
//! only offered on a terminal; a hook running without one aborts instead
//! of blocking on input.

use std::io::IsTerminal;

use console::style;
use dialoguer::Confirm;

use laf_core::ComplianceGate;

pub fn run(config_path: Option<&str>, author: Option<&str>) -> Result<i32, String> {
    let config = super::load_config(config_path, author).map_err(|e| e.to_string())?;
    let gate = ComplianceGate::new(config);

    println!("🔍 Layered Authorship Framework — pre-commit check");

    let (missing, compliant) = gate.check_staged_files();
    if compliant {
        println!(
            "{}",
            style("✅ All staged files have proper attribution").green()
        );
        return Ok(0);
    }

    println!(
        "{}",
        style("⚠️  The following staged files are missing attribution:").yellow()
    );
    for path in &missing {
        println!("  - {}", path.display());
    }

    if std::io::stdin().is_terminal() {
        let remediate = Confirm::new()
            .with_prompt("Add attribution automatically?")
            .default(false)
            .interact()
            .unwrap_or(false);

        if remediate {
            if gate.remediate(&missing) {
                let (_, compliant) = gate.check_staged_files();
                if compliant {
                    println!("{}", style("✅ Attribution added successfully").green());
                    return Ok(0);
                }
            }
            println!("{}", style("❌ Failed to add attribution").red());
            return Ok(1);
        }
    }

    println!(
        "{}",
        style("❌ Commit aborted. Add attribution with `laf add`.").red()
    );
    Ok(1)
}
