//! The `quizapp subjects` command.

use anyhow::{Context, Result};

use quizapp_core::catalog::validate_catalog;
use quizapp_core::Catalog;

pub fn execute() -> Result<()> {
    let catalog = Catalog::builtin().context("built-in catalog is malformed")?;

    println!("Catalog: {} ({} subjects)", catalog.name, catalog.subjects.len());
    for subject in &catalog.subjects {
        println!(
            "  {} ({} questions)",
            subject.label,
            subject.questions.len()
        );
    }

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
