//! The `quizapp play` command.

use anyhow::{Context, Result};

use quizapp_core::catalog::validate_catalog;
use quizapp_core::{Catalog, Console, QuizApp, QuizAppConfig, Session};

pub fn execute(config: &QuizAppConfig) -> Result<()> {
    let catalog = Catalog::builtin().context("built-in catalog is malformed")?;
    for w in validate_catalog(&catalog) {
        tracing::warn!(subject = ?w.subject, "{}", w.message);
    }
    tracing::info!(subjects = catalog.subjects.len(), "catalog loaded");

    let mut app = QuizApp::new(Session::new(catalog), Console::stdio())
        .with_explanations(config.show_explanations);
    app.run()?;

    Ok(())
}
