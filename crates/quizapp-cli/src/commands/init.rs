//! The `quizapp init` command.

use anyhow::{Context, Result};

use quizapp_core::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("quizapp.toml");
    if path.exists() {
        println!("quizapp.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG).context("failed to write quizapp.toml")?;
        println!("Created quizapp.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizapp.toml to taste");
    println!("  2. Run: quizapp");

    Ok(())
}
