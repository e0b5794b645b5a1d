//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizapp configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAppConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Print the explanation after each correct answer.
    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

fn default_log_filter() -> String {
    "quizapp=warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for QuizAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_explanations: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizapp.toml` in the current directory
/// 2. `~/.config/quizapp/config.toml`
///
/// With neither present the defaults apply.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizAppConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizapp.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content, &path)
        }
        None => Ok(QuizAppConfig::default()),
    }
}

/// Parse a TOML config document.
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<QuizAppConfig> {
    toml::from_str::<QuizAppConfig>(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizapp"))
}

/// Starter config written by `quizapp init`.
pub const SAMPLE_CONFIG: &str = r#"# quizapp configuration

# Tracing filter for diagnostics on stderr (RUST_LOG takes precedence).
log_filter = "quizapp=warn"

# Print the explanation after each correct answer.
show_explanations = true
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizAppConfig::default();
        assert_eq!(config.log_filter, "quizapp=warn");
        assert!(config.show_explanations);
    }

    #[test]
    fn sample_config_parses_to_defaults() {
        let config = parse_config_str(SAMPLE_CONFIG, Path::new("quizapp.toml")).unwrap();
        assert_eq!(config, QuizAppConfig::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config =
            parse_config_str("show_explanations = false\n", Path::new("quizapp.toml")).unwrap();
        assert!(!config.show_explanations);
        assert_eq!(config.log_filter, "quizapp=warn");
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "log_filter = \"quizapp=debug\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.log_filter, "quizapp=debug");
        assert!(config.show_explanations);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "show_explanations = maybe").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
