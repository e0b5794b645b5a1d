//! The question catalog.
//!
//! The built-in catalog ships as TOML embedded at compile time and is parsed
//! once at startup. It is read-only for the rest of the process.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Subject;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

const BUILTIN_CATALOG: &str = include_str!("../catalogs/builtin.toml");

/// Intermediate TOML structure for catalog documents.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    subjects: Vec<Subject>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    name: String,
}

/// Ordered subjects and their questions.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub name: String,
    pub subjects: Vec<Subject>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        parse_catalog_str(BUILTIN_CATALOG, Path::new("builtin.toml"))
    }

    /// First subject whose label starts with `prefix`, in catalog order.
    pub fn select(&self, prefix: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.label.starts_with(prefix))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.label.as_str())
    }
}

/// Parse a TOML catalog document.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse catalog TOML: {}", source_path.display()))?;

    Ok(Catalog {
        name: parsed.catalog.name,
        subjects: parsed.subjects,
    })
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The subject label, or `None` for catalog-wide problems.
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for content mistakes.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.subjects.is_empty() {
        warnings.push(ValidationWarning {
            subject: None,
            message: "catalog has no subjects".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for subject in &catalog.subjects {
        if !seen.insert(&subject.label) {
            warnings.push(ValidationWarning {
                subject: Some(subject.label.clone()),
                message: format!("duplicate subject label: {}", subject.label),
            });
        }
    }

    for subject in &catalog.subjects {
        let warn = |message: String| ValidationWarning {
            subject: Some(subject.label.clone()),
            message,
        };

        if !has_numeric_prefix(&subject.label) {
            warnings.push(warn("label has no \"N. \" prefix".into()));
        }

        if subject.questions.is_empty() {
            warnings.push(warn("subject has no questions".into()));
        }

        for (i, q) in subject.questions.iter().enumerate() {
            if q.options.len() != OPTION_COUNT {
                warnings.push(warn(format!(
                    "question {} has {} options, expected {OPTION_COUNT}",
                    i + 1,
                    q.options.len()
                )));
            }
            if !q.options.contains(&q.answer) {
                warnings.push(warn(format!(
                    "question {}: answer {:?} is not one of the options",
                    i + 1,
                    q.answer
                )));
            }
        }
    }

    warnings
}

fn has_numeric_prefix(label: &str) -> bool {
    label
        .split_once(". ")
        .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
