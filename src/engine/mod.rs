mod rules;

use crate::config::Config;
use crate::error::AnalysisError;
use crate::scanner;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// How hard a violation should hurt. Ordered from least to most severe.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Gentle,
    Moderate,
    Brutal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Gentle => write!(f, "gentle"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Brutal => write!(f, "brutal"),
        }
    }
}

/// One issue flagged by a rule in one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub rule: &'static str,
    pub file_path: String,
    pub line_number: usize,
    pub severity: Severity,
    pub message: String,
    pub context: Value,
}

impl Violation {
    pub fn new(
        rule: &'static str,
        file_path: &str,
        line_number: usize,
        severity: Severity,
        message: String,
        context: Value,
    ) -> Self {
        Violation {
            rule,
            file_path: file_path.to_string(),
            line_number,
            severity,
            message,
            context,
        }
    }
}

/// Everything one run produced: how many files were looked at and the flat,
/// enumeration-ordered list of violations.
#[derive(Debug)]
pub struct Analysis {
    pub files_scanned: usize,
    pub violations: Vec<Violation>,
}

/// Applies the fixed rule list to one file at a time.
#[derive(Debug, Default)]
pub struct RuleEngine {
    max_file_size: Option<u64>,
}

impl RuleEngine {
    pub fn new(max_file_size: Option<u64>) -> Self {
        RuleEngine { max_file_size }
    }

    /// Reads `path` and runs every rule over it. Files that cannot be read
    /// (or exceed the configured size) yield nothing.
    pub fn analyze_file(&self, path: &Path) -> Vec<Violation> {
        let Some(content) = self.read_source(path) else {
            return vec![];
        };
        let file_path = path.to_string_lossy();
        let violations = analyze_source(&file_path, &content);
        tracing::debug!(
            file = %file_path,
            violations = violations.len(),
            "analyzed file"
        );
        violations
    }

    fn read_source(&self, path: &Path) -> Option<String> {
        if let Some(limit) = self.max_file_size {
            match fs::metadata(path) {
                Ok(meta) if meta.len() > limit => {
                    tracing::debug!(
                        file = %path.display(),
                        size = meta.len(),
                        limit,
                        "skipping file over size limit"
                    );
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(file = %path.display(), error = %e, "could not stat file");
                    return None;
                }
            }
        }

        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "could not read file");
                None
            }
        }
    }
}

/// Runs the rules, in declaration order, over already-loaded content.
pub fn analyze_source(file_path: &str, content: &str) -> Vec<Violation> {
    rules::RULES
        .iter()
        .flat_map(|rule| rule(file_path, content))
        .collect()
}

/// Turns a root path (file or directory) into one flat list of violations.
///
/// A root that is missing or unreadable is fatal; anything that goes wrong
/// with an individual file below it only means fewer violations.
pub fn run(config: &Config, root: &Path) -> Result<Analysis, AnalysisError> {
    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AnalysisError::PathNotFound(root.to_path_buf()),
        _ => AnalysisError::Inaccessible {
            path: root.to_path_buf(),
            source,
        },
    })?;

    let files: Vec<PathBuf> = if metadata.is_file() {
        if scanner::is_supported(root) {
            vec![root.to_path_buf()]
        } else {
            vec![]
        }
    } else if metadata.is_dir() {
        scanner::find_source_files(root, &config.exclude)?
    } else {
        return Err(AnalysisError::UnsupportedPath(root.to_path_buf()));
    };

    let engine = RuleEngine::new(config.max_file_size);
    let violations = files
        .iter()
        .flat_map(|file| engine.analyze_file(file))
        .collect::<Vec<_>>();

    tracing::info!(
        files = files.len(),
        violations = violations.len(),
        "analysis complete"
    );

    Ok(Analysis {
        files_scanned: files.len(),
        violations,
    })
}
